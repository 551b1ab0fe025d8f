//! Self-drawing loading button.
//!
//! This crate contains the animated control that shows the lifecycle of a
//! background download:
//!
//! - `state` - pure state machine returning side-effect intents
//! - `animation` - time-sampled sweep angle and fill wipe
//! - `geometry` - measurement against host constraints
//! - `canvas` - drawing and font-measurement traits the host implements
//! - `button` - [`LoadingButton`], tying the above together
//!
//! The control never schedules its own frames. The host starts a frame
//! ticker on [`Effect::StartAnimation`], calls [`LoadingButton::advance`]
//! and [`LoadingButton::draw`] per frame, and stops the ticker on
//! [`Effect::StopAnimation`].

#![deny(unused_crate_dependencies)]

pub mod animation;
pub mod button;
pub mod canvas;
pub mod geometry;
pub mod state;
pub mod style;

pub use animation::{AnimationTick, FULL_SWEEP_DEGREES, LoadingAnimation};
pub use button::LoadingButton;
pub use canvas::{Canvas, Color, DrawOp, FontMetrics, RecordingCanvas, TextBounds, TextMeasurer};
pub use geometry::{MeasureMode, MeasureSpec, Padding, RectF, Resolved, Size, resolve_size};
pub use state::{ButtonInput, Effect, Label, Transition, transition};
pub use style::ButtonStyle;
