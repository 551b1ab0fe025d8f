//! The self-drawing loading button.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dlbutton_core::ButtonState;
use tokio::time::Instant;
use tracing::debug;

use crate::animation::{AnimationTick, LoadingAnimation};
use crate::canvas::{Canvas, FontMetrics, TextBounds, TextMeasurer};
use crate::geometry::{MeasureSpec, Padding, RectF, Size, resolve_size};
use crate::state::{ButtonInput, Effect, Label, Transition, transition};
use crate::style::ButtonStyle;

/// Animated download button.
///
/// Owns its [`ButtonState`], the animation clock and every piece of
/// geometry it draws with. The host feeds it clicks, state commands, size
/// constraints and frame timestamps, and hands it a [`Canvas`] to draw on.
pub struct LoadingButton {
    state: ButtonState,
    label: Label,
    style: ButtonStyle,
    measurer: Arc<dyn TextMeasurer>,
    font_metrics: FontMetrics,
    /// Measured once, the first time the loading label is shown.
    loading_label_bounds: Option<TextBounds>,
    padding: Padding,
    suggested_min_width: u32,
    suggested_min_height: u32,
    size: Size,
    radius: f32,
    circle_rect: RectF,
    animation: LoadingAnimation,
    tick: AnimationTick,
}

impl fmt::Debug for LoadingButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingButton")
            .field("state", &self.state)
            .field("label", &self.label)
            .field("size", &self.size)
            .field("animating", &self.animation.is_running())
            .field("tick", &self.tick)
            .finish_non_exhaustive()
    }
}

impl LoadingButton {
    /// Create an idle button.
    ///
    /// Font metrics depend only on the font, so they are read here once.
    pub fn new(style: ButtonStyle, measurer: Arc<dyn TextMeasurer>, cycle: Duration) -> Self {
        let font_metrics = measurer.font_metrics(style.text_size);
        Self {
            state: ButtonState::Completed,
            label: Label::Default,
            style,
            measurer,
            font_metrics,
            loading_label_bounds: None,
            padding: Padding::default(),
            suggested_min_width: 0,
            suggested_min_height: 0,
            size: Size::default(),
            radius: 0.0,
            circle_rect: RectF::default(),
            animation: LoadingAnimation::new(cycle),
            tick: AnimationTick::IDLE,
        }
    }

    #[must_use]
    pub const fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Minimum size suggested by the host, excluding padding.
    #[must_use]
    pub const fn with_suggested_minimum(mut self, width: u32, height: u32) -> Self {
        self.suggested_min_width = width;
        self.suggested_min_height = height;
        self
    }

    #[must_use]
    pub const fn state(&self) -> ButtonState {
        self.state
    }

    /// Text currently shown.
    #[must_use]
    pub fn label_text(&self) -> &str {
        match self.label {
            Label::Default => &self.style.default_label,
            Label::Loading => &self.style.loading_label,
        }
    }

    /// Whether the input surface accepts clicks.
    ///
    /// Disabled for as long as the animation clock runs, independent of the
    /// logical state.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !self.animation.is_running()
    }

    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    #[must_use]
    pub const fn tick(&self) -> AnimationTick {
        self.tick
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Oval the sweep circle is drawn in.
    #[must_use]
    pub const fn circle_rect(&self) -> RectF {
        self.circle_rect
    }

    #[must_use]
    pub const fn style(&self) -> &ButtonStyle {
        &self.style
    }

    /// Handle a user click.
    ///
    /// Only a click in `Completed` changes anything.
    pub fn perform_click(&mut self, now: Instant) -> Transition {
        self.apply_input(ButtonInput::Click, now)
    }

    /// Drive the button towards `target`.
    ///
    /// `Clicked` is only reachable by clicking; asking for it is a no-op.
    pub fn change_state(&mut self, target: ButtonState, now: Instant) -> Transition {
        match ButtonInput::toward(target) {
            Some(input) => self.apply_input(input, now),
            None => Transition {
                from: self.state,
                to: self.state,
                effects: Vec::new(),
            },
        }
    }

    fn apply_input(&mut self, input: ButtonInput, now: Instant) -> Transition {
        let result = transition(self.state, input);
        if !result.changed() {
            debug!(state = %self.state, ?input, "Ignoring input");
            return result;
        }

        for effect in &result.effects {
            match *effect {
                Effect::Relabel(label) => self.label = label,
                Effect::MeasureLabel => self.measure_loading_label(),
                Effect::StartAnimation => {
                    self.animation.start(now);
                    self.tick = self.animation.sample(now, self.size.width);
                }
                Effect::StopAnimation => {
                    self.animation.stop();
                    self.tick = AnimationTick::IDLE;
                }
                Effect::Invalidate => {}
            }
        }
        self.state = result.to;

        debug!(from = %result.from, to = %result.to, "Button state changed");
        result
    }

    fn measure_loading_label(&mut self) {
        if self.loading_label_bounds.is_none() {
            let bounds = self
                .measurer
                .text_bounds(&self.style.loading_label, self.style.text_size);
            self.loading_label_bounds = Some(bounds);
        }
        self.update_circle();
    }

    /// Resolve the control size against the parent constraints.
    ///
    /// Desired size is padding plus the suggested minimum on each axis.
    pub fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let desired_width = self
            .padding
            .horizontal()
            .saturating_add(self.suggested_min_width);
        let desired_height = self
            .padding
            .vertical()
            .saturating_add(self.suggested_min_height);

        let width = resolve_size(desired_width, width_spec);
        let height = resolve_size(desired_height, height_spec);
        if width.too_small || height.too_small {
            debug!(
                width = width.size,
                height = height.size,
                "Button measured smaller than desired"
            );
        }

        self.set_size(width.size as f32, height.size as f32);
        self.size
    }

    /// Apply a new size, recomputing dependent geometry when it changes.
    ///
    /// Returns whether the size changed.
    pub fn set_size(&mut self, width: f32, height: f32) -> bool {
        let size = Size::new(width.max(0.0), height.max(0.0));
        if size == self.size {
            return false;
        }
        self.size = size;
        self.radius = size.height / 2.0 * self.style.circle_size_multiplier;
        self.update_circle();
        true
    }

    fn update_circle(&mut self) {
        let Some(bounds) = self.loading_label_bounds else {
            return;
        };
        let center_x = self.size.width / 2.0
            + bounds.width() / 2.0
            + self.style.circle_margin_left
            + self.radius;
        let center_y = self.size.height / 2.0;
        self.circle_rect = RectF::around(center_x, center_y, self.radius);
    }

    /// Advance the animated values to `now`.
    pub fn advance(&mut self, now: Instant) -> AnimationTick {
        if self.animation.is_running() {
            self.tick = self.animation.sample(now, self.size.width);
        }
        self.tick
    }

    /// Draw the current frame.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let loading = self.state == ButtonState::Loading;

        canvas.fill(self.style.default_background);
        if loading {
            canvas.fill_rect(
                RectF::new(0.0, 0.0, self.tick.fill_offset, self.size.height),
                self.style.loading_background,
            );
        }

        canvas.draw_text(
            self.label_text(),
            self.size.width / 2.0,
            self.font_metrics.centered_baseline(self.size.height),
            self.style.text_size,
            self.style.text_color,
        );

        if loading {
            canvas.draw_arc(
                self.circle_rect,
                0.0,
                self.tick.sweep_degrees,
                self.style.circle_color,
            );
        }
    }
}
