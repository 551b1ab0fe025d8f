//! Download screen orchestration.
//!
//! Ties the loading button to the download transport and the notification
//! surface:
//!
//! - `dispatcher` - notification channel, stale clearing, completion posts
//! - `detail` - the view a notification tap opens
//! - `screen` - synchronous event handlers returning commands
//! - `ticker` - frame ticker for the loading animation
//! - `runtime` - the single-task event loop and its handle
//!
//! There is no timeout or cancellation for an in-flight download: a job the
//! transport never completes leaves the button loading.

#![deny(unused_crate_dependencies)]

pub mod detail;
pub mod dispatcher;
pub mod events;
pub mod runtime;
pub mod screen;
pub mod ticker;

pub use detail::DetailView;
pub use dispatcher::{Imagery, NotificationDispatcher};
pub use events::{ScreenCommand, ScreenEvent, ScreenSnapshot};
pub use runtime::{FrameSink, ScreenError, ScreenHandle, ScreenRuntime};
pub use screen::{DownloadScreen, TrackedDownload};
pub use ticker::AnimationTicker;
