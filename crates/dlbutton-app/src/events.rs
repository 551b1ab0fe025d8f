//! Events consumed and commands produced by the download screen.

use std::time::Duration;

use dlbutton_control::AnimationTick;
use dlbutton_core::{
    ArtifactChoice, ButtonState, CompletionEvent, DetailLink, JobId, NotificationPayload, Outcome,
};

use crate::detail::DetailView;

/// Input to the screen event loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenEvent {
    /// Selector changed. `None` clears the selection.
    Select(Option<ArtifactChoice>),
    /// The control was clicked.
    Click,
    /// Animation frame from the ticker.
    FrameTick,
    /// The transport finished a job.
    DownloadCompleted(CompletionEvent),
    /// A scheduled handback timer fired.
    HandbackElapsed { generation: u64 },
    /// The user tapped the notification (or its action). Carries the
    /// deep link the notification was posted with.
    NotificationTapped(String),
    /// The user closed the detail view.
    DismissDetail,
    /// The host resized the control.
    Resize { width: u32, height: u32 },
    /// Stop the event loop.
    Shutdown,
}

/// Side effect requested by the screen, applied by the runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenCommand {
    /// Start the frame ticker.
    StartAnimation,
    /// Stop the frame ticker.
    StopAnimation,
    /// Draw a new frame.
    Redraw,
    /// Show a transient message.
    ShowMessage(String),
    /// Fire `HandbackElapsed { generation }` after `delay`.
    ScheduleHandback { delay: Duration, generation: u64 },
    /// Present the detail view for this link.
    OpenDetail(DetailLink),
}

/// Observable state of the screen, published after every event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScreenSnapshot {
    pub button_state: ButtonState,
    pub enabled: bool,
    pub label: String,
    pub tick: AnimationTick,
    pub selection: Option<ArtifactChoice>,
    pub tracked_job: Option<JobId>,
    pub last_outcome: Option<Outcome>,
    pub last_notification: Option<NotificationPayload>,
    pub detail: Option<DetailView>,
    pub last_message: Option<String>,
}
