//! The download screen: selection, button, transport and notifications.
//!
//! `DownloadScreen` is a synchronous state holder. Each event handler
//! mutates the screen and returns the [`ScreenCommand`]s the runtime must
//! apply (ticker start/stop, redraws, messages, timers). Nothing here
//! sleeps or spawns.

use std::sync::Arc;
use std::time::Duration;

use dlbutton_control::{
    ButtonStyle, Effect, LoadingButton, MeasureSpec, TextMeasurer, Transition,
};
use dlbutton_core::{
    ArtifactCatalog, ArtifactChoice, ButtonState, CompletionClassifier, CompletionEvent,
    DetailLink, DownloadHandle, DownloadRequestBuilder, DownloadTransportPort,
    NotificationPayload, NotificationSurfacePort, Outcome, Selection, Settings, SettingsError,
    validate_settings,
};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::detail::DetailView;
use crate::dispatcher::{Imagery, NotificationDispatcher};
use crate::events::{ScreenCommand, ScreenEvent, ScreenSnapshot};

/// The one download the screen is waiting on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackedDownload {
    pub handle: DownloadHandle,
    pub file_name: String,
    pub choice: ArtifactChoice,
}

/// Orchestrates one loading button and its download.
pub struct DownloadScreen {
    button: LoadingButton,
    builder: DownloadRequestBuilder,
    catalog: ArtifactCatalog,
    selection: Option<Selection>,
    transport: Arc<dyn DownloadTransportPort>,
    dispatcher: NotificationDispatcher,
    grace_delay: Duration,
    tracked: Option<TrackedDownload>,
    handback_generation: u64,
    last_outcome: Option<Outcome>,
    last_notification: Option<NotificationPayload>,
    detail: Option<DetailView>,
    last_message: Option<String>,
}

impl DownloadScreen {
    /// Build a screen from validated settings.
    pub fn new(
        settings: &Settings,
        measurer: Arc<dyn TextMeasurer>,
        transport: Arc<dyn DownloadTransportPort>,
        surface: Arc<dyn NotificationSurfacePort>,
    ) -> Result<Self, SettingsError> {
        validate_settings(settings)?;

        let button = LoadingButton::new(
            ButtonStyle::from(&settings.button),
            measurer,
            settings.animation.cycle(),
        );

        Ok(Self {
            button,
            builder: DownloadRequestBuilder::new(settings.request.clone()),
            catalog: settings.artifacts.clone(),
            selection: None,
            transport,
            dispatcher: NotificationDispatcher::new(surface, settings.notification.clone()),
            grace_delay: settings.grace_delay(),
            tracked: None,
            handback_generation: 0,
            last_outcome: None,
            last_notification: None,
            detail: None,
            last_message: None,
        })
    }

    /// One-time setup when the screen is shown.
    pub fn initialize(&self) {
        self.dispatcher.ensure_channel();
    }

    pub const fn button(&self) -> &LoadingButton {
        &self.button
    }

    pub const fn tracked(&self) -> Option<&TrackedDownload> {
        self.tracked.as_ref()
    }

    pub const fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    pub const fn grace_delay(&self) -> Duration {
        self.grace_delay
    }

    /// Route one event to its handler.
    pub fn handle(&mut self, event: ScreenEvent, now: Instant) -> Vec<ScreenCommand> {
        match event {
            ScreenEvent::Select(choice) => {
                self.select(choice);
                Vec::new()
            }
            ScreenEvent::Click => self.click(now),
            ScreenEvent::FrameTick => self.frame(now),
            ScreenEvent::DownloadCompleted(event) => self.complete(event),
            ScreenEvent::HandbackElapsed { generation } => self.hand_back(generation, now),
            ScreenEvent::NotificationTapped(link) => self.open_detail(&link),
            ScreenEvent::DismissDetail => self.dismiss_detail(),
            ScreenEvent::Resize { width, height } => self.resize(width, height),
            ScreenEvent::Shutdown => Vec::new(),
        }
    }

    /// Change the selected artifact.
    pub fn select(&mut self, choice: Option<ArtifactChoice>) {
        self.selection = choice.and_then(|choice| self.catalog.select(choice));
        if choice.is_some() && self.selection.is_none() {
            warn!(choice = ?choice, "Selected artifact is not in the catalog");
        }
        debug!(selection = ?self.selection.as_ref().map(|s| s.choice), "Selection changed");
    }

    /// Handle a click on the control.
    ///
    /// Clicks while the input is disabled are dropped. Otherwise stale
    /// notifications are cleared, the selection is validated, and on success
    /// the request is submitted and the control starts loading.
    pub fn click(&mut self, now: Instant) -> Vec<ScreenCommand> {
        if !self.button.is_enabled() {
            debug!(state = %self.button.state(), "Click ignored while animating");
            return Vec::new();
        }

        self.dispatcher.clear_stale();

        let prepared = match self.builder.build(self.selection.as_ref()) {
            Ok(prepared) => prepared,
            Err(err) => {
                info!(error = %err, "Download not started");
                return self.message(err.user_message().to_string());
            }
        };

        let clicked = self.button.perform_click(now);
        if !clicked.changed() {
            return Vec::new();
        }
        let mut commands = effect_commands(&clicked);

        match self.transport.enqueue(&prepared.request) {
            Ok(handle) => {
                info!(
                    job_id = %handle.job_id,
                    url = %prepared.request.url,
                    "Download enqueued"
                );
                self.tracked = Some(TrackedDownload {
                    handle,
                    file_name: prepared.file_name,
                    choice: prepared.choice,
                });
                commands.extend(effect_commands(
                    &self.button.change_state(ButtonState::Loading, now),
                ));
            }
            Err(err) => {
                warn!(error = %err, url = %prepared.request.url, "Transport rejected download");
                commands.extend(effect_commands(
                    &self.button.change_state(ButtonState::Completed, now),
                ));
                commands.extend(self.message(format!("Download could not be started: {err}")));
            }
        }
        commands
    }

    fn frame(&mut self, now: Instant) -> Vec<ScreenCommand> {
        if !self.button.is_animating() {
            return Vec::new();
        }
        self.button.advance(now);
        vec![ScreenCommand::Redraw]
    }

    /// Handle a completion event from the transport.
    ///
    /// Events for other jobs are ignored. For the tracked job the outcome is
    /// classified, the notification posted, and a handback scheduled.
    pub fn complete(&mut self, event: CompletionEvent) -> Vec<ScreenCommand> {
        let Some(tracked) = self
            .tracked
            .take_if(|tracked| tracked.handle.job_id == event.job_id)
        else {
            debug!(job_id = %event.job_id, "Ignoring completion for untracked job");
            return Vec::new();
        };

        let outcome = CompletionClassifier::classify(self.transport.as_ref(), event);
        info!(job_id = %event.job_id, outcome = %outcome, "Download completed");

        let imagery = self.imagery(tracked.choice);
        let payload = self.dispatcher.dispatch(outcome, &tracked.file_name, imagery);
        self.last_outcome = Some(outcome);
        self.last_notification = Some(payload);

        self.handback_generation += 1;
        vec![ScreenCommand::ScheduleHandback {
            delay: self.grace_delay,
            generation: self.handback_generation,
        }]
    }

    fn imagery(&self, choice: ArtifactChoice) -> Imagery {
        match self.catalog.imagery(choice) {
            Some((big_picture, large_icon)) => Imagery {
                big_picture: big_picture.clone(),
                large_icon: large_icon.clone(),
            },
            None => {
                let fallback = self.dispatcher.settings().small_icon.clone();
                Imagery {
                    big_picture: fallback.clone(),
                    large_icon: fallback,
                }
            }
        }
    }

    /// Return the control to `Completed` once the grace delay has passed.
    ///
    /// Timers from an earlier completion are ignored.
    pub fn hand_back(&mut self, generation: u64, now: Instant) -> Vec<ScreenCommand> {
        if generation != self.handback_generation {
            debug!(generation, current = self.handback_generation, "Ignoring stale handback");
            return Vec::new();
        }
        let reset = self.button.change_state(ButtonState::Completed, now);
        debug!(generation, changed = reset.changed(), "Handed control back");
        effect_commands(&reset)
    }

    /// Open the detail view for a tapped deep link.
    ///
    /// Links that do not target the detail view are ignored.
    pub fn open_detail(&mut self, link: &str) -> Vec<ScreenCommand> {
        let link = match DetailLink::parse(link) {
            Ok(link) => link,
            Err(err) => {
                warn!(error = %err, "Ignoring notification tap");
                return Vec::new();
            }
        };
        self.detail = Some(DetailView::open(link.clone(), self.dispatcher.surface()));
        vec![ScreenCommand::OpenDetail(link)]
    }

    fn dismiss_detail(&mut self) -> Vec<ScreenCommand> {
        if let Some(mut detail) = self.detail.take() {
            detail.dismiss();
        }
        Vec::new()
    }

    fn resize(&mut self, width: u32, height: u32) -> Vec<ScreenCommand> {
        let before = self.button.size();
        let after = self
            .button
            .measure(MeasureSpec::exactly(width), MeasureSpec::exactly(height));
        if before == after {
            Vec::new()
        } else {
            vec![ScreenCommand::Redraw]
        }
    }

    fn message(&mut self, text: String) -> Vec<ScreenCommand> {
        self.last_message = Some(text.clone());
        vec![ScreenCommand::ShowMessage(text)]
    }

    /// Current observable state.
    pub fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot {
            button_state: self.button.state(),
            enabled: self.button.is_enabled(),
            label: self.button.label_text().to_string(),
            tick: self.button.tick(),
            selection: self.selection.as_ref().map(|selection| selection.choice),
            tracked_job: self.tracked.as_ref().map(|tracked| tracked.handle.job_id),
            last_outcome: self.last_outcome,
            last_notification: self.last_notification.clone(),
            detail: self.detail.clone(),
            last_message: self.last_message.clone(),
        }
    }
}

/// Commands for the host-facing effects of a transition.
fn effect_commands(transition: &Transition) -> Vec<ScreenCommand> {
    transition
        .effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::StartAnimation => Some(ScreenCommand::StartAnimation),
            Effect::StopAnimation => Some(ScreenCommand::StopAnimation),
            Effect::Invalidate => Some(ScreenCommand::Redraw),
            Effect::Relabel(_) | Effect::MeasureLabel => None,
        })
        .collect()
}
