//! Single-task event loop for the download screen.
//!
//! All screen state lives on one task. User input, frame ticks, handback
//! timers and transport completions are funnelled into it through channels
//! and handled one at a time, so nothing needs a lock.
//!
//! ```text
//! ScreenHandle ──events──┐
//! AnimationTicker ───────┤
//! handback timer ────────┼──> ScreenRuntime::run ──> DownloadScreen::handle
//! transport completions ─┘              │
//!                                       └──> FrameSink / UserMessagePort / watch<ScreenSnapshot>
//! ```

use std::sync::Arc;
use std::time::Duration;

use dlbutton_control::LoadingButton;
use dlbutton_core::{ArtifactChoice, CompletionEvent, UserMessagePort};
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::detail::DetailView;
use crate::events::{ScreenCommand, ScreenEvent, ScreenSnapshot};
use crate::screen::DownloadScreen;
use crate::ticker::AnimationTicker;

/// Errors talking to a running screen.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScreenError {
    /// The event loop has exited.
    #[error("screen event loop has stopped")]
    Closed,
}

/// Host surface that displays frames.
pub trait FrameSink: Send {
    /// Draw the control's current frame.
    fn present(&mut self, button: &LoadingButton);

    /// Show the detail view.
    fn present_detail(&mut self, _detail: &DetailView) {}
}

/// Sends events to a running screen and observes its state.
#[derive(Clone)]
pub struct ScreenHandle {
    events: mpsc::UnboundedSender<ScreenEvent>,
    snapshot: watch::Receiver<ScreenSnapshot>,
}

impl ScreenHandle {
    pub fn send(&self, event: ScreenEvent) -> Result<(), ScreenError> {
        self.events.send(event).map_err(|_| ScreenError::Closed)
    }

    pub fn select(&self, choice: Option<ArtifactChoice>) -> Result<(), ScreenError> {
        self.send(ScreenEvent::Select(choice))
    }

    pub fn click(&self) -> Result<(), ScreenError> {
        self.send(ScreenEvent::Click)
    }

    /// Deliver a notification tap carrying its deep link.
    pub fn tap_notification(&self, link: impl Into<String>) -> Result<(), ScreenError> {
        self.send(ScreenEvent::NotificationTapped(link.into()))
    }

    pub fn dismiss_detail(&self) -> Result<(), ScreenError> {
        self.send(ScreenEvent::DismissDetail)
    }

    pub fn resize(&self, width: u32, height: u32) -> Result<(), ScreenError> {
        self.send(ScreenEvent::Resize { width, height })
    }

    pub fn shutdown(&self) -> Result<(), ScreenError> {
        self.send(ScreenEvent::Shutdown)
    }

    /// Latest published state.
    pub fn snapshot(&self) -> ScreenSnapshot {
        self.snapshot.borrow().clone()
    }

    /// Wait until the published state satisfies `predicate`.
    pub async fn wait_for(
        &self,
        predicate: impl FnMut(&ScreenSnapshot) -> bool,
    ) -> Result<ScreenSnapshot, ScreenError> {
        let mut snapshot = self.snapshot.clone();
        let state = snapshot
            .wait_for(predicate)
            .await
            .map_err(|_| ScreenError::Closed)?;
        Ok(state.clone())
    }
}

/// Owns a [`DownloadScreen`] and applies its commands.
pub struct ScreenRuntime {
    screen: DownloadScreen,
    events_tx: mpsc::UnboundedSender<ScreenEvent>,
    events_rx: mpsc::UnboundedReceiver<ScreenEvent>,
    completions: mpsc::UnboundedReceiver<CompletionEvent>,
    messages: Arc<dyn UserMessagePort>,
    sink: Box<dyn FrameSink>,
    frame_interval: Duration,
    ticker: Option<AnimationTicker>,
    handback: Option<JoinHandle<()>>,
    snapshot: watch::Sender<ScreenSnapshot>,
}

impl ScreenRuntime {
    /// Wire a screen to its completion channel and output surfaces.
    pub fn new(
        screen: DownloadScreen,
        completions: mpsc::UnboundedReceiver<CompletionEvent>,
        messages: Arc<dyn UserMessagePort>,
        sink: Box<dyn FrameSink>,
        frame_interval: Duration,
    ) -> (Self, ScreenHandle) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (snapshot, snapshot_rx) = watch::channel(screen.snapshot());

        let handle = ScreenHandle {
            events: events_tx.clone(),
            snapshot: snapshot_rx,
        };
        let runtime = Self {
            screen,
            events_tx,
            events_rx,
            completions,
            messages,
            sink,
            frame_interval,
            ticker: None,
            handback: None,
            snapshot,
        };
        (runtime, handle)
    }

    /// Run until [`ScreenEvent::Shutdown`]. Returns the final state.
    pub async fn run(mut self) -> ScreenSnapshot {
        self.screen.initialize();
        self.sink.present(self.screen.button());
        self.publish();

        let mut completions_open = true;
        loop {
            let event = tokio::select! {
                biased;
                Some(event) = self.events_rx.recv() => event,
                completion = self.completions.recv(), if completions_open => match completion {
                    Some(completion) => ScreenEvent::DownloadCompleted(completion),
                    None => {
                        debug!("Completion channel closed");
                        completions_open = false;
                        continue;
                    }
                },
                else => break,
            };

            if event == ScreenEvent::Shutdown {
                info!("Screen shutting down");
                break;
            }

            let commands = self.screen.handle(event, Instant::now());
            let mut redraw = false;
            for command in commands {
                self.apply(command, &mut redraw);
            }
            if redraw {
                self.sink.present(self.screen.button());
            }
            self.publish();
        }

        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
        if let Some(handback) = self.handback.take() {
            handback.abort();
        }
        self.screen.snapshot()
    }

    fn apply(&mut self, command: ScreenCommand, redraw: &mut bool) {
        match command {
            ScreenCommand::StartAnimation => {
                if self.ticker.as_ref().is_none_or(AnimationTicker::is_finished) {
                    self.ticker = Some(AnimationTicker::start(
                        self.frame_interval,
                        self.events_tx.clone(),
                    ));
                }
            }
            ScreenCommand::StopAnimation => {
                if let Some(ticker) = self.ticker.take() {
                    ticker.stop();
                }
            }
            ScreenCommand::Redraw => *redraw = true,
            ScreenCommand::ShowMessage(text) => self.messages.show_message(&text),
            ScreenCommand::ScheduleHandback { delay, generation } => {
                if let Some(previous) = self.handback.take() {
                    previous.abort();
                }
                let deadline = Instant::now() + delay;
                let events = self.events_tx.clone();
                self.handback = Some(tokio::spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    let _ = events.send(ScreenEvent::HandbackElapsed { generation });
                }));
                debug!(generation, ?delay, "Scheduled handback");
            }
            ScreenCommand::OpenDetail(link) => {
                info!(link = %link.to_link(), "Opening detail view");
                if let Some(detail) = self.screen.detail() {
                    self.sink.present_detail(detail);
                }
            }
        }
    }

    fn publish(&self) {
        self.snapshot.send_replace(self.screen.snapshot());
    }
}
