//! Frame ticker driving the loading animation.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::events::ScreenEvent;

/// Sends [`ScreenEvent::FrameTick`] at a fixed interval until stopped.
///
/// Dropping the ticker stops it, so a control that leaves `Loading` never
/// receives callbacks from a forgotten loop.
pub struct AnimationTicker {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl AnimationTicker {
    /// Spawn the ticker on the current runtime.
    pub fn start(interval: Duration, events: mpsc::UnboundedSender<ScreenEvent>) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    _ = ticker.tick() => {
                        if events.send(ScreenEvent::FrameTick).is_err() {
                            break;
                        }
                    }
                }
            }
            debug!("Animation ticker stopped");
        });

        debug!(?interval, "Animation ticker started");
        Self { cancel, task }
    }

    /// Stop ticking.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Whether the tick loop has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for AnimationTicker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
