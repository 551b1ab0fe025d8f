//! Spawns a screen runtime wired to recording fakes.

use std::sync::Arc;

use dlbutton_app::{DownloadScreen, ScreenHandle, ScreenRuntime, ScreenSnapshot};
use dlbutton_core::{CompletionEvent, JobId, Settings};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::fakes::{
    MonospaceMeasurer, RecordingMessages, RecordingSink, RecordingSurface, RecordingTransport,
};

pub struct Harness {
    pub handle: ScreenHandle,
    pub transport: Arc<RecordingTransport>,
    pub surface: Arc<RecordingSurface>,
    pub messages: Arc<RecordingMessages>,
    pub sink: RecordingSink,
    pub settings: Settings,
    completions: mpsc::UnboundedSender<CompletionEvent>,
    task: JoinHandle<ScreenSnapshot>,
}

impl Harness {
    /// Spawn a screen with default settings and a 300x60 control.
    pub fn spawn() -> Self {
        Self::spawn_with(Settings::default())
    }

    pub fn spawn_with(settings: Settings) -> Self {
        let transport = Arc::new(RecordingTransport::default());
        let surface = Arc::new(RecordingSurface::default());
        let messages = Arc::new(RecordingMessages::default());
        let sink = RecordingSink::default();

        let screen = DownloadScreen::new(
            &settings,
            Arc::new(MonospaceMeasurer),
            transport.clone(),
            surface.clone(),
        )
        .expect("default settings are valid");

        let (completions, completions_rx) = mpsc::unbounded_channel();
        let (runtime, handle) = ScreenRuntime::new(
            screen,
            completions_rx,
            messages.clone(),
            Box::new(sink.clone()),
            settings.animation.frame_interval(),
        );
        let task = tokio::spawn(runtime.run());
        handle.resize(300, 60).unwrap();

        Self {
            handle,
            transport,
            surface,
            messages,
            sink,
            settings,
            completions,
            task,
        }
    }

    /// Deliver a completion event as the transport would.
    pub fn complete(&self, job_id: JobId) {
        self.completions
            .send(CompletionEvent::new(job_id))
            .expect("runtime is running");
    }

    /// Select, click, and wait until the download is tracked.
    pub async fn start_download(&self, choice: dlbutton_core::ArtifactChoice) -> JobId {
        self.handle.select(Some(choice)).unwrap();
        self.handle.click().unwrap();
        let snapshot = self
            .handle
            .wait_for(|s| s.tracked_job.is_some())
            .await
            .unwrap();
        snapshot.tracked_job.unwrap()
    }

    /// Stop the runtime and return its final state.
    pub async fn shutdown(self) -> ScreenSnapshot {
        self.handle.shutdown().unwrap();
        self.task.await.unwrap()
    }
}
