//! Recording implementations of the screen's ports.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use dlbutton_app::{DetailView, FrameSink};
use dlbutton_control::{FontMetrics, LoadingButton, TextBounds, TextMeasurer};
use dlbutton_core::{
    ButtonState, DownloadHandle, DownloadRequest, DownloadTransportPort, JobId,
    NotificationChannel, NotificationError, NotificationId, NotificationPayload,
    NotificationSurfacePort, StatusCode, TransportError, UserMessagePort,
};

/// Transport that hands out sequential job ids and answers status queries
/// from a table the test fills in.
pub struct RecordingTransport {
    next_id: AtomicI64,
    requests: Mutex<Vec<DownloadRequest>>,
    statuses: Mutex<HashMap<JobId, StatusCode>>,
    unavailable: AtomicBool,
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            requests: Mutex::new(Vec::new()),
            statuses: Mutex::new(HashMap::new()),
            unavailable: AtomicBool::new(false),
        }
    }
}

impl RecordingTransport {
    /// Record the final status of a job.
    pub fn finish(&self, job_id: JobId, status: StatusCode) {
        self.statuses.lock().unwrap().insert(job_id, status);
    }

    /// Forget a job, as if the transport evicted its record.
    pub fn evict(&self, job_id: JobId) {
        self.statuses.lock().unwrap().remove(&job_id);
    }

    /// Make every status query fail.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<DownloadRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl DownloadTransportPort for RecordingTransport {
    fn enqueue(&self, request: &DownloadRequest) -> Result<DownloadHandle, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let job_id = JobId(id);
        self.statuses
            .lock()
            .unwrap()
            .insert(job_id, StatusCode::PENDING);
        Ok(DownloadHandle::new(job_id))
    }

    fn query_status(&self, job_id: JobId) -> Result<Option<StatusCode>, TransportError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(TransportError::unavailable("download service stopped"));
        }
        Ok(self.statuses.lock().unwrap().get(&job_id).copied())
    }
}

/// Notification shade that keeps one entry per id, like the real one.
#[derive(Default)]
pub struct RecordingSurface {
    channels: Mutex<Vec<NotificationChannel>>,
    shown: Mutex<HashMap<NotificationId, NotificationPayload>>,
    posts: AtomicUsize,
    clears: AtomicUsize,
}

impl RecordingSurface {
    pub fn channels(&self) -> Vec<NotificationChannel> {
        self.channels.lock().unwrap().clone()
    }

    pub fn shown(&self) -> Vec<NotificationPayload> {
        self.shown.lock().unwrap().values().cloned().collect()
    }

    pub fn posts(&self) -> usize {
        self.posts.load(Ordering::SeqCst)
    }

    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl NotificationSurfacePort for RecordingSurface {
    fn register_channel(&self, channel: &NotificationChannel) -> Result<(), NotificationError> {
        self.channels.lock().unwrap().push(channel.clone());
        Ok(())
    }

    fn post(&self, id: NotificationId, payload: &NotificationPayload) -> Result<(), NotificationError> {
        self.posts.fetch_add(1, Ordering::SeqCst);
        self.shown.lock().unwrap().insert(id, payload.clone());
        Ok(())
    }

    fn clear_all(&self) -> Result<(), NotificationError> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        self.shown.lock().unwrap().clear();
        Ok(())
    }
}

/// Collects transient messages.
#[derive(Default)]
pub struct RecordingMessages {
    messages: Mutex<Vec<String>>,
}

impl RecordingMessages {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl UserMessagePort for RecordingMessages {
    fn show_message(&self, text: &str) {
        self.messages.lock().unwrap().push(text.to_string());
    }
}

/// Fixed-advance measurer: every glyph is 10 wide.
pub struct MonospaceMeasurer;

impl TextMeasurer for MonospaceMeasurer {
    fn font_metrics(&self, _text_size: f32) -> FontMetrics {
        FontMetrics {
            ascent: -16.0,
            descent: 4.0,
        }
    }

    fn text_bounds(&self, text: &str, _text_size: f32) -> TextBounds {
        TextBounds {
            left: 0.0,
            top: -14.0,
            right: 10.0 * text.chars().count() as f32,
            bottom: 3.0,
        }
    }
}

/// What one presented frame looked like.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub state: ButtonState,
    pub label: String,
    pub fill_offset: f32,
    pub enabled: bool,
}

/// Frame sink sharing its recordings with the test.
#[derive(Clone, Default)]
pub struct RecordingSink {
    frames: Arc<Mutex<Vec<Frame>>>,
    details: Arc<Mutex<Vec<Vec<String>>>>,
}

impl RecordingSink {
    pub fn frames(&self) -> Vec<Frame> {
        self.frames.lock().unwrap().clone()
    }

    pub fn details(&self) -> Vec<Vec<String>> {
        self.details.lock().unwrap().clone()
    }
}

impl FrameSink for RecordingSink {
    fn present(&mut self, button: &LoadingButton) {
        self.frames.lock().unwrap().push(Frame {
            state: button.state(),
            label: button.label_text().to_string(),
            fill_offset: button.tick().fill_offset,
            enabled: button.is_enabled(),
        });
    }

    fn present_detail(&mut self, detail: &DetailView) {
        self.details.lock().unwrap().push(detail.lines());
    }
}
