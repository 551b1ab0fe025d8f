//! HTTP download transport.
//!
//! Each enqueued request becomes a background task that streams the
//! response body to a file. The status table plays the role of the
//! platform download manager's database: it is what `query_status` reads,
//! and a completion event is sent once a job reaches a terminal status.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, bail};
use dlbutton_core::{
    CompletionEvent, DownloadHandle, DownloadRequest, DownloadTransportPort, JobId, StatusCode,
    TransportError,
};
use futures_util::StreamExt;
use reqwest::{Client, Url};
use tokio::io::AsyncWriteExt;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

type StatusTable = Arc<Mutex<HashMap<JobId, StatusCode>>>;

/// Downloads over HTTP into a directory.
pub struct HttpTransport {
    client: Client,
    output_dir: PathBuf,
    runtime: Handle,
    next_id: AtomicI64,
    statuses: StatusTable,
    completions: mpsc::UnboundedSender<CompletionEvent>,
}

impl HttpTransport {
    /// Create a transport bound to the current tokio runtime.
    pub fn new(
        output_dir: PathBuf,
        completions: mpsc::UnboundedSender<CompletionEvent>,
    ) -> Result<Self, TransportError> {
        let runtime = Handle::try_current()
            .map_err(|err| TransportError::unavailable(format!("no async runtime: {err}")))?;
        let client = Client::builder()
            .user_agent(concat!("dlbutton/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| TransportError::unavailable(err.to_string()))?;

        Ok(Self {
            client,
            output_dir,
            runtime,
            next_id: AtomicI64::new(1),
            statuses: Arc::new(Mutex::new(HashMap::new())),
            completions,
        })
    }

    /// Where a job's file is written.
    pub fn destination(&self, job_id: JobId, url: &Url) -> PathBuf {
        let name = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|segment| !segment.is_empty())
            .unwrap_or("download");
        self.output_dir.join(format!("{job_id}-{name}"))
    }
}

fn set_status(statuses: &StatusTable, job_id: JobId, status: StatusCode) {
    match statuses.lock() {
        Ok(mut table) => {
            table.insert(job_id, status);
        }
        Err(poisoned) => {
            poisoned.into_inner().insert(job_id, status);
        }
    }
}

impl DownloadTransportPort for HttpTransport {
    fn enqueue(&self, request: &DownloadRequest) -> Result<DownloadHandle, TransportError> {
        let url = Url::parse(&request.url)
            .map_err(|err| TransportError::rejected(format!("invalid URL '{}': {err}", request.url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(TransportError::rejected(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }

        std::fs::create_dir_all(&self.output_dir)
            .map_err(|err| TransportError::from_io_error(&err))?;

        let job_id = JobId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let dest = self.destination(job_id, &url);
        set_status(&self.statuses, job_id, StatusCode::PENDING);
        debug!(
            job_id = %job_id,
            title = %request.title,
            metered = request.allow_metered_network(),
            roaming = request.allow_roaming(),
            charging = request.require_charging(),
            "Accepted download request"
        );

        let client = self.client.clone();
        let statuses = Arc::clone(&self.statuses);
        let completions = self.completions.clone();
        self.runtime.spawn(async move {
            set_status(&statuses, job_id, StatusCode::RUNNING);
            let status = match fetch_to_file(&client, url, &dest).await {
                Ok(bytes) => {
                    info!(job_id = %job_id, bytes, path = %dest.display(), "Download finished");
                    StatusCode::SUCCESSFUL
                }
                Err(err) => {
                    warn!(job_id = %job_id, error = %format!("{err:#}"), "Download failed");
                    discard_partial(&dest).await;
                    StatusCode::FAILED
                }
            };
            set_status(&statuses, job_id, status);
            if completions.send(CompletionEvent::new(job_id)).is_err() {
                debug!(job_id = %job_id, "Completion receiver gone");
            }
        });

        Ok(DownloadHandle::new(job_id))
    }

    fn query_status(&self, job_id: JobId) -> Result<Option<StatusCode>, TransportError> {
        let table = self
            .statuses
            .lock()
            .map_err(|_| TransportError::unavailable("status table poisoned"))?;
        Ok(table.get(&job_id).copied())
    }
}

/// Remove whatever a failed download left behind.
async fn discard_partial(dest: &Path) {
    match tokio::fs::remove_file(dest).await {
        Ok(()) => debug!(path = %dest.display(), "Removed partial download"),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => warn!(path = %dest.display(), error = %err, "Failed to remove partial download"),
    }
}

/// Stream a GET response into `dest`. Returns the number of bytes written.
async fn fetch_to_file(client: &Client, url: Url, dest: &Path) -> Result<u64> {
    let response = client
        .get(url)
        .send()
        .await
        .context("Failed to start download")?;

    if !response.status().is_success() {
        bail!("Download failed: HTTP {}", response.status());
    }

    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .context("Failed to create download directory")?;
    }
    let mut file = tokio::fs::File::create(dest)
        .await
        .context("Failed to create download file")?;

    let mut written: u64 = 0;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("Error reading download stream")?;
        file.write_all(&chunk)
            .await
            .context("Error writing to download file")?;
        written += chunk.len() as u64;
    }
    file.flush().await.context("Error flushing download file")?;

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlbutton_core::NetworkPolicy;

    fn request(url: &str) -> DownloadRequest {
        DownloadRequest {
            url: url.to_string(),
            title: "LoadApp".to_string(),
            description: "test".to_string(),
            policy: NetworkPolicy::permissive(),
        }
    }

    #[tokio::test]
    async fn test_rejects_bad_urls() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let transport = HttpTransport::new(PathBuf::from("/tmp"), tx).unwrap();

        assert!(matches!(
            transport.enqueue(&request("not a url")),
            Err(TransportError::Rejected { .. })
        ));
        assert!(matches!(
            transport.enqueue(&request("ftp://example.com/file")),
            Err(TransportError::Rejected { .. })
        ));
    }

    #[tokio::test]
    async fn test_unusable_output_dir_is_io_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let (tx, _rx) = mpsc::unbounded_channel();
        let transport = HttpTransport::new(file.path().join("nested"), tx).unwrap();

        let err = transport
            .enqueue(&request("https://example.com/file.zip"))
            .unwrap_err();
        assert!(matches!(err, TransportError::Io { .. }), "got {err:?}");
        assert_eq!(transport.query_status(JobId(1)).unwrap(), None);
    }

    #[tokio::test]
    async fn test_discard_partial_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("1-master.zip");
        std::fs::write(&dest, b"half").unwrap();

        discard_partial(&dest).await;
        assert!(!dest.exists());
        // Nothing to remove is fine.
        discard_partial(&dest).await;
    }

    #[tokio::test]
    async fn test_unknown_job_has_no_status() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let transport = HttpTransport::new(PathBuf::from("/tmp"), tx).unwrap();
        assert_eq!(transport.query_status(JobId(42)).unwrap(), None);
    }

    #[tokio::test]
    async fn test_destination_uses_last_segment() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let transport = HttpTransport::new(PathBuf::from("/out"), tx).unwrap();
        let url = Url::parse("https://github.com/square/retrofit/archive/master.zip").unwrap();
        assert_eq!(
            transport.destination(JobId(3), &url),
            PathBuf::from("/out/3-master.zip")
        );
        let bare = Url::parse("https://example.com/").unwrap();
        assert_eq!(
            transport.destination(JobId(4), &bare),
            PathBuf::from("/out/4-download")
        );
    }
}
