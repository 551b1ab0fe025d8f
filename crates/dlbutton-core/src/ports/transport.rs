//! Background download transport port.

use crate::download::{DownloadHandle, DownloadRequest, JobId, StatusCode, TransportError};

/// Port for the out-of-process download service.
///
/// Submission returns immediately. Each accepted job later produces exactly
/// one [`CompletionEvent`](crate::download::CompletionEvent), delivered out
/// of band on whatever channel the adapter was constructed with.
///
/// There is no cancellation and no timeout: a job that never completes
/// leaves the caller waiting indefinitely.
#[cfg_attr(test, mockall::automock)]
pub trait DownloadTransportPort: Send + Sync {
    /// Hand a request to the transport.
    fn enqueue(&self, request: &DownloadRequest) -> Result<DownloadHandle, TransportError>;

    /// Look up the current status of a job.
    ///
    /// `Ok(None)` means the transport has no record of the job (for example
    /// because it has already been evicted).
    fn query_status(&self, job_id: JobId) -> Result<Option<StatusCode>, TransportError>;
}
