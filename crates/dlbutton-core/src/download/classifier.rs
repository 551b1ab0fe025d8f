//! Maps transport completion events to outcomes.

use crate::domain::Outcome;
use crate::ports::DownloadTransportPort;

use super::types::{CompletionEvent, StatusCode};

/// Total mapping from a transport status to an [`Outcome`].
///
/// Every input yields exactly one outcome. Unknown codes, evicted jobs and
/// an unreachable transport all become [`Outcome::Undefined`]: the
/// transport's vocabulary may grow and the user must still get feedback.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompletionClassifier;

impl CompletionClassifier {
    /// Classify a raw status query result.
    ///
    /// `None` means the query returned no rows.
    #[must_use]
    pub const fn classify_status(status: Option<StatusCode>) -> Outcome {
        match status {
            Some(StatusCode::FAILED) => Outcome::Failed,
            Some(StatusCode::SUCCESSFUL) => Outcome::Success,
            _ => Outcome::Undefined,
        }
    }

    /// Query the transport for the event's job and classify the answer.
    pub fn classify(transport: &dyn DownloadTransportPort, event: CompletionEvent) -> Outcome {
        match transport.query_status(event.job_id) {
            Ok(status) => {
                if status.is_none() {
                    tracing::debug!(job_id = %event.job_id, "Transport has no record of job");
                }
                Self::classify_status(status)
            }
            Err(err) => {
                tracing::warn!(
                    job_id = %event.job_id,
                    error = %err,
                    "Transport status query failed; treating outcome as undefined"
                );
                Outcome::Undefined
            }
        }
    }
}
