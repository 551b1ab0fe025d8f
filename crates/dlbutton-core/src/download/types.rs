//! Download request, handle and status vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque job identifier assigned by the transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub i64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returned by the transport at submission time.
///
/// The job id is the only correlation key for the later completion event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DownloadHandle {
    /// Transport-assigned job id.
    pub job_id: JobId,
}

impl DownloadHandle {
    /// Wrap a job id.
    #[must_use]
    pub const fn new(job_id: JobId) -> Self {
        Self { job_id }
    }
}

/// Network constraints attached to a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkPolicy {
    /// Download over metered connections.
    pub allow_metered: bool,
    /// Download while roaming.
    pub allow_roaming: bool,
    /// Only download while the device is charging.
    pub require_charging: bool,
}

impl NetworkPolicy {
    /// The fixed policy every request uses: charging not required, metered
    /// and roaming both allowed.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            allow_metered: true,
            allow_roaming: true,
            require_charging: false,
        }
    }
}

impl Default for NetworkPolicy {
    fn default() -> Self {
        Self::permissive()
    }
}

/// Descriptor handed to the transport. Immutable once submitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    /// Source URL.
    pub url: String,
    /// Title shown by the transport's own progress UI.
    pub title: String,
    /// Description shown by the transport's own progress UI.
    pub description: String,
    /// Network constraints.
    pub policy: NetworkPolicy,
}

impl DownloadRequest {
    /// Whether metered networks may be used.
    #[must_use]
    pub const fn allow_metered_network(&self) -> bool {
        self.policy.allow_metered
    }

    /// Whether roaming networks may be used.
    #[must_use]
    pub const fn allow_roaming(&self) -> bool {
        self.policy.allow_roaming
    }

    /// Whether the device must be charging.
    #[must_use]
    pub const fn require_charging(&self) -> bool {
        self.policy.require_charging
    }
}

/// Raw transport status code, as reported by a status query.
///
/// The constants follow the platform download manager's bit values. Any
/// other value may appear as the transport's vocabulary evolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode(pub i32);

impl StatusCode {
    /// Waiting to start.
    pub const PENDING: Self = Self(1);
    /// Transferring.
    pub const RUNNING: Self = Self(2);
    /// Waiting to retry or resume.
    pub const PAUSED: Self = Self(4);
    /// Finished successfully.
    pub const SUCCESSFUL: Self = Self(8);
    /// Finished without success.
    pub const FAILED: Self = Self(16);

    /// Name of a known code, `None` for anything else.
    #[must_use]
    pub const fn name(&self) -> Option<&'static str> {
        match self.0 {
            1 => Some("pending"),
            2 => Some("running"),
            4 => Some("paused"),
            8 => Some("successful"),
            16 => Some("failed"),
            _ => None,
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "unknown({})", self.0),
        }
    }
}

/// Out-of-band signal that a transport job finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEvent {
    /// Job that finished.
    pub job_id: JobId,
}

impl CompletionEvent {
    /// Create a completion event for a job.
    #[must_use]
    pub const fn new(job_id: JobId) -> Self {
        Self { job_id }
    }
}
