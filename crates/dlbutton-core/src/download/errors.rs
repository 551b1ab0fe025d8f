//! Download error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The only validation gate in the download flow.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// Submit was pressed with nothing selected.
    #[error("no artifact selected")]
    NoSelection,
}

impl ValidationError {
    /// Message shown to the user as a transient, dismissible notice.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::NoSelection => "Please select the file to download",
        }
    }
}

/// Error reported by the download transport.
///
/// Designed to be serializable across adapter boundaries, so underlying
/// errors are captured as strings.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportError {
    /// The transport refused the request.
    #[error("request rejected: {message}")]
    Rejected {
        /// Why it was refused.
        message: String,
    },

    /// The transport could not be reached or queried.
    #[error("transport unavailable: {message}")]
    Unavailable {
        /// Detailed error message.
        message: String,
    },

    /// Local file operation failed.
    #[error("I/O error ({kind}): {message}")]
    Io {
        /// The kind of I/O error.
        kind: String,
        /// Detailed error message.
        message: String,
    },
}

impl TransportError {
    /// Create a rejection error.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Create an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create an I/O error from a `std::io::Error`.
    #[must_use]
    pub fn from_io_error(err: &std::io::Error) -> Self {
        let kind = err.kind();
        Self::Io {
            kind: format!("{kind:?}"),
            message: err.to_string(),
        }
    }
}
