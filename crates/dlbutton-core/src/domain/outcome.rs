//! Classified result of a finished download.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tri-state classification of a completed download.
///
/// `Undefined` is a normal value, not an error: it covers every transport
/// status the classifier does not recognize, including a job the transport
/// no longer knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The transport reported the job as successful.
    Success,
    /// The transport reported the job as failed.
    Failed,
    /// Anything else.
    Undefined,
}

impl Outcome {
    /// Text shown to the user in the notification and detail view.
    #[must_use]
    pub const fn display_text(&self) -> &'static str {
        match self {
            Self::Success => "Successful",
            Self::Failed => "Failed",
            Self::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text() {
        assert_eq!(Outcome::Success.to_string(), "Successful");
        assert_eq!(Outcome::Failed.to_string(), "Failed");
        assert_eq!(Outcome::Undefined.to_string(), "Undefined");
    }
}
