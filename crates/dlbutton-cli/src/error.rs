//! CLI-specific error types and exit codes.

use dlbutton_app::ScreenError;
use dlbutton_core::{SettingsError, TransportError, UnknownArtifact};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The download could not be started.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The screen event loop stopped unexpectedly.
    #[error("Screen error: {0}")]
    Screen(String),
}

impl CliError {
    /// Map error to an exit code (see sysexits.h).
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,  // EX_USAGE
            Self::Io(_) => 74,        // EX_IOERR
            Self::Config(_) => 78,    // EX_CONFIG
            Self::Transport(_) => 69, // EX_UNAVAILABLE
            Self::Screen(_) => 70,    // EX_SOFTWARE
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<UnknownArtifact> for CliError {
    fn from(err: UnknownArtifact) -> Self {
        Self::Arguments(err.to_string())
    }
}

impl From<TransportError> for CliError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<ScreenError> for CliError {
    fn from(err: ScreenError) -> Self {
        Self::Screen(err.to_string())
    }
}
