//! CLI bootstrap - the composition root.
//!
//! Settings are resolved here once; command handlers receive the composed
//! [`CliContext`] and build the screen and its terminal adapters from it.

use std::path::{Path, PathBuf};

use dlbutton_core::{Settings, validate_settings};
use tracing::debug;

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Settings file given on the command line or via `DLBUTTON_CONFIG`.
    pub settings_path: Option<PathBuf>,
}

impl CliConfig {
    pub const fn new(settings_path: Option<PathBuf>) -> Self {
        Self { settings_path }
    }
}

/// Composed context for command handlers.
#[derive(Debug, Clone)]
pub struct CliContext {
    pub settings: Settings,
    /// File the settings came from, if any.
    pub settings_source: Option<PathBuf>,
}

/// Default settings file: `<config dir>/dlbutton/settings.json`.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dlbutton").join("settings.json"))
}

/// Read and validate a settings file.
pub fn load_settings(path: &Path) -> Result<Settings, CliError> {
    let json = std::fs::read_to_string(path)
        .map_err(|err| CliError::Io(format!("{}: {err}", path.display())))?;
    let settings = Settings::from_json_str(&json)?;
    validate_settings(&settings)?;
    Ok(settings)
}

/// Bootstrap the CLI context.
///
/// An explicit settings path must exist. Without one, the default path is
/// used when present and built-in defaults otherwise.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    if let Some(path) = config.settings_path {
        let settings = load_settings(&path)?;
        debug!(path = %path.display(), "Loaded settings");
        return Ok(CliContext {
            settings,
            settings_source: Some(path),
        });
    }

    if let Some(path) = default_settings_path().filter(|path| path.is_file()) {
        let settings = load_settings(&path)?;
        debug!(path = %path.display(), "Loaded default settings file");
        return Ok(CliContext {
            settings,
            settings_source: Some(path),
        });
    }

    Ok(CliContext {
        settings: Settings::default(),
        settings_source: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"button": {{"default_label": "Fetch"}}}}"#).unwrap();

        let ctx = bootstrap(CliConfig::new(Some(file.path().to_path_buf()))).unwrap();
        assert_eq!(ctx.settings.button.default_label, "Fetch");
        assert_eq!(ctx.settings.button.loading_label, "We are loading");
        assert_eq!(ctx.settings_source.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = bootstrap(CliConfig::new(Some(dir.path().join("absent.json")))).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_invalid_settings_are_config_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"animation": {{"frame_interval_ms": 0}}}}"#).unwrap();
        let err = load_settings(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 78);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(load_settings(file.path()), Err(CliError::Config(_))));
    }
}
