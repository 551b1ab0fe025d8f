//! Config command handler.

use anyhow::Result;

use crate::bootstrap::{CliContext, default_settings_path};
use crate::error::CliError;

/// Print the effective settings and where they came from.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    match (&ctx.settings_source, default_settings_path()) {
        (Some(path), _) => println!("# Loaded from {}", path.display()),
        (None, Some(default)) => println!(
            "# Built-in defaults (no file at {})",
            default.display()
        ),
        (None, None) => println!("# Built-in defaults"),
    }

    let json = ctx.settings.to_json_pretty().map_err(CliError::from)?;
    println!("{json}");
    Ok(())
}
