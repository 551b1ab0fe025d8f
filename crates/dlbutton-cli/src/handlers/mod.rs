//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Parse and validate CLI-specific input
//! - Wire the screen to terminal adapters, or print settings data

pub mod artifacts;
pub mod config;
pub mod download;
