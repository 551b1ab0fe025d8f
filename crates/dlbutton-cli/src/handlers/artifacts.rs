//! Artifacts command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// List the configured artifacts in selector order.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let catalog = &ctx.settings.artifacts;
    if catalog.is_empty() {
        println!("No artifacts configured.");
        return Ok(());
    }

    println!("{:<10} {}", "ID", "Name");
    for spec in catalog.iter() {
        println!("{:<10} {}", spec.choice, spec.file_name);
        println!("{:<10} {}", "", spec.url);
    }
    Ok(())
}
