//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the dlbutton download screen.
#[derive(Parser)]
#[command(name = "dlbutton")]
#[command(about = "Download an artifact behind an animated loading button")]
#[command(version)]
pub struct Cli {
    /// Settings file (JSON)
    #[arg(long = "config", env = "DLBUTTON_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
