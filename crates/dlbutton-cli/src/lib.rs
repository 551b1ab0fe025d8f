//! Terminal front end for the dlbutton download screen.
//!
//! The binary wires the screen to terminal adapters:
//!
//! - `adapters` - HTTP transport, character-cell canvas, terminal output ports
//! - `bootstrap` - settings resolution into a [`CliContext`]
//! - `handlers` - one module per subcommand
//! - `parser` / `commands` - clap definitions
//! - `error` - [`CliError`] and its exit codes

#![deny(unused_crate_dependencies)]

// Used only by main.rs
use dotenvy as _;
use tracing_subscriber as _;

pub mod adapters;
pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
