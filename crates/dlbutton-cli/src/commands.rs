//! Available subcommands.

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Download an artifact, animating the button until it finishes
    Download {
        /// Artifact to download (glide, load_app, retrofit)
        artifact: String,
        /// Directory the file is written to (defaults to the user's download directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Button width in terminal columns
        #[arg(short, long, default_value_t = 40, value_parser = clap::value_parser!(u32).range(1..=1000))]
        width: u32,
        /// Tap the notification when the download finishes and show the detail view
        #[arg(long)]
        open_detail: bool,
    },

    /// List the artifacts that can be downloaded
    Artifacts,

    /// Print the effective settings as JSON
    Config,
}
