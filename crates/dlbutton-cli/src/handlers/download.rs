//! Download command handler.
//!
//! Drives one full cycle of the download screen in the terminal: select
//! the artifact, click the button, animate until the transport reports
//! completion, and wait out the grace delay before the button is handed
//! back.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use dlbutton_app::{DownloadScreen, ScreenRuntime, ScreenSnapshot};
use dlbutton_core::{ArtifactChoice, ButtonState, Outcome};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::adapters::{
    CELL_CIRCLE_MARGIN, CellMeasurer, HttpTransport, TerminalFrameSink, TerminalMessages,
    TerminalNotifications,
};
use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Options for the download command.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    pub artifact: String,
    pub output_dir: Option<PathBuf>,
    pub width: u32,
    pub open_detail: bool,
}

/// Directory downloads are written to when none is given.
pub fn default_output_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Execute the download command.
///
/// Succeeds only when the download is classified as successful; a failed
/// or undefined outcome is reported as a transport error.
pub async fn execute(ctx: &CliContext, options: DownloadOptions) -> Result<()> {
    let choice: ArtifactChoice = options.artifact.parse().map_err(CliError::from)?;
    if ctx.settings.artifacts.get(choice).is_none() {
        return Err(CliError::Arguments(format!("artifact '{choice}' is not configured")).into());
    }

    let output_dir = options.output_dir.unwrap_or_else(default_output_dir);
    tokio::fs::create_dir_all(&output_dir)
        .await
        .map_err(|err| CliError::Io(format!("{}: {err}", output_dir.display())))?;

    let mut settings = ctx.settings.clone();
    settings.button.circle_margin_left = CELL_CIRCLE_MARGIN;

    let (completions_tx, completions_rx) = mpsc::unbounded_channel();
    let transport =
        Arc::new(HttpTransport::new(output_dir.clone(), completions_tx).map_err(CliError::from)?);
    let surface = Arc::new(TerminalNotifications::new());
    let screen = DownloadScreen::new(&settings, Arc::new(CellMeasurer), transport, surface)
        .map_err(CliError::from)?;

    let (runtime, handle) = ScreenRuntime::new(
        screen,
        completions_rx,
        Arc::new(TerminalMessages),
        Box::new(TerminalFrameSink::stdout()),
        settings.animation.frame_interval(),
    );
    let task = tokio::spawn(runtime.run());

    let columns = crossterm::terminal::size().ok().map(|(columns, _)| columns);
    let width = fit_width(options.width, columns);
    if width != options.width {
        debug!(requested = options.width, width, "Limited button width to the terminal");
    }
    handle.resize(width, 1).map_err(CliError::from)?;
    handle.select(Some(choice)).map_err(CliError::from)?;
    handle.click().map_err(CliError::from)?;

    let started = handle
        .wait_for(|s| {
            s.tracked_job.is_some() || s.last_outcome.is_some() || s.last_message.is_some()
        })
        .await
        .map_err(CliError::from)?;
    let accepted = started.tracked_job.is_some() || started.last_outcome.is_some();
    if let Some(message) = started.last_message.filter(|_| !accepted) {
        handle.shutdown().map_err(CliError::from)?;
        finish(task).await?;
        return Err(CliError::Transport(message).into());
    }
    info!(
        artifact = %choice,
        job_id = ?started.tracked_job,
        output_dir = %output_dir.display(),
        "Download started"
    );

    let finished = handle
        .wait_for(|s| s.last_outcome.is_some() && s.button_state == ButtonState::Completed)
        .await
        .map_err(CliError::from)?;

    if options.open_detail {
        if let Some(payload) = &finished.last_notification {
            handle
                .tap_notification(payload.tap_action.to_link())
                .map_err(CliError::from)?;
            handle
                .wait_for(|s| s.detail.as_ref().is_some_and(|d| d.is_open()))
                .await
                .map_err(CliError::from)?;
            handle.dismiss_detail().map_err(CliError::from)?;
        }
    }

    handle.shutdown().map_err(CliError::from)?;
    let last = finish(task).await?;
    println!();

    match last.last_outcome {
        Some(Outcome::Success) => {
            println!("Saved to {}", output_dir.display());
            Ok(())
        }
        Some(outcome) => {
            Err(CliError::Transport(format!("download finished with status {outcome}")).into())
        }
        None => Err(CliError::Screen("download did not finish".to_string()).into()),
    }
}

/// Button width in cells: at least one, and no wider than the terminal.
fn fit_width(requested: u32, columns: Option<u16>) -> u32 {
    let width = requested.max(1);
    match columns {
        Some(columns) if columns > 0 => width.min(u32::from(columns)),
        _ => width,
    }
}

async fn finish(task: tokio::task::JoinHandle<ScreenSnapshot>) -> Result<ScreenSnapshot, CliError> {
    let snapshot = task
        .await
        .map_err(|err| CliError::Screen(err.to_string()))?;
    debug!(state = %snapshot.button_state, "Screen stopped");
    Ok(snapshot)
}
