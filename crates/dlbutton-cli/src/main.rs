//! CLI entry point.
//!
//! Settings are resolved once through bootstrap; every subcommand handler
//! receives the resulting context.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use dlbutton_cli::handlers::{self, download::DownloadOptions};
use dlbutton_cli::{Cli, CliConfig, CliError, Commands, bootstrap};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(CliConfig::new(cli.config))?;

    match command {
        Commands::Download {
            artifact,
            output_dir,
            width,
            open_detail,
        } => {
            let options = DownloadOptions {
                artifact,
                output_dir,
                width,
                open_detail,
            };
            handlers::download::execute(&ctx, options).await
        }
        Commands::Artifacts => handlers::artifacts::execute(&ctx).await,
        Commands::Config => handlers::config::execute(&ctx).await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
