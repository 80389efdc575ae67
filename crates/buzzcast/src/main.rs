//! buzzcast CLI binary.
//!
//! Fetches trending news, scores it, writes a post and publishes it.
//! Every command prints JSON on stdout and logs on stderr.

use buzzcast::{BuzzcastConfig, BuzzcastResult, RunStatus};
use clap::Parser;
use std::process::ExitCode;

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    #[cfg(feature = "observability")]
    let provider = {
        let config = buzzcast::observability::ObservabilityConfig::default()
            .with_verbose(cli.verbose)
            .with_json_logs(cli.json_logs);
        match buzzcast::observability::init_observability(&config) {
            Ok(provider) => Some(provider),
            Err(e) => {
                eprintln!("Failed to initialize observability: {e}");
                None
            }
        }
    };

    #[cfg(not(feature = "observability"))]
    if let Err(e) = buzzcast::init_logging(cli.verbose, cli.json_logs) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let status = match execute(cli).await {
        Ok(status) => status,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            let failure = serde_json::json!({ "success": false, "error": e.to_string() });
            println!("{failure}");
            RunStatus::from_error(&e)
        }
    };

    #[cfg(feature = "observability")]
    if let Some(provider) = provider {
        buzzcast::observability::shutdown_observability(provider);
    }

    status.into()
}

async fn execute(cli: Cli) -> BuzzcastResult<RunStatus> {
    let config = BuzzcastConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            dry_run,
            platforms,
            no_backup,
        } => cli::run_pipeline(config, dry_run, platforms, no_backup).await,
        Commands::Score { limit } => cli::score_candidates(config, limit).await,
        Commands::Generate => cli::generate_post(config).await,
        Commands::Check { platforms } => cli::check_credentials(config, platforms).await,
        Commands::Validate { text, platforms } => cli::validate_text(config, &text, platforms),
    }
}
