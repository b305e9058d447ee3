//! bundle-check - decide whether bundled tool updates warrant a new package
//!
//! Designed to run as a GitHub Actions step. Writes `should_package`,
//! `versions` and `detected_update` to `$GITHUB_OUTPUT`.
//!
//! Exit codes:
//! - 0: a decision was made (whether or not packaging is needed)
//! - 1: an upstream version could not be determined, or outputs could not be written

use bundle_check::checker::{CheckOutcome, Checker};
use bundle_check::cli::CliArgs;
use bundle_check::config::CheckerConfig;
use bundle_check::output::{create_formatter, GithubOutput, OutputFormat};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `RUST_LOG` environment variable (if set)
/// 2. `--verbose` sets level to DEBUG, `--quiet` to WARN
/// 3. Default is INFO
fn init_tracing(args: &CliArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_directive()));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(&args);

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let config = CheckerConfig::from_cli(&args);
    tracing::debug!(repository = ?config.repository, api_url = %config.api_url, "starting check");

    let checker = Checker::new(&config)?;
    let report = match checker.run().await {
        CheckOutcome::Ready(report) => report,
        CheckOutcome::Incomplete { missing, .. } => {
            let names: Vec<_> = missing.iter().map(|t| t.display_name()).collect();
            eprintln!(
                "Error: failed to determine current versions for: {}",
                names.join(", ")
            );
            return Ok(ExitCode::FAILURE);
        }
    };

    let formatter = create_formatter(OutputFormat::from_cli(args.json));
    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    match args.github_output() {
        Some(path) => GithubOutput::new(path).write(&report)?,
        None => tracing::debug!("GITHUB_OUTPUT not set, skipping output file"),
    }

    // Packaging is signalled through `should_package`, not the exit code.
    Ok(ExitCode::SUCCESS)
}
