//! CLI argument parsing module for bundle-check
//!
//! Environment variables provided by GitHub Actions are read here and
//! nowhere else; the core receives them through `CheckerConfig`.

use crate::registry::DEFAULT_API_URL;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Parse a timeout given in whole seconds, optionally suffixed with `s`
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let num_str = s.strip_suffix('s').unwrap_or(s);
    let secs: u64 = num_str
        .parse()
        .map_err(|_| format!("invalid timeout: {}", s))?;
    if secs == 0 {
        return Err("timeout must be greater than zero".to_string());
    }
    Ok(Duration::from_secs(secs))
}

/// Decide whether bundled tool updates warrant a new package
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bundle-check",
    version,
    about = "Check yt-dlp, FFmpeg and Deno for updates since the last release"
)]
pub struct CliArgs {
    /// Repository (owner/repo) whose latest release holds the baseline
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// File that receives key=value outputs
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub github_output: Option<PathBuf>,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Token sent as a bearer credential on API requests
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds (default: none)
    #[arg(long, value_parser = parse_timeout)]
    pub timeout: Option<Duration>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and hide progress
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Repository identity, ignoring an empty value
    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref().filter(|r| !r.trim().is_empty())
    }

    /// Log filter used when `RUST_LOG` is unset
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "bundle_check=debug"
        } else if self.quiet {
            "bundle_check=warn"
        } else {
            "bundle_check=info"
        }
    }

    /// Output file path, ignoring an empty value
    pub fn github_output(&self) -> Option<&PathBuf> {
        self.github_output
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}
