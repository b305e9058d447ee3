//! Check workflow: fetch current → fetch baseline → decide
//!
//! Lookups run one after another. A failed lookup is logged and recorded as
//! an absent version; the run stops before touching the baseline if any tool
//! is missing.

use crate::config::CheckerConfig;
use crate::domain::{Decision, ReleaseBaseline, Tool, VersionSet};
use crate::error::FetchError;
use crate::progress::Progress;
use crate::registry::{create_source, BaselineFetcher, GitHubApi, HttpClient};

/// Coordinates the version check
pub struct Checker {
    api: GitHubApi,
    repository: Option<String>,
    show_progress: bool,
}

/// Result of a completed check
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Versions discovered upstream
    pub current: VersionSet,
    /// Baseline from the previous release, if any
    pub baseline: Option<ReleaseBaseline>,
    /// The packaging decision
    pub decision: Decision,
}

/// Outcome of running the checker
#[derive(Debug, Clone)]
pub enum CheckOutcome {
    /// All versions were found and a decision was made
    Ready(CheckReport),
    /// At least one upstream lookup failed; no decision was made
    Incomplete {
        /// Versions that were found
        current: VersionSet,
        /// Tools whose lookup failed
        missing: Vec<Tool>,
    },
}

impl CheckOutcome {
    /// Returns the report for a completed check
    pub fn report(&self) -> Option<&CheckReport> {
        match self {
            CheckOutcome::Ready(report) => Some(report),
            CheckOutcome::Incomplete { .. } => None,
        }
    }
}

impl Checker {
    /// Create a new checker from configuration
    pub fn new(config: &CheckerConfig) -> Result<Self, FetchError> {
        let client = HttpClient::with_config(config.timeout, config.token.as_deref())?;
        Ok(Self::with_client(config, client))
    }

    /// Create a checker with a custom HTTP client
    pub fn with_client(config: &CheckerConfig, client: HttpClient) -> Self {
        Self {
            api: GitHubApi::new(client, &config.api_url),
            repository: config.repository.clone(),
            show_progress: config.show_progress,
        }
    }

    /// Run the full check
    pub async fn run(&self) -> CheckOutcome {
        let current = self.fetch_current().await;

        let missing = current.missing();
        if !missing.is_empty() {
            return CheckOutcome::Incomplete { current, missing };
        }

        let baseline = self.fetch_baseline().await;
        let decision = Decision::decide(&current, baseline.as_ref());
        tracing::debug!(?decision, "decision made");

        CheckOutcome::Ready(CheckReport {
            current,
            baseline,
            decision,
        })
    }

    /// Look up the latest upstream version of every tool
    pub async fn fetch_current(&self) -> VersionSet {
        let mut progress = Progress::new(self.show_progress);
        let mut results = Vec::with_capacity(Tool::ALL.len());

        for tool in Tool::ALL {
            progress.spinner(&format!("Fetching {} release...", tool));
            let source = create_source(tool, self.api.clone());
            let version = match source.fetch_version().await {
                Ok(version) => {
                    tracing::info!(tool = tool.key(), %version, "found upstream version");
                    Some(version)
                }
                Err(e) => {
                    tracing::warn!(tool = tool.key(), error = %e, "failed to fetch version");
                    None
                }
            };
            results.push((tool, version));
        }
        progress.finish_and_clear();

        results.into_iter().collect()
    }

    /// Fetch the baseline from this repository's latest release
    pub async fn fetch_baseline(&self) -> Option<ReleaseBaseline> {
        let mut progress = Progress::new(self.show_progress);
        progress.spinner("Fetching previous release...");
        let fetcher = BaselineFetcher::new(self.api.clone(), self.repository.clone());
        let baseline = fetcher.fetch().await;
        progress.finish_and_clear();
        baseline
    }
}
