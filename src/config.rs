//! Checker configuration
//!
//! Everything the core needs from the environment, passed in explicitly.

use crate::cli::CliArgs;
use crate::registry::DEFAULT_API_URL;
use std::time::Duration;

/// Configuration consumed by [`crate::checker::Checker`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// GitHub REST API base URL
    pub api_url: String,
    /// Repository (owner/repo) holding the baseline; `None` disables the lookup
    pub repository: Option<String>,
    /// Optional bearer token
    pub token: Option<String>,
    /// Optional per-request timeout
    pub timeout: Option<Duration>,
    /// Whether to show progress spinners
    pub show_progress: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            repository: None,
            token: None,
            timeout: None,
            show_progress: false,
        }
    }
}

impl CheckerConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        Self {
            api_url: args.api_url.clone(),
            repository: args.repository().map(str::to_string),
            token: args.token.clone().filter(|t| !t.is_empty()),
            timeout: args.timeout,
            show_progress: !args.quiet,
        }
    }

    /// Set the API base URL
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set the baseline repository
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }
}
