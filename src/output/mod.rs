//! Output for check results
//!
//! This module provides:
//! - The GitHub Actions output file writer (`key=value` lines)
//! - Text summary for human-readable display
//! - JSON summary for machine processing

mod github;
mod json;
mod text;

pub use github::{output_entries, GithubOutput};
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::checker::CheckReport;
use std::io::Write;

/// Summary format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
}

impl OutputFormat {
    /// Select the format from the `--json` flag
    pub fn from_cli(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Trait for summary formatters
pub trait OutputFormatter {
    /// Format and write a completed check
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create a summary formatter for the given format
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new()),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}
