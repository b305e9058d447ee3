//! GitHub Actions output file
//!
//! Appends `should_package`, `versions` and `detected_update` to the file
//! named by `GITHUB_OUTPUT`. Values spanning several lines use the
//! `key<<DELIMITER` form understood by the runner, with a fresh random
//! delimiter per value that never occurs inside it.

use crate::checker::CheckReport;
use crate::error::OutputError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// Prefix of generated heredoc delimiters
const DELIMITER_PREFIX: &str = "ghadelimiter_";

/// Returns the outputs for a report, in emission order
pub fn output_entries(report: &CheckReport) -> Vec<(&'static str, String)> {
    vec![
        (
            "should_package",
            report.decision.should_package_output().to_string(),
        ),
        ("versions", report.current.to_json()),
        ("detected_update", report.decision.detected_update.clone()),
    ]
}

/// Picks a random delimiter that does not appear in `value`
fn heredoc_delimiter(value: &str) -> String {
    loop {
        let delimiter = format!("{}{}", DELIMITER_PREFIX, Uuid::new_v4());
        if !value.contains(&delimiter) {
            return delimiter;
        }
    }
}

/// Formats entries as runner output lines
fn format_entries(entries: &[(&str, String)]) -> String {
    let mut out = String::new();
    for (key, value) in entries {
        if value.contains('\n') {
            let delimiter = heredoc_delimiter(value);
            out.push_str(&format!("{key}<<{delimiter}\n{value}\n{delimiter}\n"));
        } else {
            out.push_str(&format!("{key}={value}\n"));
        }
    }
    out
}

/// Append-only writer for the runner's output file
pub struct GithubOutput {
    path: PathBuf,
}

impl GithubOutput {
    /// Create a writer for `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append the outputs for a report
    pub fn write(&self, report: &CheckReport) -> Result<(), OutputError> {
        let content = format_entries(&output_entries(report));
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| OutputError::write_error(&self.path, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| OutputError::write_error(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), "wrote outputs");
        Ok(())
    }
}
