//! JSON summary formatter for machine processing

use crate::checker::CheckReport;
use crate::domain::{ReleaseBaseline, VersionSet};
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of a completed check
#[derive(Serialize)]
struct JsonOutput<'a> {
    should_package: bool,
    detected_update: &'a str,
    versions_changed: bool,
    first_release: bool,
    current: &'a VersionSet,
    baseline: Option<&'a ReleaseBaseline>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            should_package: report.decision.should_package,
            detected_update: &report.decision.detected_update,
            versions_changed: report.decision.versions_changed,
            first_release: report.decision.first_release,
            current: &report.current,
            baseline: report.baseline.as_ref(),
        };
        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}
