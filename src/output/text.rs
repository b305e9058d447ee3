//! Text summary formatter for human-readable display

use crate::checker::CheckReport;
use crate::domain::{Tool, NO_UPDATE};
use crate::output::OutputFormatter;
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
#[derive(Debug, Default)]
pub struct TextFormatter;

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        Self
    }

    fn verdict(report: &CheckReport) -> String {
        let decision = &report.decision;
        if decision.first_release {
            "package (no previous release)".green().bold().to_string()
        } else if decision.should_package {
            "package (bundled versions changed)".green().bold().to_string()
        } else {
            "skip (up to date)".dimmed().to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let width = Tool::ALL
            .iter()
            .map(|t| t.display_name().len())
            .max()
            .unwrap_or(0);

        writeln!(writer, "{}", "Current versions:".bold())?;
        for tool in Tool::ALL {
            let version = report.current.get(tool).unwrap_or(NO_UPDATE);
            writeln!(
                writer,
                "  {:<width$}  {}",
                tool.display_name(),
                version.cyan(),
                width = width
            )?;
        }

        match &report.baseline {
            Some(baseline) => {
                writeln!(writer, "{}", "Previous release:".bold())?;
                for tool in Tool::ALL {
                    let old = baseline.bundled_version(tool).unwrap_or(NO_UPDATE);
                    let new = report.current.get(tool).unwrap_or(NO_UPDATE);
                    let marker = if old == new {
                        String::new()
                    } else {
                        format!(" → {}", new.yellow())
                    };
                    writeln!(
                        writer,
                        "  {:<width$}  {}{}",
                        tool.display_name(),
                        old,
                        marker,
                        width = width
                    )?;
                }
            }
            None => {
                writeln!(
                    writer,
                    "{} {}",
                    "Previous release:".bold(),
                    "none".dimmed()
                )?;
            }
        }

        if report.decision.should_package {
            writeln!(
                writer,
                "{} {}",
                "Detected update:".bold(),
                report.decision.detected_update
            )?;
        } else {
            writeln!(writer, "{}", "No updates detected".dimmed())?;
        }
        writeln!(
            writer,
            "{} {}",
            "should_package:".bold(),
            report.decision.should_package_output()
        )?;
        writeln!(writer, "{} {}", "Result:".bold(), Self::verdict(report))?;

        Ok(())
    }
}
