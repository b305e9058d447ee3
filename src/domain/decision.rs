//! Packaging decision

use super::{ReleaseBaseline, Tool, VersionSet};
use serde::Serialize;
use serde_json::Value;

/// Value reported when no update was detected
pub const NO_UPDATE: &str = "none";

/// Old value shown when the baseline has no top-level entry for a tool
const UNKNOWN_ENTRY: &str = "unknown";

/// Old value shown for a top-level `null` entry
const NULL_ENTRY: &str = "None";

/// Whether a new package should be built, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// True when a package build is warranted
    pub should_package: bool,
    /// Human-readable `key: old → new` note, or `none`
    pub detected_update: String,
    /// True when any `bundled.<key>.version` differs from upstream
    pub versions_changed: bool,
    /// True when there was no previous release to compare against
    pub first_release: bool,
}

impl Decision {
    /// Compares upstream versions against the previous release.
    ///
    /// `versions_changed` is driven by the nested `bundled.<key>.version`
    /// fields only. `detected_update` is an annotation computed from the
    /// baseline's top-level entries and keeps the last mismatch found.
    pub fn decide(current: &VersionSet, baseline: Option<&ReleaseBaseline>) -> Self {
        let Some(baseline) = baseline else {
            return Self {
                should_package: true,
                detected_update: NO_UPDATE.to_string(),
                versions_changed: false,
                first_release: true,
            };
        };

        let versions_changed = Tool::ALL
            .into_iter()
            .any(|tool| baseline.bundled_version(tool) != current.get(tool));

        let mut detected_update = None;
        for tool in Tool::ALL {
            let new = current.get(tool);
            let old = baseline.top_level_entry(tool);
            if !entry_matches(old, new) {
                detected_update = Some(format!(
                    "{}: {} → {}",
                    tool.key(),
                    describe_entry(old),
                    new.unwrap_or(NO_UPDATE)
                ));
            }
        }

        Self {
            should_package: versions_changed,
            detected_update: detected_update.unwrap_or_else(|| NO_UPDATE.to_string()),
            versions_changed,
            first_release: false,
        }
    }

    /// Returns the value written for the `should_package` output
    pub fn should_package_output(&self) -> &'static str {
        if self.should_package {
            "true"
        } else {
            "false"
        }
    }
}

fn entry_matches(old: Option<&Value>, new: Option<&str>) -> bool {
    match (old, new) {
        (Some(Value::String(old)), Some(new)) => old == new,
        (None | Some(Value::Null), None) => true,
        _ => false,
    }
}

fn describe_entry(entry: Option<&Value>) -> String {
    match entry {
        None => UNKNOWN_ENTRY.to_string(),
        Some(Value::Null) => NULL_ENTRY.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
