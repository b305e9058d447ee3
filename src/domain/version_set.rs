//! Versions discovered upstream for every bundled tool

use super::Tool;
use serde::{Deserialize, Serialize};

/// Latest upstream version of each bundled tool
///
/// Serializes to `{"yt_dlp":..,"ffmpeg":..,"deno":..}`, which is the form
/// emitted as the `versions` CI output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSet {
    yt_dlp: Option<String>,
    ffmpeg: Option<String>,
    deno: Option<String>,
}

impl VersionSet {
    /// Creates a VersionSet from the three lookup results
    pub fn new(yt_dlp: Option<String>, ffmpeg: Option<String>, deno: Option<String>) -> Self {
        Self {
            yt_dlp,
            ffmpeg,
            deno,
        }
    }

    /// Returns the version recorded for a tool
    pub fn get(&self, tool: Tool) -> Option<&str> {
        match tool {
            Tool::YtDlp => self.yt_dlp.as_deref(),
            Tool::Ffmpeg => self.ffmpeg.as_deref(),
            Tool::Deno => self.deno.as_deref(),
        }
    }

    /// Returns the tools whose lookup produced no version
    pub fn missing(&self) -> Vec<Tool> {
        Tool::ALL
            .into_iter()
            .filter(|tool| self.get(*tool).is_none())
            .collect()
    }

    /// Compact JSON encoding used for the `versions` output
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl FromIterator<(Tool, Option<String>)> for VersionSet {
    fn from_iter<I: IntoIterator<Item = (Tool, Option<String>)>>(iter: I) -> Self {
        let mut set = VersionSet::default();
        for (tool, version) in iter {
            match tool {
                Tool::YtDlp => set.yt_dlp = version,
                Tool::Ffmpeg => set.ffmpeg = version,
                Tool::Deno => set.deno = version,
            }
        }
        set
    }
}
