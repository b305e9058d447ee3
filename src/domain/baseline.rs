//! Baseline recorded by the previous release
//!
//! The `release.json` asset attached to each release carries a `bundled`
//! table with one `{ "version": ... }` object per tool. Other top-level keys
//! are kept verbatim so they can be inspected without a fixed schema.

use super::Tool;
use serde::de::Error as _;
use serde::Serialize;
use serde_json::{Map, Value};

/// Parsed `release.json` from the latest release of this repository
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReleaseBaseline(Map<String, Value>);

impl ReleaseBaseline {
    /// Parses a baseline document.
    ///
    /// The document must be a JSON object whose `bundled` entry is itself an
    /// object; anything else carries no usable versions and is rejected.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let map: Map<String, Value> = serde_json::from_str(content)?;
        if !map.get("bundled").is_some_and(Value::is_object) {
            return Err(serde_json::Error::custom(
                "baseline has no 'bundled' object",
            ));
        }
        Ok(Self(map))
    }

    /// Returns `bundled.<key>.version` for a tool
    pub fn bundled_version(&self, tool: Tool) -> Option<&str> {
        self.0
            .get("bundled")?
            .get(tool.key())?
            .get("version")?
            .as_str()
    }

    /// Returns the raw top-level `<key>` entry for a tool
    pub fn top_level_entry(&self, tool: Tool) -> Option<&Value> {
        self.0.get(tool.key())
    }
}
