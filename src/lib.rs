//! bundle-check - release gate for bundled media tools
//!
//! This library decides whether a new package should be built by comparing
//! the latest upstream releases of the bundled tools:
//! - yt-dlp (GitHub release tag)
//! - FFmpeg (BtbN/FFmpeg-Builds autobuild asset)
//! - Deno (GitHub release tag)
//!
//! against the `release.json` recorded in this repository's latest release.

pub mod checker;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod output;
pub mod progress;
pub mod registry;
