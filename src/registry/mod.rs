//! Release feed adapters for discovering upstream versions
//!
//! This module provides:
//! - HTTP client shared foundation
//! - GitHub Releases API types
//! - Latest-tag adapter (yt-dlp, Deno)
//! - FFmpeg-Builds adapter
//! - Baseline fetcher for this repository's own `release.json`

mod baseline;
mod client;
mod ffmpeg_builds;
mod github;
mod latest_tag;

pub use baseline::{BaselineFetcher, BASELINE_ASSET};
pub use client::HttpClient;
pub use ffmpeg_builds::{
    derive_release_tag, extract_build_version, FfmpegBuildsSource, ASSET_SUFFIX,
};
pub use github::{Asset, GitHubApi, Release, DEFAULT_API_URL};
pub use latest_tag::LatestTagSource;

use crate::domain::Tool;
use crate::error::FetchError;
use async_trait::async_trait;

/// Trait for upstream version sources
#[async_trait]
pub trait VersionSource: Send + Sync {
    /// Get the tool this source reports on
    fn tool(&self) -> Tool;

    /// Fetch the latest upstream version identifier
    async fn fetch_version(&self) -> Result<String, FetchError>;
}

/// Create the version source for the given tool
pub fn create_source(tool: Tool, api: GitHubApi) -> Box<dyn VersionSource> {
    match tool {
        Tool::YtDlp | Tool::Deno => Box::new(LatestTagSource::new(tool, api)),
        Tool::Ffmpeg => Box::new(FfmpegBuildsSource::new(api)),
    }
}
