//! GitHub Releases API access
//!
//! API endpoints:
//! - Latest release: {api}/repos/{owner}/{repo}/releases/latest
//! - Release by tag: {api}/repos/{owner}/{repo}/releases/tags/{tag}

use crate::error::FetchError;
use crate::registry::HttpClient;
use serde::Deserialize;

/// Public GitHub REST API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Release metadata, limited to the fields this crate reads
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Git tag of the release
    #[serde(default)]
    pub tag_name: Option<String>,
    /// Display name of the release
    #[serde(default)]
    pub name: Option<String>,
    /// Files attached to the release
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// Release asset
#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    /// File name
    pub name: String,
    /// Direct download URL
    pub browser_download_url: String,
}

impl Release {
    /// Returns the first asset with exactly this name
    pub fn asset_named(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.name == name)
    }

    /// Returns the first asset whose name ends with `suffix`
    pub fn asset_ending_with(&self, suffix: &str) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.name.ends_with(suffix))
    }
}

/// Thin client for the GitHub Releases API
#[derive(Clone)]
pub struct GitHubApi {
    client: HttpClient,
    api_url: String,
}

impl GitHubApi {
    /// Create a new API client rooted at `api_url`
    pub fn new(client: HttpClient, api_url: &str) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the shared HTTP client
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Build the URL of a repository's latest release
    pub fn latest_release_url(&self, repository: &str) -> String {
        format!("{}/repos/{}/releases/latest", self.api_url, repository)
    }

    /// Build the URL of a release by tag
    pub fn release_by_tag_url(&self, repository: &str, tag: &str) -> String {
        format!("{}/repos/{}/releases/tags/{}", self.api_url, repository, tag)
    }

    /// Fetch the latest release of a repository
    pub async fn latest_release(&self, repository: &str) -> Result<Release, FetchError> {
        self.client
            .get_json(&self.latest_release_url(repository))
            .await
    }

    /// Fetch the release carrying `tag`
    pub async fn release_by_tag(&self, repository: &str, tag: &str) -> Result<Release, FetchError> {
        self.client
            .get_json(&self.release_by_tag_url(repository, tag))
            .await
    }
}
