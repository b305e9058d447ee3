//! Latest-tag adapter
//!
//! Reports the `tag_name` of a repository's latest GitHub release.
//! Used for yt-dlp and Deno, whose tags are their version identifiers.

use crate::domain::Tool;
use crate::error::FetchError;
use crate::registry::{GitHubApi, VersionSource};
use async_trait::async_trait;

/// Adapter reading the latest release tag of a tool's repository
pub struct LatestTagSource {
    tool: Tool,
    api: GitHubApi,
}

impl LatestTagSource {
    /// Create a new latest-tag adapter
    pub fn new(tool: Tool, api: GitHubApi) -> Self {
        Self { tool, api }
    }
}

#[async_trait]
impl VersionSource for LatestTagSource {
    fn tool(&self) -> Tool {
        self.tool
    }

    async fn fetch_version(&self) -> Result<String, FetchError> {
        let release = self.api.latest_release(self.tool.repository()).await?;
        release
            .tag_name
            .filter(|tag| !tag.is_empty())
            .ok_or_else(|| FetchError::missing_field(self.tool.key(), "tag_name"))
    }
}
