//! Baseline fetcher
//!
//! Downloads the `release.json` asset attached to the latest release of this
//! repository. Every failure collapses to "no baseline": a repository without
//! releases yet (HTTP 404) is the normal first-run case, anything else is
//! logged and treated the same way.

use crate::domain::ReleaseBaseline;
use crate::error::FetchError;
use crate::registry::GitHubApi;

/// Asset name carrying the bundled versions of a release
pub const BASELINE_ASSET: &str = "release.json";

/// Fetches the baseline recorded by the previous release
pub struct BaselineFetcher {
    api: GitHubApi,
    repository: Option<String>,
}

impl BaselineFetcher {
    /// Create a fetcher for `repository` (`owner/repo`); `None` disables lookups
    pub fn new(api: GitHubApi, repository: Option<String>) -> Self {
        Self { api, repository }
    }

    /// Fetch the baseline, or `None` when there is nothing usable to compare against
    pub async fn fetch(&self) -> Option<ReleaseBaseline> {
        let Some(repository) = self.repository.as_deref() else {
            tracing::debug!("no repository configured, skipping baseline lookup");
            return None;
        };

        match self.try_fetch(repository).await {
            Ok(baseline) => baseline,
            Err(e) if e.is_not_found() => {
                tracing::info!(repository, "no previous release found");
                None
            }
            Err(e) => {
                tracing::warn!(repository, error = %e, "failed to fetch previous release");
                None
            }
        }
    }

    async fn try_fetch(&self, repository: &str) -> Result<Option<ReleaseBaseline>, FetchError> {
        let release = self.api.latest_release(repository).await?;

        let Some(asset) = release.asset_named(BASELINE_ASSET) else {
            tracing::warn!(
                repository,
                tag = release.tag_name.as_deref().unwrap_or_default(),
                "latest release has no {} asset",
                BASELINE_ASSET
            );
            return Ok(None);
        };

        let url = &asset.browser_download_url;
        let content = self.api.client().get_text(url).await?;
        let baseline = ReleaseBaseline::from_json(&content)
            .map_err(|e| FetchError::invalid_response(url, e.to_string()))?;

        tracing::info!(
            repository,
            release = release
                .name
                .as_deref()
                .or(release.tag_name.as_deref())
                .unwrap_or_default(),
            "retrieved baseline from previous release"
        );
        Ok(Some(baseline))
    }
}
