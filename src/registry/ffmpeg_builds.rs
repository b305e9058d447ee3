//! FFmpeg-Builds adapter
//!
//! BtbN/FFmpeg-Builds publishes a rolling "latest" release whose display name
//! points at a dated autobuild release. The version is embedded in the name of
//! the build asset, e.g. `ffmpeg-n8.0-12-g1234abcd-linux64-gpl-8.0.tar.xz`.
//!
//! Lookup is two steps:
//! 1. `releases/latest` → display name → canonical autobuild tag
//! 2. `releases/tags/{tag}` → asset ending in [`ASSET_SUFFIX`] → version

use crate::domain::Tool;
use crate::error::FetchError;
use crate::registry::{GitHubApi, VersionSource};
use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;

/// Build variant whose asset carries the version
pub const ASSET_SUFFIX: &str = "linux64-gpl-8.0.tar.xz";

/// Phrase in the latest release's display name
const AUTO_BUILD_PHRASE: &str = "Latest Auto-Build";

/// Tag prefix replacing the phrase
const AUTO_BUILD_TAG: &str = "autobuild";

/// `n<major>[.<minor>...]-<commits>-g<hash>`
static BUILD_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"n(\d+\.?)*-\d+-g[A-Za-z0-9]+").unwrap());

/// Turns a release display name into its tag.
///
/// `Latest Auto-Build (2024-01-15)` becomes `autobuild-2024-01-15`. Tags that
/// are already canonical are returned unchanged.
pub fn derive_release_tag(name: &str) -> String {
    name.replace(['(', ')'], "")
        .replace(AUTO_BUILD_PHRASE, AUTO_BUILD_TAG)
        .replace([':', ' '], "-")
}

/// Extracts the FFmpeg version from a build asset name
pub fn extract_build_version(asset_name: &str) -> Option<&str> {
    BUILD_VERSION_RE.find(asset_name).map(|m| m.as_str())
}

/// FFmpeg-Builds adapter
pub struct FfmpegBuildsSource {
    api: GitHubApi,
}

impl FfmpegBuildsSource {
    /// Create a new FFmpeg-Builds adapter
    pub fn new(api: GitHubApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl VersionSource for FfmpegBuildsSource {
    fn tool(&self) -> Tool {
        Tool::Ffmpeg
    }

    async fn fetch_version(&self) -> Result<String, FetchError> {
        let repository = Tool::Ffmpeg.repository();

        let latest = self.api.latest_release(repository).await?;
        let name = latest
            .name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| FetchError::missing_field(Tool::Ffmpeg.key(), "name"))?;
        let tag = derive_release_tag(&name);
        tracing::debug!(%name, %tag, "resolved FFmpeg autobuild tag");

        let release = self.api.release_by_tag(repository, &tag).await?;
        let asset = release
            .asset_ending_with(ASSET_SUFFIX)
            .ok_or_else(|| FetchError::missing_asset(&tag, ASSET_SUFFIX))?;

        extract_build_version(&asset.name)
            .map(str::to_string)
            .ok_or_else(|| FetchError::version_parse(&asset.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::HttpClient;
    use mockito::Server;

    #[test]
    fn test_derive_release_tag() {
        assert_eq!(
            derive_release_tag("Latest Auto-Build (2024-01-15)"),
            "autobuild-2024-01-15"
        );
    }

    #[test]
    fn test_derive_release_tag_with_time() {
        assert_eq!(
            derive_release_tag("Latest Auto-Build (2025-10-18 13:02)"),
            "autobuild-2025-10-18-13-02"
        );
    }

    #[test]
    fn test_derive_release_tag_idempotent() {
        let once = derive_release_tag("Latest Auto-Build (2024-01-15)");
        assert_eq!(derive_release_tag(&once), once);
    }

    #[test]
    fn test_extract_build_version() {
        assert_eq!(
            extract_build_version("ffmpeg-n6.0-1-gabc123-linux64-gpl-8.0.tar.xz"),
            Some("n6.0-1-gabc123")
        );
    }

    #[test]
    fn test_extract_build_version_multi_part() {
        assert_eq!(
            extract_build_version("ffmpeg-n8.0.1-12-g1234abcd-linux64-gpl-8.0.tar.xz"),
            Some("n8.0.1-12-g1234abcd")
        );
    }

    #[test]
    fn test_extract_build_version_master_build() {
        assert_eq!(
            extract_build_version("ffmpeg-master-latest-linux64-gpl.tar.xz"),
            None
        );
    }

    async fn mock_release(server: &mut Server, path: &str, body: &str) -> mockito::Mock {
        server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    fn source(url: &str) -> FfmpegBuildsSource {
        FfmpegBuildsSource::new(GitHubApi::new(HttpClient::new().unwrap(), url))
    }

    #[tokio::test]
    async fn test_fetch_version_two_step() {
        let mut server = Server::new_async().await;
        let latest = mock_release(
            &mut server,
            "/repos/BtbN/FFmpeg-Builds/releases/latest",
            r#"{"tag_name": "latest", "name": "Latest Auto-Build (2024-01-15)"}"#,
        )
        .await;
        let tagged = mock_release(
            &mut server,
            "/repos/BtbN/FFmpeg-Builds/releases/tags/autobuild-2024-01-15",
            r#"{"tag_name": "autobuild-2024-01-15", "assets": [
                {"name": "ffmpeg-n6.0-1-gabc123-linux64-gpl-shared-8.0.tar.xz", "browser_download_url": "https://x/1"},
                {"name": "ffmpeg-n6.0-1-gabc123-linux64-gpl-8.0.tar.xz", "browser_download_url": "https://x/2"},
                {"name": "ffmpeg-n6.0-1-gabc123-win64-gpl-8.0.zip", "browser_download_url": "https://x/3"}
            ]}"#,
        )
        .await;

        let version = source(&server.url()).fetch_version().await.unwrap();

        latest.assert_async().await;
        tagged.assert_async().await;
        assert_eq!(version, "n6.0-1-gabc123");
    }

    #[tokio::test]
    async fn test_fetch_version_missing_asset() {
        let mut server = Server::new_async().await;
        let _latest = mock_release(
            &mut server,
            "/repos/BtbN/FFmpeg-Builds/releases/latest",
            r#"{"name": "Latest Auto-Build (2024-01-15)"}"#,
        )
        .await;
        let _tagged = mock_release(
            &mut server,
            "/repos/BtbN/FFmpeg-Builds/releases/tags/autobuild-2024-01-15",
            r#"{"assets": [{"name": "checksums.sha256", "browser_download_url": "https://x"}]}"#,
        )
        .await;

        let err = source(&server.url()).fetch_version().await.unwrap_err();
        assert!(matches!(err, FetchError::MissingAsset { .. }));
    }

    #[tokio::test]
    async fn test_fetch_version_unparseable_asset() {
        let mut server = Server::new_async().await;
        let _latest = mock_release(
            &mut server,
            "/repos/BtbN/FFmpeg-Builds/releases/latest",
            r#"{"name": "Latest Auto-Build (2024-01-15)"}"#,
        )
        .await;
        let _tagged = mock_release(
            &mut server,
            "/repos/BtbN/FFmpeg-Builds/releases/tags/autobuild-2024-01-15",
            r#"{"assets": [{"name": "ffmpeg-master-latest-linux64-gpl-8.0.tar.xz", "browser_download_url": "https://x"}]}"#,
        )
        .await;

        let err = source(&server.url()).fetch_version().await.unwrap_err();
        assert!(matches!(err, FetchError::VersionParse { .. }));
    }

    #[tokio::test]
    async fn test_fetch_version_missing_name() {
        let mut server = Server::new_async().await;
        let _latest = mock_release(
            &mut server,
            "/repos/BtbN/FFmpeg-Builds/releases/latest",
            r#"{"tag_name": "latest"}"#,
        )
        .await;

        let err = source(&server.url()).fetch_version().await.unwrap_err();
        assert!(matches!(err, FetchError::MissingField { .. }));
    }
}
