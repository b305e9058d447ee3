//! End-to-end tests for the bundle-check binary
//!
//! These tests verify:
//! - Exit codes for completed and failed checks
//! - Output file contents written through --github-output
//! - JSON summary on stdout

use assert_cmd::Command;
use mockito::{Mock, Server, ServerGuard};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const REPOSITORY: &str = "acme/media-bundle";

fn mock_json(server: &mut ServerGuard, path: &str, body: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

fn mock_upstream(server: &mut ServerGuard, deno: &str) -> Vec<Mock> {
    vec![
        mock_json(
            server,
            "/repos/yt-dlp/yt-dlp/releases/latest",
            r#"{"tag_name": "2024.1.1"}"#,
        ),
        mock_json(
            server,
            "/repos/BtbN/FFmpeg-Builds/releases/latest",
            r#"{"name": "Latest Auto-Build (2024-01-15)"}"#,
        ),
        mock_json(
            server,
            "/repos/BtbN/FFmpeg-Builds/releases/tags/autobuild-2024-01-15",
            r#"{"assets": [{"name": "ffmpeg-n6.0-1-gabc-linux64-gpl-8.0.tar.xz", "browser_download_url": "https://example.invalid/a"}]}"#,
        ),
        mock_json(
            server,
            "/repos/denoland/deno/releases/latest",
            &format!(r#"{{"tag_name": "{}"}}"#, deno),
        ),
    ]
}

fn mock_baseline(server: &mut ServerGuard) -> Vec<Mock> {
    let release = format!(
        r#"{{"assets": [{{"name": "release.json", "browser_download_url": "{}/dl/release.json"}}]}}"#,
        server.url()
    );
    vec![
        mock_json(
            server,
            &format!("/repos/{}/releases/latest", REPOSITORY),
            &release,
        ),
        mock_json(
            server,
            "/dl/release.json",
            r#"{"bundled": {
                "yt_dlp": {"version": "2024.1.1"},
                "ffmpeg": {"version": "n6.0-1-gabc"},
                "deno": {"version": "v1.40.0"}
            }}"#,
        ),
    ]
}

/// Build a command isolated from the caller's GitHub Actions environment
fn command(server: &ServerGuard, output: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bundle-check"));
    for var in [
        "GITHUB_REPOSITORY",
        "GITHUB_OUTPUT",
        "GITHUB_API_URL",
        "GITHUB_TOKEN",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1");
    cmd.args(["--quiet", "--api-url", &server.url()])
        .arg("--github-output")
        .arg(output);
    cmd
}

fn read_output(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("output")).unwrap_or_default()
}

mod exit_codes {
    use super::*;

    /// First run without a repository packages and exits 0
    #[test]
    fn test_first_run_exits_zero() {
        let mut server = Server::new();
        let _upstream = mock_upstream(&mut server, "v1.40.0");
        let dir = tempfile::tempdir().unwrap();

        command(&server, &dir.path().join("output"))
            .assert()
            .success()
            .stdout(predicate::str::contains("should_package: true"));

        let output = read_output(&dir);
        assert!(output.contains("should_package=true\n"));
        assert!(output.contains("detected_update=none\n"));
    }

    /// Up-to-date versions still exit 0
    #[test]
    fn test_up_to_date_exits_zero() {
        let mut server = Server::new();
        let _upstream = mock_upstream(&mut server, "v1.40.0");
        let _baseline = mock_baseline(&mut server);
        let dir = tempfile::tempdir().unwrap();

        command(&server, &dir.path().join("output"))
            .args(["--repository", REPOSITORY])
            .assert()
            .success();

        assert!(read_output(&dir).starts_with("should_package=false\n"));
    }

    /// A failed upstream lookup exits 1 and writes no outputs
    #[test]
    fn test_upstream_failure_exits_one() {
        let mut server = Server::new();
        let _yt = mock_json(
            &mut server,
            "/repos/yt-dlp/yt-dlp/releases/latest",
            r#"{"tag_name": "2024.1.1"}"#,
        );
        let _ffmpeg = server
            .mock("GET", "/repos/BtbN/FFmpeg-Builds/releases/latest")
            .with_status(500)
            .create();
        let _deno = mock_json(
            &mut server,
            "/repos/denoland/deno/releases/latest",
            r#"{"tag_name": "v1.40.0"}"#,
        );
        let dir = tempfile::tempdir().unwrap();

        command(&server, &dir.path().join("output"))
            .assert()
            .code(1)
            .stderr(predicate::str::contains("FFmpeg"));

        assert!(!dir.path().join("output").exists());
    }

    /// A 404 for the baseline release is not fatal
    #[test]
    fn test_baseline_404_exits_zero() {
        let mut server = Server::new();
        let _upstream = mock_upstream(&mut server, "v1.40.0");
        let _latest = server
            .mock("GET", "/repos/acme/media-bundle/releases/latest")
            .with_status(404)
            .create();
        let dir = tempfile::tempdir().unwrap();

        command(&server, &dir.path().join("output"))
            .args(["--repository", REPOSITORY])
            .assert()
            .success();

        assert!(read_output(&dir).starts_with("should_package=true\n"));
    }
}

mod logging {
    use super::*;

    /// RUST_LOG takes precedence over --quiet
    #[test]
    fn test_rust_log_overrides_quiet() {
        let mut server = Server::new();
        let _upstream = mock_upstream(&mut server, "v1.40.0");
        let dir = tempfile::tempdir().unwrap();

        command(&server, &dir.path().join("output"))
            .env("RUST_LOG", "bundle_check=info")
            .assert()
            .success()
            .stderr(predicate::str::contains("found upstream version"));
    }

    /// --quiet alone suppresses info logs
    #[test]
    fn test_quiet_hides_info_logs() {
        let mut server = Server::new();
        let _upstream = mock_upstream(&mut server, "v1.40.0");
        let dir = tempfile::tempdir().unwrap();

        command(&server, &dir.path().join("output"))
            .assert()
            .success()
            .stderr(predicate::str::contains("found upstream version").not());
    }
}

mod json_output {
    use super::*;

    /// --json prints a machine-readable summary
    #[test]
    fn test_json_summary() {
        let mut server = Server::new();
        let _upstream = mock_upstream(&mut server, "v1.41.0");
        let _baseline = mock_baseline(&mut server);
        let dir = tempfile::tempdir().unwrap();

        let assert = command(&server, &dir.path().join("output"))
            .args(["--repository", REPOSITORY, "--json"])
            .assert()
            .success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(value["should_package"], true);
        assert_eq!(value["current"]["deno"], "v1.41.0");
        assert_eq!(value["baseline"]["bundled"]["deno"]["version"], "v1.40.0");
    }
}
