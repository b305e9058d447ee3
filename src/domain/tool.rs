//! Bundled tool definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tools bundled into the package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// yt-dlp media downloader
    YtDlp,
    /// FFmpeg static builds from BtbN/FFmpeg-Builds
    Ffmpeg,
    /// Deno JavaScript runtime
    Deno,
}

impl Tool {
    /// All tools, in the order they are fetched and compared
    pub const ALL: [Tool; 3] = [Tool::YtDlp, Tool::Ffmpeg, Tool::Deno];

    /// Returns the key used in output JSON and release.json
    pub fn key(&self) -> &'static str {
        match self {
            Tool::YtDlp => "yt_dlp",
            Tool::Ffmpeg => "ffmpeg",
            Tool::Deno => "deno",
        }
    }

    /// Returns the display name for this tool
    pub fn display_name(&self) -> &'static str {
        match self {
            Tool::YtDlp => "yt-dlp",
            Tool::Ffmpeg => "FFmpeg",
            Tool::Deno => "Deno",
        }
    }

    /// Returns the GitHub repository publishing this tool's releases
    pub fn repository(&self) -> &'static str {
        match self {
            Tool::YtDlp => "yt-dlp/yt-dlp",
            Tool::Ffmpeg => "BtbN/FFmpeg-Builds",
            Tool::Deno => "denoland/deno",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
