//! Application error types using thiserror
//!
//! - FetchError: Issues talking to a release feed (transport, decode, missing data)
//! - OutputError: Issues writing the CI output file
//!
//! The binary reports both through `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors related to release feed lookups
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure or unexpected HTTP status
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// The resource does not exist (HTTP 404)
    #[error("not found: {url}")]
    NotFound { url: String },

    /// Response body could not be decoded
    #[error("invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },

    /// An expected field was missing or empty
    #[error("{source_name} response has no '{field}' field")]
    MissingField { source_name: String, field: String },

    /// No release asset matched the expected name
    #[error("no asset matching '{pattern}' in release {release}")]
    MissingAsset { release: String, pattern: String },

    /// A version could not be extracted from a string
    #[error("could not extract a version from '{input}'")]
    VersionParse { input: String },
}

/// Errors related to writing CI outputs
#[derive(Error, Debug)]
pub enum OutputError {
    /// Failed to open or append to the output file
    #[error("failed to write output file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Creates a new Network error
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        FetchError::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new NotFound error
    pub fn not_found(url: impl Into<String>) -> Self {
        FetchError::NotFound { url: url.into() }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(url: impl Into<String>, message: impl Into<String>) -> Self {
        FetchError::InvalidResponse {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new MissingField error
    pub fn missing_field(source_name: impl Into<String>, field: impl Into<String>) -> Self {
        FetchError::MissingField {
            source_name: source_name.into(),
            field: field.into(),
        }
    }

    /// Creates a new MissingAsset error
    pub fn missing_asset(release: impl Into<String>, pattern: impl Into<String>) -> Self {
        FetchError::MissingAsset {
            release: release.into(),
            pattern: pattern.into(),
        }
    }

    /// Creates a new VersionParse error
    pub fn version_parse(input: impl Into<String>) -> Self {
        FetchError::VersionParse {
            input: input.into(),
        }
    }

    /// Returns true for a 404 response
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}

impl OutputError {
    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OutputError::WriteError {
            path: path.into(),
            source,
        }
    }
}
