//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Fixed User-Agent and GitHub `Accept` header
//! - Optional bearer token and request timeout
//! - Mapping of HTTP status codes onto `FetchError`
//!
//! Requests are attempted once; there is no retry or backoff.

use crate::error::FetchError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("bundle-check/", env!("CARGO_PKG_VERSION"));

/// Media type requested from the GitHub REST API
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(None, None)
    }

    /// Create a new HTTP client with an optional timeout and bearer token
    pub fn with_config(timeout: Option<Duration>, token: Option<&str>) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| FetchError::network("HTTP client", format!("invalid token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            FetchError::network(
                "HTTP client",
                format!("failed to create HTTP client: {}", e),
            )
        })?;

        Ok(Self { client })
    }

    /// Perform a GET request, mapping error statuses onto `FetchError`
    pub async fn get(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::network(url, e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::not_found(url));
        }
        if !status.is_success() {
            return Err(FetchError::network(url, format!("HTTP {}", status)));
        }

        Ok(response)
    }

    /// Perform a GET request and parse the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.get(url).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::invalid_response(url, format!("failed to parse JSON: {}", e)))
    }

    /// Perform a GET request and return the body as text
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.get(url).await?;
        response.text().await.map_err(|e| {
            FetchError::invalid_response(url, format!("failed to read response body: {}", e))
        })
    }
}
