//! HTTP transport seam.
//!
//! DESIGN
//! ======
//! Endpoint clients never touch `reqwest` directly. They build a
//! path-and-query string and hand it to an [`HttpGet`] implementation,
//! which returns the fully read response. Production code uses
//! [`ReqwestTransport`]; tests substitute a recording mock.

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::ACCEPT;
use tracing::debug;

use super::types::{ApiError, HttpResponse};
use crate::config::ClientConfig;

/// Characters left bare in a query value: RFC 3986 unreserved.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Provider-neutral async GET. Enables mocking in tests.
#[async_trait]
pub trait HttpGet: Send + Sync {
    /// Issue one GET for `path_and_query` (e.g. `/api/users?filter=active`)
    /// against the transport's base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] when no response was received. A non-2xx
    /// response is still `Ok`; callers decide what a status means.
    async fn get(&self, path_and_query: &str) -> Result<HttpResponse, ApiError>;
}

/// Append `params` to `path` as a percent-encoded query string.
///
/// Spaces encode as `%20`, not `+`.
#[must_use]
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", utf8_percent_encode(k, QUERY_VALUE), utf8_percent_encode(v, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

/// Percent-encode a single path segment (e.g. a category name).
#[must_use]
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, QUERY_VALUE).to_string()
}

// =============================================================================
// REQWEST TRANSPORT
// =============================================================================

pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Build a transport for `config.base_url` with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or the HTTP client
    /// cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        reqwest::Url::parse(&config.base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl HttpGet for ReqwestTransport {
    async fn get(&self, path_and_query: &str) -> Result<HttpResponse, ApiError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Request { url: url.clone(), message: e.to_string() })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Request { url: url.clone(), message: e.to_string() })?;
        debug!(%url, status, bytes = body.len(), "response received");
        Ok(HttpResponse { url, status, body })
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
