//! Wire types and errors shared by the endpoint clients.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configured backend origin is not a valid absolute URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// The backend answered with a non-2xx status.
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16, body: String },

    /// The response body was not the JSON shape the endpoint promises.
    #[error("response from {url} could not be decoded: {message}")]
    Decode { url: String, message: String },
}

impl ApiError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidBaseUrl(_) => "E_INVALID_BASE_URL",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::Request { .. } => "E_REQUEST",
            Self::Status { .. } => "E_STATUS",
            Self::Decode { .. } => "E_DECODE",
        }
    }

    /// HTTP status for [`ApiError::Status`], `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// =============================================================================
// RAW RESPONSE
// =============================================================================

/// A fully read HTTP response, independent of the transport that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as `T`, rejecting non-2xx responses first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for a non-2xx status and
    /// [`ApiError::Decode`] when the body does not deserialize.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(ApiError::Status { url: self.url, status: self.status, body: self.body });
        }
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode { url: self.url, message: e.to_string() })
    }
}

// =============================================================================
// POINT CATEGORIES
// =============================================================================

/// A leaf category listed under a top-level group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_requirement: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baby_requirement: Option<i64>,
    /// Any fields the backend adds that this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SubCategory {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), member_requirement: None, baby_requirement: None, extra: Map::new() }
    }
}

/// A top-level category group. Its label is the key in [`PointCategoryMap`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_requirement: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baby_requirement: Option<i64>,
    #[serde(default)]
    pub sub_categories: Vec<SubCategory>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PointCategory {
    #[must_use]
    pub fn with_sub_categories<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { sub_categories: names.into_iter().map(SubCategory::named).collect(), ..Self::default() }
    }
}

/// `GET /api/point-categories` body: group label -> group, in server order.
pub type PointCategoryMap = IndexMap<String, PointCategory>;

/// `GET /api/point-categories/<name>` body. Sub-categories are names only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointCategoryDetail {
    pub name: String,
    #[serde(default)]
    pub sub_categories: Vec<String>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
