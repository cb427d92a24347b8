//! `GET /api/events` client.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use super::http::{HttpGet, with_query};
use super::types::ApiError;

pub const EVENTS_PATH: &str = "/api/events";

/// Category value the backend treats as "every event".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Clone)]
pub struct EventList {
    http: Arc<dyn HttpGet>,
}

impl EventList {
    #[must_use]
    pub fn new(http: Arc<dyn HttpGet>) -> Self {
        Self { http }
    }

    pub fn init(&self) {
        info!("Initializing EventList");
    }

    /// Fetch every event. No query parameters are sent.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or a
    /// body that is not JSON.
    pub async fn fetch_events(&self) -> Result<Value, ApiError> {
        self.http.get(EVENTS_PATH).await?.into_json()
    }

    /// Fetch the events filed under `category` and its sub-categories.
    ///
    /// # Errors
    ///
    /// Same as [`EventList::fetch_events`]; an unknown category comes back as
    /// [`ApiError::Status`] with 404.
    pub async fn fetch_events_in_category(&self, category: &str) -> Result<Value, ApiError> {
        let path = with_query(EVENTS_PATH, &[("category", category)]);
        self.http.get(&path).await?.into_json()
    }

    /// Fetch every event and hand the body to `callback`. On failure the
    /// callback is never invoked.
    pub async fn get_events<F>(&self, callback: F)
    where
        F: FnOnce(Value),
    {
        match self.fetch_events().await {
            Ok(body) => callback(body),
            Err(e) => warn!(error = %e, code = e.error_code(), "event list request dropped"),
        }
    }
}

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;
