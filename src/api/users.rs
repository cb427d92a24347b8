//! `GET /api/users` client.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use super::http::{HttpGet, with_query};
use super::types::ApiError;

pub const USERS_PATH: &str = "/api/users";

/// Filter values the backend recognizes. Any other string is still sent
/// as-is; the backend decides what to do with it.
pub mod filter {
    pub const ACTIVE: &str = "active";
    pub const INACTIVE: &str = "inactive";
    pub const BOTH: &str = "both";
}

#[derive(Clone)]
pub struct UserList {
    http: Arc<dyn HttpGet>,
}

impl UserList {
    #[must_use]
    pub fn new(http: Arc<dyn HttpGet>) -> Self {
        Self { http }
    }

    pub fn init(&self) {
        info!("Initializing UserList");
    }

    /// Fetch the user list for `filter`. The body is returned undecoded
    /// beyond JSON.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or a
    /// body that is not JSON.
    pub async fn fetch_users(&self, filter: &str) -> Result<Value, ApiError> {
        let path = with_query(USERS_PATH, &[("filter", filter)]);
        self.http.get(&path).await?.into_json()
    }

    /// Fetch users and hand the body to `callback`. On failure the callback
    /// is never invoked.
    pub async fn get_users<F>(&self, filter: &str, callback: F)
    where
        F: FnOnce(Value),
    {
        match self.fetch_users(filter).await {
            Ok(body) => callback(body),
            Err(e) => warn!(error = %e, code = e.error_code(), filter, "user list request dropped"),
        }
    }
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
