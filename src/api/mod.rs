//! API — thin clients for the points backend's read endpoints.
//!
//! DESIGN
//! ======
//! One client per endpoint, each holding a shared [`HttpGet`] transport.
//! Every client offers two forms of the same call:
//!
//! - `fetch_*` returns `Result<_, ApiError>` so callers can see failures.
//! - `get_*` takes a callback and invokes it only on success. Failures are
//!   logged at `warn` and otherwise dropped, matching the fire-and-forget
//!   contract the points UI was written against.

pub mod events;
pub mod http;
pub mod point_categories;
pub mod types;
pub mod users;

use std::sync::Arc;

pub use events::EventList;
pub use http::{HttpGet, ReqwestTransport};
pub use point_categories::PointCategories;
pub use types::{ApiError, HttpResponse, PointCategory, PointCategoryDetail, PointCategoryMap, SubCategory};
pub use users::UserList;

use crate::config::ClientConfig;

/// All three endpoint clients sharing one transport.
#[derive(Clone)]
pub struct PointsApi {
    pub users: UserList,
    pub events: EventList,
    pub point_categories: PointCategories,
}

impl PointsApi {
    #[must_use]
    pub fn new(http: Arc<dyn HttpGet>) -> Self {
        Self {
            users: UserList::new(Arc::clone(&http)),
            events: EventList::new(Arc::clone(&http)),
            point_categories: PointCategories::new(http),
        }
    }

    /// Build the clients over a [`ReqwestTransport`] for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::new(Arc::new(transport)))
    }

    /// Run each client's `init` hook.
    pub fn init(&self) {
        self.users.init();
        self.events.init();
        self.point_categories.init();
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
