//! `GET /api/point-categories` client.

use std::sync::Arc;

use tracing::{info, warn};

use super::http::{HttpGet, encode_segment};
use super::types::{ApiError, PointCategoryDetail, PointCategoryMap};

pub const POINT_CATEGORIES_PATH: &str = "/api/point-categories";

#[derive(Clone)]
pub struct PointCategories {
    http: Arc<dyn HttpGet>,
}

impl PointCategories {
    #[must_use]
    pub fn new(http: Arc<dyn HttpGet>) -> Self {
        Self { http }
    }

    pub fn init(&self) {
        info!("Initializing PointCategories");
    }

    /// Fetch all top-level category groups with their sub-categories, in the
    /// order the backend lists them.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or a
    /// body that is not a category map.
    pub async fn fetch_point_categories(&self) -> Result<PointCategoryMap, ApiError> {
        self.http.get(POINT_CATEGORIES_PATH).await?.into_json()
    }

    /// Fetch one category by name. The backend ignores spaces when matching.
    ///
    /// # Errors
    ///
    /// Same as [`PointCategories::fetch_point_categories`]; an unknown name
    /// comes back as [`ApiError::Status`] with 404.
    pub async fn fetch_point_category(&self, name: &str) -> Result<PointCategoryDetail, ApiError> {
        let path = format!("{POINT_CATEGORIES_PATH}/{}", encode_segment(name));
        self.http.get(&path).await?.into_json()
    }

    /// Fetch the category map and hand it to `callback`. Only a 2xx response
    /// with a decodable body reaches the callback.
    pub async fn get_point_categories<F>(&self, callback: F)
    where
        F: FnOnce(PointCategoryMap),
    {
        match self.fetch_point_categories().await {
            Ok(categories) => callback(categories),
            Err(e) => warn!(error = %e, code = e.error_code(), "point category request dropped"),
        }
    }
}

#[cfg(test)]
#[path = "point_categories_test.rs"]
mod tests;
