//! # bluebonnets-points
//!
//! Client library for the Bluebonnets points backend.
//!
//! The `api` module wraps the three read endpoints the points UI consumes
//! (`/api/users`, `/api/events`, `/api/point-categories`). The `view` module
//! turns a point-category payload into a grouped `<select>` element.

pub mod api;
pub mod config;
pub mod view;
