//! Views — markup built from API payloads.

pub mod dom;
pub mod select;

pub use dom::{Element, Node, SelectElement};
pub use select::PointCategorySelectView;
