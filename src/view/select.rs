//! Point-category `<select>`: one `<optgroup>` per top-level category,
//! one `<option>` per sub-category.

use tracing::debug;

use super::dom::{Element, SelectElement};
use crate::api::types::PointCategoryMap;

/// Owns the target select and the value to preselect after each render.
///
/// Each view is independent; two views never share a target.
#[derive(Debug, Clone)]
pub struct PointCategorySelectView {
    el: SelectElement,
    default_selected: String,
}

impl PointCategorySelectView {
    #[must_use]
    pub fn init(el: SelectElement, default_selected: impl Into<String>) -> Self {
        Self { el, default_selected: default_selected.into() }
    }

    /// Swap in a new target and default. The previous target is returned.
    pub fn reinit(&mut self, el: SelectElement, default_selected: impl Into<String>) -> SelectElement {
        self.default_selected = default_selected.into();
        std::mem::replace(&mut self.el, el)
    }

    /// Rebuild the target from `data`.
    ///
    /// The target is emptied first. Groups and options follow the order of
    /// `data` and each group's `sub_categories`. The selected value is set to
    /// `default_selected` once at least one group was appended; an empty
    /// `data` leaves it unset.
    pub fn render(&mut self, data: &PointCategoryMap) {
        self.el.empty();

        for (label, category) in data {
            let mut group = Element::new("optgroup").attr("label", label);
            for sub in &category.sub_categories {
                group.append_child(Element::new("option").attr("value", &sub.name).text(&sub.name));
            }
            self.el.append_child(group);
        }

        if !data.is_empty() {
            self.el.set_value(Some(self.default_selected.clone()));
        }
        debug!(groups = data.len(), selected = ?self.el.value(), "point category select rendered");
    }

    #[must_use]
    pub fn element(&self) -> &SelectElement {
        &self.el
    }

    #[must_use]
    pub fn into_element(self) -> SelectElement {
        self.el
    }

    #[must_use]
    pub fn default_selected(&self) -> &str {
        &self.default_selected
    }
}

#[cfg(test)]
#[path = "select_test.rs"]
mod tests;
