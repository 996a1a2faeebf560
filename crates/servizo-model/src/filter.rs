//! Listing filter state.

use serde::{Deserialize, Serialize};

use crate::enums::{Category, ServiceStatus};

/// Filter predicate applied to the catalog.
///
/// An empty `search`/`location` and a `None` category/availability mean
/// "no constraint", never "match empty".
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text query matched against name, category, and skills.
    pub search: String,
    /// Exact category constraint.
    pub category: Option<Category>,
    /// Substring constraint on the location text.
    pub location: String,
    /// Exact availability constraint.
    pub availability: Option<ServiceStatus>,
}

impl FilterState {
    /// A filter that matches the whole catalog.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Filter with only a search query set.
    pub fn with_search(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }

    /// True when no predicate constrains the output.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.category.is_none()
            && self.location.is_empty()
            && self.availability.is_none()
    }

    /// Number of active refinements, excluding the search text.
    ///
    /// Drives the filter-count badge next to the search box.
    pub fn active_refinements(&self) -> usize {
        usize::from(self.category.is_some())
            + usize::from(!self.location.is_empty())
            + usize::from(self.availability.is_some())
    }

    /// Clear every refinement but keep the search text.
    pub fn clear_refinements(&mut self) {
        self.category = None;
        self.location.clear();
        self.availability = None;
    }
}
