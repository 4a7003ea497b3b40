//! Query filters accepted by the data layer.

use serde::{Deserialize, Serialize};

/// Filter for product listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Free-text search over the product name.
    pub search: Option<String>,
}

impl ProductFilter {
    /// Filter by a free-text search string; empty strings mean no filter.
    pub fn search(query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            search: (!query.is_empty()).then_some(query),
        }
    }
}
