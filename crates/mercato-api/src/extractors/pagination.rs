//! Pagination and search query parameters for list endpoints.

use serde::Deserialize;

use mercato_core::types::pagination::{DEFAULT_PAGE_LIMIT, PageParams};

/// Query parameters of `GET /products`.
///
/// Parsing is lenient: anything that is not a positive integer falls
/// back to the default rather than rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Requested page (default 1).
    pub page: Option<String>,
    /// Requested page size (default 10).
    pub limit: Option<String>,
    /// Free-text search.
    pub q: Option<String>,
}

impl ListQuery {
    /// Resolve the pagination parameters.
    pub fn page_params(&self) -> PageParams {
        PageParams::new(
            parse_positive(self.page.as_deref()).unwrap_or(1),
            parse_positive(self.limit.as_deref()).unwrap_or(DEFAULT_PAGE_LIMIT),
        )
    }

    /// The search string, if a non-empty one was supplied.
    pub fn search(&self) -> Option<String> {
        self.q.clone().filter(|q| !q.is_empty())
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|value| value.parse::<u64>().ok())
        .filter(|value| *value >= 1)
}
