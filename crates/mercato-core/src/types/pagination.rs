//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size when the caller does not supply one.
pub const DEFAULT_PAGE_LIMIT: u64 = 10;

/// Request parameters for paginated queries.
///
/// Both values are clamped to a minimum of 1; out-of-range input never
/// fails, it falls back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageParams {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
}

impl PageParams {
    /// Create page parameters, clamping both values to a minimum of 1.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Number of records to skip before the requested page.
    pub fn skip(&self) -> u64 {
        (self.page.saturating_sub(1)) * self.limit
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// One page of results plus the bookkeeping the clients paginate with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The entities on this page, newest first.
    pub data: Vec<T>,
    /// Number of items actually returned in `data`.
    pub count: u64,
    /// Total number of items matching the filter across all pages.
    pub total: u64,
    /// Total number of pages (minimum 1, even for an empty result).
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
    /// The page that was fetched.
    #[serde(rename = "currentPage")]
    pub current_page: u64,
}

impl<T> Page<T> {
    /// Assemble a page from fetched data and the total match count.
    ///
    /// `count` reflects the fetched length, which may be shorter than
    /// the requested limit on (or past) the last page.
    pub fn assemble(data: Vec<T>, total: u64, params: &PageParams) -> Self {
        let limit = params.limit.max(1);
        Self {
            count: data.len() as u64,
            data,
            total,
            total_pages: total.div_ceil(limit).max(1),
            current_page: params.page.max(1),
        }
    }

    /// Map the page's entities, keeping the bookkeeping intact.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            count: self.count,
            total: self.total,
            total_pages: self.total_pages,
            current_page: self.current_page,
        }
    }
}
