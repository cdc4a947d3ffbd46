//! Pagination types
//!
//! The wire envelope for list endpoints and the running state of a page walk.

use serde::{Deserialize, Serialize};

/// Query parameter carrying the zero-based page index
pub const PAGE_PARAM: &str = "page";

/// One page of a list endpoint: `{"items": [...], "total": n}`
///
/// `total` is the number of items available across all pages, not the size
/// of this page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct ListResponse<T> {
    /// Items on this page
    #[serde(default)]
    pub items: Vec<T>,
    /// Items available server-side across all pages
    #[serde(default)]
    pub total: usize,
}

/// State tracked while walking pages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Next page to request
    pub page: u32,
    /// Items received so far
    pub total_fetched: usize,
    /// Total reported by the most recent page
    pub total: Option<usize>,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Increment page number
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Add to total fetched
    pub fn add_fetched(&mut self, count: usize) {
        self.total_fetched += count;
    }

    /// Fold one received page into the state.
    ///
    /// The latest reported total wins; pagination completes once the fetched
    /// count reaches it.
    pub fn record_page(&mut self, count: usize, total: usize) {
        self.add_fetched(count);
        self.total = Some(total);
        self.next_page();
        if self.total_fetched >= total {
            self.mark_done();
        }
    }

    /// Items still expected according to the last reported total
    pub fn remaining(&self) -> Option<usize> {
        self.total
            .map(|total| total.saturating_sub(self.total_fetched))
    }
}

/// Append the page parameter to an endpoint, respecting an existing query
pub fn page_endpoint(endpoint: &str, page: u32) -> String {
    let sep = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{sep}{PAGE_PARAM}={page}")
}
