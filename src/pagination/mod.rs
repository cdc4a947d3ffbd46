//! Pagination module
//!
//! List endpoints return `{"items": [...], "total": n}` and take a zero-based
//! `page` query parameter. Pages are requested one after another until the
//! number of items received reaches the reported total.
//!
//! # Overview
//!
//! [`Client::get_list`](crate::Client::get_list) fetches every page and
//! returns the concatenated items. [`Client::pages`](crate::Client::pages)
//! hands out a [`Pager`] instead, which fetches lazily so callers can stop
//! early.

mod pager;
mod types;

pub use pager::Pager;
pub use types::{page_endpoint, ListResponse, PaginationState, PAGE_PARAM};
