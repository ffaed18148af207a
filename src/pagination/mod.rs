//! Pagination module
//!
//! Reads WordPress-style pagination headers and expands a paged resource
//! into its per-page URLs.
//!
//! # Overview
//!
//! A paged endpoint advertises its page count in `X-WP-TotalPages` and its
//! result count in `X-WP-Total`. Any JSON API using these header names is
//! handled the same way; no other WordPress conventions are assumed.

mod endpoints;
mod headers;

pub use endpoints::{cap_pages, page_url_iter, page_urls, PAGE_PARAM};
pub use headers::{PaginationHeaders, TOTAL_PAGES_HEADER, TOTAL_RESULTS_HEADER};
