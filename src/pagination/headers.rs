//! Pagination header reader

use crate::error::{Error, Result};
use reqwest::header::HeaderMap;
use tracing::debug;

/// Header carrying the number of pages
pub const TOTAL_PAGES_HEADER: &str = "X-WP-TotalPages";

/// Header carrying the number of results across all pages
pub const TOTAL_RESULTS_HEADER: &str = "X-WP-Total";

/// Read-only view over the pagination headers of a response
///
/// Header lookups are case-insensitive. Values are parsed on every call;
/// nothing is cached.
#[derive(Debug, Clone, Copy)]
pub struct PaginationHeaders<'a> {
    headers: &'a HeaderMap,
}

impl<'a> PaginationHeaders<'a> {
    /// Wrap a header map
    pub fn new(headers: &'a HeaderMap) -> Self {
        Self { headers }
    }

    /// Whether the total-pages header is present, whatever its value
    pub fn is_paged(&self) -> bool {
        self.headers.contains_key(TOTAL_PAGES_HEADER)
    }

    /// Number of pages, `1` when the response is not paged
    pub fn total_pages(&self) -> Result<u64> {
        Ok(self.parse(TOTAL_PAGES_HEADER)?.unwrap_or(1))
    }

    /// Number of results, `None` when the header is missing
    ///
    /// A missing header means the total is unknown, which is not the same as
    /// a total of zero.
    pub fn total_results(&self) -> Result<Option<u64>> {
        self.parse(TOTAL_RESULTS_HEADER)
    }

    fn parse(&self, name: &str) -> Result<Option<u64>> {
        let Some(value) = self.headers.get(name) else {
            return Ok(None);
        };

        let text = value
            .to_str()
            .map_err(|_| Error::malformed(format!("{name} header is not valid text")))?;

        let parsed = text.trim().parse::<u64>().map_err(|_| {
            Error::malformed(format!(
                "{name} header is not a non-negative integer: '{text}'"
            ))
        })?;

        debug!("{} = {}", name, parsed);
        Ok(Some(parsed))
    }
}
