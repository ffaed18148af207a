//! Page URL generation

use crate::error::{Error, Result};

/// Query parameter appended to each page URL
pub const PAGE_PARAM: &str = "page";

/// Clamp a page count to an optional debug cap
pub fn cap_pages(total_pages: u64, debug_cap: Option<u64>) -> u64 {
    match debug_cap {
        Some(cap) if total_pages > cap => cap,
        _ => total_pages,
    }
}

/// Lazily yield one URL per page, `1..=pages`
///
/// The page parameter is appended with a literal `?` even when `base_url`
/// already has a query string.
pub fn page_url_iter(base_url: &str, pages: u64) -> impl Iterator<Item = String> + '_ {
    (1..=pages).map(move |page| format!("{base_url}?{PAGE_PARAM}={page}"))
}

/// Build one URL per page, `1..=pages`
///
/// Fails with `Error::MalformedResponse` when the page count is too large to
/// hold in memory.
///
/// # Example
///
/// ```
/// use json_probe::pagination::page_urls;
///
/// assert_eq!(
///     page_urls("https://foo.com/endpoint/bar/baz", 2).unwrap(),
///     vec![
///         "https://foo.com/endpoint/bar/baz?page=1",
///         "https://foo.com/endpoint/bar/baz?page=2",
///     ]
/// );
/// ```
pub fn page_urls(base_url: &str, pages: u64) -> Result<Vec<String>> {
    let too_many = || Error::malformed(format!("page count {pages} is too large to list"));

    let len = usize::try_from(pages).map_err(|_| too_many())?;
    let mut urls = Vec::new();
    urls.try_reserve_exact(len).map_err(|_| too_many())?;
    urls.extend(page_url_iter(base_url, pages));
    Ok(urls)
}
