//! The JSON response probe

use super::keys::top_level_keys;
use super::report::ProbeReport;
use super::snapshot::ResponseSnapshot;
use super::target::ProbeTarget;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::pagination::{cap_pages, page_url_iter, page_urls, PaginationHeaders};
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use tracing::debug;

/// One completed inspection of a JSON HTTP resource
///
/// A probe always holds a successful (2xx) response. It is created by a
/// single GET and never refetches; every accessor derives its answer from
/// the stored snapshot.
#[derive(Debug, Clone)]
pub struct JsonResponseProbe {
    target: ProbeTarget,
    full_url: String,
    response: ResponseSnapshot,
}

impl JsonResponseProbe {
    /// Fetch the target with a default client
    pub async fn fetch(target: ProbeTarget) -> Result<Self> {
        let client = HttpClient::new()?;
        Self::fetch_with(&client, target).await
    }

    /// Fetch the target with the given client
    ///
    /// Fails with `Error::Transport` if the host cannot be reached and with
    /// `Error::HttpStatus` if the response status is not a success.
    pub async fn fetch_with(client: &HttpClient, target: ProbeTarget) -> Result<Self> {
        let full_url = target.full_url();
        let response = client.get(&full_url).await?;
        let snapshot = ResponseSnapshot::capture(response).await?;
        debug!(
            "Probed {} ({}, {} bytes)",
            full_url,
            snapshot.status().as_u16(),
            snapshot.body().len()
        );

        Self::from_snapshot(target, snapshot)
    }

    /// Build a probe from a response captured elsewhere
    pub fn from_snapshot(target: ProbeTarget, response: ResponseSnapshot) -> Result<Self> {
        let full_url = target.full_url();
        if !response.status().is_success() {
            return Err(Error::http_status(response.status().as_u16(), full_url));
        }

        Ok(Self {
            target,
            full_url,
            response,
        })
    }

    pub fn target(&self) -> &ProbeTarget {
        &self.target
    }

    /// The URL that was fetched
    pub fn full_url(&self) -> &str {
        &self.full_url
    }

    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    pub fn headers(&self) -> &HeaderMap {
        self.response.headers()
    }

    pub fn body(&self) -> &Bytes {
        self.response.body()
    }

    /// Keys of the returned JSON object, or of the first object in an array
    pub fn keys(&self) -> Result<Vec<String>> {
        top_level_keys(self.response.body())
    }

    /// Whether the response carries a total-pages header
    pub fn is_paged(&self) -> bool {
        self.pagination().is_paged()
    }

    /// Number of pages, `1` when not paged
    pub fn total_pages(&self) -> Result<u64> {
        self.pagination().total_pages()
    }

    /// Number of results, `None` when the server does not say
    pub fn total_results(&self) -> Result<Option<u64>> {
        self.pagination().total_results()
    }

    /// One URL per page, `full_url?page=1` through `full_url?page=n`
    ///
    /// `debug_cap` limits the number of URLs when the page count exceeds it.
    /// A page count too large to hold in memory is a malformed response.
    pub fn generate_paged_endpoints(&self, debug_cap: Option<u64>) -> Result<Vec<String>> {
        let pages = cap_pages(self.total_pages()?, debug_cap);
        page_urls(&self.full_url, pages)
    }

    /// Same URLs as [`Self::generate_paged_endpoints`], yielded one at a time
    pub fn iter_paged_endpoints(
        &self,
        debug_cap: Option<u64>,
    ) -> Result<impl Iterator<Item = String> + '_> {
        let pages = cap_pages(self.total_pages()?, debug_cap);
        Ok(page_url_iter(&self.full_url, pages))
    }

    /// Summarize the probe
    pub fn report(&self) -> Result<ProbeReport> {
        Ok(ProbeReport {
            endpoint: self.full_url.clone(),
            total_pages: self.total_pages()?,
            total_results: self.total_results()?,
            keys: self.keys()?,
        })
    }

    fn pagination(&self) -> PaginationHeaders<'_> {
        PaginationHeaders::new(self.response.headers())
    }
}
