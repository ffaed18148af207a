//! Serializable probe summary

use serde::Serialize;

/// What an inspection found out about an endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    /// Full URL that was fetched
    pub endpoint: String,
    pub total_pages: u64,
    /// `null` when the server did not report a total
    pub total_results: Option<u64>,
    pub keys: Vec<String>,
}
