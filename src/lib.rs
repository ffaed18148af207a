//! # json-probe
//!
//! Probe a paginated JSON HTTP endpoint and report its shape: total pages,
//! total result count and the keys of the returned objects. Pagination is
//! read from the `X-WP-TotalPages` and `X-WP-Total` headers used by
//! WordPress-style REST APIs.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use json_probe::{JsonResponseProbe, ProbeTarget, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let target = ProbeTarget::new("https://example.com", "wp-json/wp/v2", "posts")?;
//!
//!     // One GET; fails on transport errors and non-2xx statuses
//!     let probe = JsonResponseProbe::fetch(target).await?;
//!
//!     println!("{} pages", probe.total_pages()?);
//!     println!("{:?} results", probe.total_results()?);
//!     println!("keys: {:?}", probe.keys()?);
//!     for url in probe.generate_paged_endpoints(Some(5))? {
//!         println!("{url}");
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Single-shot HTTP client
pub mod http;

/// Pagination headers and page URLs
pub mod pagination;

/// The JSON response probe
pub mod probe;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use probe::{JsonResponseProbe, ProbeReport, ProbeTarget, ResponseSnapshot};
