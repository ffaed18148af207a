//! HTTP client module
//!
//! Provides the single-shot HTTP client used by the probe.
//!
//! # Features
//!
//! - **One request per call**: no retries, no rate limiting
//! - **Optional timeout**: threaded through to the transport when configured
//! - **Error classification**: network failures vs. non-success statuses

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
