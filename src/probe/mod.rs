//! Probe module
//!
//! A probe performs one GET against a JSON endpoint and answers shape and
//! pagination questions from that single response.
//!
//! # Lifecycle
//!
//! 1. Describe the resource with a [`ProbeTarget`] (host, base path, endpoint)
//! 2. Fetch it with [`JsonResponseProbe::fetch`]; the probe only exists if the
//!    request succeeded with a 2xx status
//! 3. Read the derived views (`keys`, `total_pages`, ...); none of them
//!    touch the network again

mod keys;
mod report;
mod response_probe;
mod snapshot;
mod target;

pub use keys::top_level_keys;
pub use report::ProbeReport;
pub use response_probe::JsonResponseProbe;
pub use snapshot::ResponseSnapshot;
pub use target::ProbeTarget;
