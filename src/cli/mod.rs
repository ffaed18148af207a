//! CLI module
//!
//! Command-line interface for probing endpoints.
//!
//! # Commands
//!
//! - `inspect` - Fetch an endpoint and print its pages, total and keys
//! - `pages` - Fetch an endpoint and print one URL per page

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
