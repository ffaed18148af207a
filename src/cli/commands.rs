//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// A CLI for probing JSON HTTP endpoints
#[derive(Parser, Debug)]
#[command(name = "json-probe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Scheme and host, e.g. https://example.com
    #[arg(long, global = true, env = "HOST")]
    pub host: Option<String>,

    /// Base path under the host, e.g. wp-json/wp/v2
    #[arg(long, global = true, env = "URL")]
    pub url: Option<String>,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, global = true, env = "PROBE_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect an endpoint: pages, total results and keys
    Inspect {
        /// Endpoint under the base path (empty probes the base path itself)
        #[arg(env = "ENDPOINT", default_value = "")]
        endpoint: String,

        /// Print one key per line
        #[arg(long)]
        keys: bool,
    },

    /// List the URL of every page of an endpoint
    Pages {
        /// Endpoint under the base path (empty probes the base path itself)
        #[arg(env = "ENDPOINT", default_value = "")]
        endpoint: String,

        /// Maximum number of page URLs to print
        #[arg(long)]
        debug: Option<u64>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Text,
    /// JSON output
    Json,
}
