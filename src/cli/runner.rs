//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::probe::{JsonResponseProbe, ProbeTarget};
use std::io::Write;
use std::time::Duration;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, printing to stdout
    pub async fn run(&self) -> Result<()> {
        let mut out = std::io::stdout();
        self.run_to(&mut out).await
    }

    /// Run the CLI command, printing to `out`
    pub async fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.cli.command {
            Commands::Inspect { endpoint, keys } => self.inspect(endpoint, *keys, out).await,
            Commands::Pages { endpoint, debug } => self.pages(endpoint, *debug, out).await,
        }
    }

    /// Fetch one endpoint using the global options
    async fn probe(&self, endpoint: &str) -> Result<JsonResponseProbe> {
        let host = self
            .cli
            .host
            .as_deref()
            .ok_or_else(|| Error::config("--host (or HOST) is required"))?;
        let base_path = self
            .cli
            .url
            .as_deref()
            .ok_or_else(|| Error::config("--url (or URL) is required"))?;

        let target = ProbeTarget::new(host, base_path, endpoint)?;
        let client = HttpClient::with_config(self.build_http_config())?;

        info!("Probing {}", target.full_url());
        JsonResponseProbe::fetch_with(&client, target).await
    }

    fn build_http_config(&self) -> HttpClientConfig {
        HttpClientConfig::builder()
            .maybe_timeout(self.cli.timeout.map(Duration::from_secs))
            .build()
    }

    async fn inspect<W: Write>(
        &self,
        endpoint: &str,
        one_per_line: bool,
        out: &mut W,
    ) -> Result<()> {
        let probe = self.probe(endpoint).await?;

        if self.cli.format == OutputFormat::Json {
            let report = probe.report()?;
            writeln!(out, "{}", to_json(&report)?)?;
            return Ok(());
        }

        writeln!(out, "Endpoint: {}", probe.full_url())?;
        writeln!(out, "Total pages: {}", probe.total_pages()?)?;
        match probe.total_results()? {
            Some(total) => writeln!(out, "Total results: {total}")?,
            None => writeln!(out, "Total results: None")?,
        }

        let keys = probe.keys()?;
        if one_per_line {
            for key in &keys {
                writeln!(out, "Key: {key}")?;
            }
        } else {
            let quoted: Vec<String> = keys.iter().map(|k| format!("'{k}'")).collect();
            writeln!(out, "Keys: {}", quoted.join(", "))?;
        }

        Ok(())
    }

    async fn pages<W: Write>(
        &self,
        endpoint: &str,
        debug_cap: Option<u64>,
        out: &mut W,
    ) -> Result<()> {
        let probe = self.probe(endpoint).await?;

        if self.cli.format == OutputFormat::Json {
            let urls = probe.generate_paged_endpoints(debug_cap)?;
            writeln!(out, "{}", to_json(&urls)?)?;
            return Ok(());
        }

        for url in probe.iter_paged_endpoints(debug_cap)? {
            writeln!(out, "{url}")?;
        }
        Ok(())
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
