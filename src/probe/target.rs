//! Probe target: the parts that make up the probed URL

use crate::error::{Error, Result};
use serde::Serialize;

/// Host, base path and endpoint of a probed resource
///
/// The full URL is a plain concatenation. No encoding or slash
/// normalization is applied; duplicate slashes are kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeTarget {
    host: String,
    base_path: String,
    endpoint: String,
}

impl ProbeTarget {
    /// Create a target, rejecting an empty host or base path
    pub fn new(
        host: impl Into<String>,
        base_path: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self> {
        let host = host.into();
        let base_path = base_path.into();

        if host.is_empty() {
            return Err(Error::config("host must not be empty"));
        }
        if base_path.is_empty() {
            return Err(Error::config("base path must not be empty"));
        }

        Ok(Self {
            host,
            base_path,
            endpoint: endpoint.into(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `host/base_path/endpoint`, or `host/base_path` when the endpoint is empty
    pub fn full_url(&self) -> String {
        if self.endpoint.is_empty() {
            format!("{}/{}", self.host, self.base_path)
        } else {
            format!("{}/{}/{}", self.host, self.base_path, self.endpoint)
        }
    }
}
