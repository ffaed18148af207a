//! Captured HTTP response

use crate::error::Result;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode};

/// Status, headers and body of one response, fully read into memory
#[derive(Debug, Clone)]
pub struct ResponseSnapshot {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl ResponseSnapshot {
    /// Build a snapshot from its parts
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Read a response to the end
    pub async fn capture(response: Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        Ok(Self::new(status, headers, body))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}
