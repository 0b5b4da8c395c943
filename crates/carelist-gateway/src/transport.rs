//! Transport seam for the remote patient API.

use async_trait::async_trait;
use serde_json::Value;

/// HTTP/network-level failures, surfaced as general errors and never
/// retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Non-success HTTP status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// Network-level failure.
    #[error("request failed: {0}")]
    Request(String),
    /// Response body was not the expected JSON array.
    #[error("invalid response body: {0}")]
    Body(String),
}

/// Remote read operations, abstracted so tests can substitute a stub.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch the raw patient collection (`GET {base_url}/users`).
    async fn fetch_users(&self) -> Result<Vec<Value>, TransportError>;
}

/// reqwest-backed transport against the real API.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_users(&self) -> Result<Vec<Value>, TransportError> {
        let url = format!("{}/users", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))
    }
}
