//! Gateway configuration.

use std::time::Duration;

/// Environment variable naming the remote API base URL.
pub const BASE_URL_ENV: &str = "CARELIST_API_BASE_URL";

/// Fixed simulated network round-trip applied to write operations.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Remote gateway settings.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the remote API, stored without a trailing slash.
    pub base_url: String,
    /// Delay applied before each simulated write resolves. Not a
    /// retry or timeout knob; a single failure surfaces immediately.
    pub latency: Duration,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            latency: DEFAULT_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Read the base URL from [`BASE_URL_ENV`].
    pub fn from_env() -> Result<Self, ConfigError> {
        std::env::var(BASE_URL_ENV)
            .map(Self::new)
            .map_err(|_| ConfigError::MissingBaseUrl)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {BASE_URL_ENV} is not set")]
    MissingBaseUrl,
}
