//! Client configuration.
//!
//! Loaded from environment variables, mirroring the deployment convention
//! of the upstream API: a base URL and a static API key.

use serde::{Deserialize, Serialize};

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Configuration for the ERP HTTP client.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base URL of the ERP API, e.g. `https://erp.example.com/api`.
    pub base_url: String,
    /// Static API key sent with every request.
    pub api_key: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not set: {0}")]
    MissingEnvVar(&'static str),
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

impl ClientConfig {
    /// Create a configuration with the default timeout.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `ERP_API_URL` and `ERP_API_KEY` are required;
    /// `ERP_API_TIMEOUT_SECONDS` is optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            std::env::var("ERP_API_URL").map_err(|_| ConfigError::MissingEnvVar("ERP_API_URL"))?;
        let api_key =
            std::env::var("ERP_API_KEY").map_err(|_| ConfigError::MissingEnvVar("ERP_API_KEY"))?;

        let mut config = Self::new(base_url, api_key);

        if let Ok(timeout) = std::env::var("ERP_API_TIMEOUT_SECONDS") {
            config.timeout_seconds =
                timeout
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: "ERP_API_TIMEOUT_SECONDS",
                        message: format!("expected an integer, got '{}'", timeout),
                    })?;
        }

        Ok(config)
    }

    /// Override the timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}
