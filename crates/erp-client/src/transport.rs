//! HTTP transport.
//!
//! The compiler and the entity clients only ever hand the transport a
//! fully-formed path (query string included) and an optional JSON body;
//! everything network-related lives behind this seam.

use async_trait::async_trait;
use erp_core::{ClientConfig, Method};
use tracing::debug;

use crate::error::{ApiError, Result};

/// The request primitive every generated client method delegates to.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a request and return the decoded JSON body.
    ///
    /// `path` is relative to the API base URL and already carries any
    /// query string. Transport failures are returned as-is; the caller
    /// never retries.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value>;
}

/// Transport over a shared reqwest client.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value> {
        let url = join_url(&self.base_url, path);
        debug!(method = %method, %url, "sending request");

        let mut request = match method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
            Method::Patch => self.http.patch(&url),
            Method::Delete => self.http.delete(&url),
        }
        .header("X-Api-Key", &self.api_key);

        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            // Some write endpoints answer 204 with no body.
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Join the base URL and a request path.
fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://erp.example.com/api", "/customers"),
            "https://erp.example.com/api/customers"
        );
        assert_eq!(
            join_url("https://erp.example.com/api", "customers?limit=1"),
            "https://erp.example.com/api/customers?limit=1"
        );
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = ClientConfig::new("https://erp.example.com/api/", "secret");
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.base_url, "https://erp.example.com/api");
    }
}
