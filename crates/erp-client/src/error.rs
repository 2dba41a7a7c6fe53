//! Client error type.
//!
//! Query compilation errors surface synchronously before any request is
//! made; transport errors pass through unmodified to the caller.

use erp_core::{ConfigError, QueryError};
use thiserror::Error;

/// Errors returned by the ERP client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A malformed query specification; raised before the request is sent.
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Connection-level failure (DNS, TLS, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;
