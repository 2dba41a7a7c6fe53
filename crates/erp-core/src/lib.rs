//! # erp-core
//!
//! Core types and utilities shared across the ERP RS client crates:
//! - Common error types for query compilation and configuration
//! - Id and HTTP method primitives
//! - Client configuration loaded from the environment

pub mod config;
pub mod error;
pub mod types;

pub use config::{ClientConfig, ConfigError};
pub use error::QueryError;
pub use types::{Id, Method};
