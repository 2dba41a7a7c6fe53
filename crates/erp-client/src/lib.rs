//! # erp-client
//!
//! HTTP client and per-entity wrappers for the ERP REST API.
//!
//! Generated client methods are thin: they interpolate a path, ask
//! `erp-query` to encode the query string, and delegate to the shared
//! [`Transport`]. All query semantics (filter compilation, sort encoding,
//! field-name mapping) live in `erp-query`; all network concerns live in
//! [`transport::HttpTransport`].
//!
//! ## Example
//!
//! ```no_run
//! use erp_client::ErpClient;
//! use erp_query::{QueryOptions, SearchCriteria, SortSpec};
//!
//! # async fn run() -> erp_client::Result<()> {
//! let client = ErpClient::from_env()?;
//!
//! // Rows with STATUS eq 1, newest first
//! let criteria = SearchCriteria::new().field("status", 1);
//! let options = QueryOptions::new()
//!     .limit(50)
//!     .sort(SortSpec::by_desc("DATE_CREATED"));
//! let rows = client.workstations().search(&criteria, options).await?;
//!
//! // Prefix search on CODE
//! let matches = client.customers().search_by_code("ACME").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod entities;
pub mod error;
pub mod resource;
pub mod transport;

pub use client::ErpClient;
pub use entities::{
    CustomersClient, InvoicesClient, ProductsClient, PurchasedServicesClient, WorkstationsClient,
};
pub use error::{ApiError, Result};
pub use resource::{EntityClient, Resource};
pub use transport::{HttpTransport, Transport};
