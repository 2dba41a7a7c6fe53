//! # erp-query
//!
//! The query specification compiler for the ERP REST API.
//!
//! This crate turns a structured, typed description of "what rows to fetch,
//! how to filter them, and how to sort them" into the wire-format query
//! string the API consumes: an OData-like `q` filter expression plus the
//! `limit`/`offset`/`sort`/`fields`/`count`/`expandLevel` parameters.
//!
//! ## Structure
//!
//! - `value` - Field value types and their wire encoding
//! - `fields` - Per-entity field tables (camelCase key to wire name)
//! - `criteria` - Filter conditions and the search criteria compiler
//! - `sort` - Sort specifications and their single-parameter encoding
//! - `options` - Query options and the query string encoder
//!
//! ## Example
//!
//! ```
//! use erp_query::{FieldTable, QueryOptions, SearchCriteria, SortSpec};
//!
//! static FIELDS: FieldTable = FieldTable::new(&[
//!     ("code", "CODE"),
//!     ("status", "STATUS"),
//! ]);
//!
//! let criteria = SearchCriteria::new()
//!     .field("code", "test")
//!     .field_in("status", [1, 2, 3]);
//!
//! let query = QueryOptions::new()
//!     .limit(10)
//!     .sort(SortSpec::by("CODE"))
//!     .with_search(&criteria, &FIELDS)
//!     .to_query_string()
//!     .unwrap();
//!
//! assert!(query.starts_with("limit=10&sort=CODE&q="));
//! ```
//!
//! Every compilation is pure: no I/O, no shared state, and byte-identical
//! output for identical input.

pub mod criteria;
pub mod fields;
pub mod options;
pub mod sort;
pub mod value;

// Re-exports for convenience
pub use criteria::{conjoin, prefix_search, Condition, CriteriaValue, SearchCriteria};
pub use fields::FieldTable;
pub use options::QueryOptions;
pub use sort::{SortDirection, SortSpec};
pub use value::FieldValue;
