//! Error types for query specification compilation.
//!
//! All compiler failures are local, synchronous, pure-function failures:
//! a malformed specification is a caller bug and surfaces immediately.
//! Transport failures live in the client crate and pass through unmodified.

use thiserror::Error;

/// Errors raised while compiling a query specification into its wire form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// An operator keyword outside the recognized set was supplied for a field.
    #[error("Unsupported operator '{operator}' for field '{field}'")]
    UnsupportedOperator { field: String, operator: String },

    /// A sort specification that cannot produce a well-formed `sort=` value.
    #[error("Invalid sort spec: {reason}")]
    InvalidSortSpec { reason: String },

    /// A criteria value of a type that has no wire encoding.
    #[error("Invalid value for field '{field}': {reason}")]
    InvalidFieldValue { field: String, reason: String },
}

impl QueryError {
    pub fn unsupported_operator(field: impl Into<String>, operator: impl Into<String>) -> Self {
        Self::UnsupportedOperator {
            field: field.into(),
            operator: operator.into(),
        }
    }

    pub fn invalid_sort_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSortSpec {
            reason: reason.into(),
        }
    }

    pub fn invalid_field_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFieldValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
