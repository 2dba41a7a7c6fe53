//! Query options and the query string encoder.
//!
//! All keys are optional; absent keys contribute nothing to the wire
//! string. Keys are always emitted in a fixed order so the same options
//! encode to the same string.

use erp_core::QueryError;

use crate::criteria::SearchCriteria;
use crate::fields::FieldTable;
use crate::sort::SortSpec;

/// Options controlling what rows a list/search call returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    /// Maximum number of rows to return
    pub limit: Option<u64>,
    /// Number of rows to skip
    pub offset: Option<u64>,
    /// Wire field names to select, in order, no dedup
    pub fields: Option<Vec<String>>,
    /// Sort specification
    pub sort: Option<SortSpec>,
    /// Pre-compiled filter expression for the `q` parameter
    pub q: Option<String>,
    /// Ask the server to include a total row count
    pub count: Option<bool>,
    /// Relation expansion level
    pub expand_level: Option<String>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn fields<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set a pre-compiled filter expression.
    pub fn q(mut self, expression: impl Into<String>) -> Self {
        self.q = Some(expression.into());
        self
    }

    pub fn count(mut self, count: bool) -> Self {
        self.count = Some(count);
        self
    }

    pub fn expand_level(mut self, level: impl Into<String>) -> Self {
        self.expand_level = Some(level.into());
        self
    }

    /// Compile search criteria through an entity's field table and store
    /// the result as the `q` expression. Empty criteria leave `q` unset
    /// so the parameter is omitted entirely.
    pub fn with_search(mut self, criteria: &SearchCriteria, table: &FieldTable) -> Self {
        self.q = criteria.compile(table);
        self
    }

    /// Encode into a URL query string without a leading `?`.
    ///
    /// Keys are emitted in the fixed order `limit, offset, sort, fields,
    /// q, count, expandLevel`; empty options encode to the empty string.
    /// Callers prepend `?` only when the result is non-empty.
    pub fn to_query_string(&self) -> Result<String, QueryError> {
        let mut pairs: Vec<String> = Vec::new();

        if let Some(limit) = self.limit {
            pairs.push(format!("limit={}", limit));
        }
        if let Some(offset) = self.offset {
            pairs.push(format!("offset={}", offset));
        }
        if let Some(sort) = &self.sort {
            pairs.push(format!("sort={}", sort.encode()?));
        }
        if let Some(fields) = &self.fields {
            pairs.push(format!("fields={}", fields.join(",")));
        }
        if let Some(q) = &self.q {
            pairs.push(format!("q={}", urlencode(q)));
        }
        if let Some(count) = self.count {
            pairs.push(format!("count={}", count));
        }
        if let Some(level) = &self.expand_level {
            pairs.push(format!("expandLevel={}", level));
        }

        Ok(pairs.join("&"))
    }
}

/// Form-urlencode a query parameter value.
fn urlencode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
