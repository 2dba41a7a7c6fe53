//! Sort specifications.
//!
//! The API takes a single `sort` parameter: a comma-joined field list,
//! ascending by default. Four spec shapes are accepted and normalized
//! here into that one value.

use erp_core::QueryError;

/// The on-wire token appended for descending order.
///
/// Single policy point for the server's descending convention: the token
/// is joined as one more comma segment after the field list.
const DESC_TOKEN: &str = "desc";

/// Sort direction, ascending by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A sort specification in one of the four accepted shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortSpec {
    /// Single field, ascending implied
    By(String),
    /// Single field with explicit direction
    ByDir(String, SortDirection),
    /// Multiple fields, ascending implied
    Fields(Vec<String>),
    /// Multiple fields sharing one direction
    FieldsDir(Vec<String>, SortDirection),
}

impl SortSpec {
    /// Sort by a single field, ascending.
    pub fn by(field: impl Into<String>) -> Self {
        Self::By(field.into())
    }

    /// Sort by a single field, descending.
    pub fn by_desc(field: impl Into<String>) -> Self {
        Self::ByDir(field.into(), SortDirection::Desc)
    }

    /// Sort by multiple fields, ascending.
    pub fn fields<S: Into<String>>(fields: impl IntoIterator<Item = S>) -> Self {
        Self::Fields(fields.into_iter().map(Into::into).collect())
    }

    /// Sort by multiple fields with a shared direction.
    pub fn fields_dir<S: Into<String>>(
        fields: impl IntoIterator<Item = S>,
        direction: SortDirection,
    ) -> Self {
        Self::FieldsDir(fields.into_iter().map(Into::into).collect(), direction)
    }

    /// Normalize into the `sort` parameter value.
    ///
    /// An empty field list in either multi-field shape fails with
    /// [`QueryError::InvalidSortSpec`] rather than emitting a malformed
    /// value.
    pub fn encode(&self) -> Result<String, QueryError> {
        match self {
            Self::By(field) => Ok(field.clone()),
            Self::ByDir(field, direction) => {
                Ok(Self::join(std::slice::from_ref(field), *direction))
            }
            Self::Fields(fields) => {
                Self::check_non_empty(fields)?;
                Ok(Self::join(fields, SortDirection::Asc))
            }
            Self::FieldsDir(fields, direction) => {
                Self::check_non_empty(fields)?;
                Ok(Self::join(fields, *direction))
            }
        }
    }

    fn check_non_empty(fields: &[String]) -> Result<(), QueryError> {
        if fields.is_empty() {
            Err(QueryError::invalid_sort_spec("empty field list"))
        } else {
            Ok(())
        }
    }

    fn join(fields: &[String], direction: SortDirection) -> String {
        let list = fields.join(",");
        match direction {
            SortDirection::Asc => list,
            SortDirection::Desc => format!("{},{}", list, DESC_TOKEN),
        }
    }
}
