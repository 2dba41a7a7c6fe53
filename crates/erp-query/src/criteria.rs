//! Search criteria and the filter expression compiler.
//!
//! A criteria object maps fields to either a bare value, a list of
//! alternatives, or a set of operator conditions. Compilation turns it
//! into a single OData-style boolean expression for the `q` parameter:
//! fields are compiled independently and joined with `" and "` in
//! declaration order.

use erp_core::QueryError;

use crate::fields::FieldTable;
use crate::value::FieldValue;

/// A single operator condition on a field.
///
/// One variant per recognized operator keyword, so dispatch is an
/// exhaustive match rather than string inspection. Unknown keywords are
/// rejected at construction by [`Condition::from_keyword`].
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `eq` - equality
    Eq(FieldValue),
    /// `ne` - inequality
    Ne(FieldValue),
    /// `gt` - strictly greater
    Gt(FieldValue),
    /// `gte` - greater or equal
    Gte(FieldValue),
    /// `lt` - strictly less
    Lt(FieldValue),
    /// `lte` - less or equal
    Lte(FieldValue),
    /// `like` - prefix match; the `*` wildcard suffix is appended by the
    /// compiler, not supplied by the caller
    Like(String),
    /// `in` - membership in a set of alternatives
    In(Vec<FieldValue>),
}

impl Condition {
    /// The wire keyword of this operator.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Eq(_) => "eq",
            Self::Ne(_) => "ne",
            Self::Gt(_) => "gt",
            Self::Gte(_) => "gte",
            Self::Lt(_) => "lt",
            Self::Lte(_) => "lte",
            Self::Like(_) => "like",
            Self::In(_) => "in",
        }
    }

    /// Build a condition from a dynamic operator keyword and JSON value.
    ///
    /// This is the entry point for the operator-object criteria shape
    /// (`{"price": {"gte": 100, "lte": 500}}`). An unrecognized keyword
    /// fails with [`QueryError::UnsupportedOperator`].
    pub fn from_keyword(
        field: &str,
        keyword: &str,
        value: &serde_json::Value,
    ) -> Result<Self, QueryError> {
        match keyword {
            "eq" => Ok(Self::Eq(FieldValue::from_json(field, value)?)),
            "ne" => Ok(Self::Ne(FieldValue::from_json(field, value)?)),
            "gt" => Ok(Self::Gt(FieldValue::from_json(field, value)?)),
            "gte" => Ok(Self::Gte(FieldValue::from_json(field, value)?)),
            "lt" => Ok(Self::Lt(FieldValue::from_json(field, value)?)),
            "lte" => Ok(Self::Lte(FieldValue::from_json(field, value)?)),
            "like" => match value {
                serde_json::Value::String(s) => Ok(Self::Like(s.clone())),
                _ => Err(QueryError::invalid_field_value(
                    field,
                    "like expects a text value",
                )),
            },
            "in" => match value {
                serde_json::Value::Array(items) => {
                    let values = items
                        .iter()
                        .map(|item| FieldValue::from_json(field, item))
                        .collect::<Result<Vec<_>, _>>()?;
                    Ok(Self::In(values))
                }
                _ => Err(QueryError::invalid_field_value(
                    field,
                    "in expects an array of values",
                )),
            },
            other => Err(QueryError::unsupported_operator(field, other)),
        }
    }

    /// Render the clause for a resolved wire field name.
    ///
    /// Returns `None` for conditions that contribute nothing, such as an
    /// `in` over an empty list.
    fn render(&self, wire: &str) -> Option<String> {
        match self {
            Self::Eq(v) => Some(format!("{} eq {}", wire, v.encode())),
            Self::Ne(v) => Some(format!("{} ne {}", wire, v.encode())),
            Self::Gt(v) => Some(format!("{} gt {}", wire, v.encode())),
            Self::Gte(v) => Some(format!("{} gte {}", wire, v.encode())),
            Self::Lt(v) => Some(format!("{} lt {}", wire, v.encode())),
            Self::Lte(v) => Some(format!("{} lte {}", wire, v.encode())),
            Self::Like(text) => Some(format!("{} like '{}*'", wire, text)),
            Self::In(values) if values.is_empty() => None,
            Self::In(values) => Some(or_group(wire, values)),
        }
    }
}

/// OR-group over equality clauses, parenthesized so the group composes
/// safely with the outer `and` join.
fn or_group(wire: &str, values: &[FieldValue]) -> String {
    let clauses: Vec<String> = values
        .iter()
        .map(|v| format!("{} eq {}", wire, v.encode()))
        .collect();
    format!("({})", clauses.join(" or "))
}

/// The three accepted shapes for a field's criteria entry.
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaValue {
    /// A bare value, compiled as `FIELD eq value`
    Value(FieldValue),
    /// A list of alternatives, compiled as a parenthesized OR-group
    OneOf(Vec<FieldValue>),
    /// One or more operator conditions, AND-joined
    Conditions(Vec<Condition>),
}

/// An ordered set of per-field filter criteria.
///
/// Declaration order is preserved: compiled output joins the fields'
/// clauses with `" and "` in the order they were added, so the same
/// criteria always compile to the same string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    entries: Vec<(String, CriteriaValue)>,
}

impl SearchCriteria {
    /// Create empty criteria.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter a field by a bare value (`FIELD eq value`).
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.entries
            .push((key.into(), CriteriaValue::Value(value.into())));
        self
    }

    /// Filter a field by a set of alternatives (OR-group).
    pub fn field_in<V: Into<FieldValue>>(
        mut self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.entries.push((key.into(), CriteriaValue::OneOf(values)));
        self
    }

    /// Filter a field by one or more operator conditions (AND-joined).
    pub fn field_where(
        mut self,
        key: impl Into<String>,
        conditions: impl IntoIterator<Item = Condition>,
    ) -> Self {
        let conditions = conditions.into_iter().collect();
        self.entries
            .push((key.into(), CriteriaValue::Conditions(conditions)));
        self
    }

    /// Number of criteria entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build criteria from the dynamic JSON shape the API documents:
    /// an object mapping field keys to a scalar, an array of scalars, or
    /// an operator object (`{"gte": 100, "lte": 500}`).
    ///
    /// `null` entries are treated as absent, matching callers that leave
    /// optional criteria unset. Anything else unencodable fails with
    /// [`QueryError::InvalidFieldValue`]; unknown operator keywords fail
    /// with [`QueryError::UnsupportedOperator`].
    pub fn from_json(criteria: &serde_json::Value) -> Result<Self, QueryError> {
        let object = match criteria {
            serde_json::Value::Object(map) => map,
            _ => {
                return Err(QueryError::invalid_field_value(
                    "<criteria>",
                    "criteria must be an object",
                ))
            }
        };

        let mut result = Self::new();
        for (key, value) in object {
            match value {
                serde_json::Value::Null => continue,
                serde_json::Value::Array(items) => {
                    let values = items
                        .iter()
                        .map(|item| FieldValue::from_json(key, item))
                        .collect::<Result<Vec<_>, _>>()?;
                    result
                        .entries
                        .push((key.clone(), CriteriaValue::OneOf(values)));
                }
                serde_json::Value::Object(ops) => {
                    let conditions = ops
                        .iter()
                        .map(|(keyword, v)| Condition::from_keyword(key, keyword, v))
                        .collect::<Result<Vec<_>, _>>()?;
                    result
                        .entries
                        .push((key.clone(), CriteriaValue::Conditions(conditions)));
                }
                scalar => {
                    let value = FieldValue::from_json(key, scalar)?;
                    result.entries.push((key.clone(), CriteriaValue::Value(value)));
                }
            }
        }
        Ok(result)
    }

    /// Compile the criteria into a single filter expression.
    ///
    /// Returns `None` for empty criteria so callers omit the `q`
    /// parameter entirely instead of emitting `q=`. Compilation of typed
    /// criteria cannot fail: invalid operators and values are rejected
    /// when the criteria are constructed.
    pub fn compile(&self, table: &FieldTable) -> Option<String> {
        let mut clauses: Vec<String> = Vec::with_capacity(self.entries.len());

        for (key, value) in &self.entries {
            let wire = table.wire_name(key);
            let clause = match value {
                CriteriaValue::Value(v) => Some(format!("{} eq {}", wire, v.encode())),
                CriteriaValue::OneOf(values) if values.is_empty() => None,
                CriteriaValue::OneOf(values) => Some(or_group(wire, values)),
                CriteriaValue::Conditions(conditions) => {
                    let parts: Vec<String> = conditions
                        .iter()
                        .filter_map(|c| c.render(wire))
                        .collect();
                    if parts.is_empty() {
                        None
                    } else {
                        Some(parts.join(" and "))
                    }
                }
            };
            if let Some(clause) = clause {
                clauses.push(clause);
            }
        }

        if clauses.is_empty() {
            None
        } else {
            Some(clauses.join(" and "))
        }
    }
}

/// Compile a prefix search on a single field: `FIELD like 'text*'`.
///
/// This is the narrow convenience behind the `search_by_*` entry points,
/// distinct from generic criteria compilation where a bare value means
/// equality.
pub fn prefix_search(key: &str, text: &str, table: &FieldTable) -> String {
    format!("{} like '{}*'", table.wire_name(key), text)
}

/// Join pre-built clause strings with `" and "`, preserving clause text
/// verbatim.
pub fn conjoin<S: AsRef<str>>(clauses: &[S]) -> String {
    clauses
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(" and ")
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: FieldTable = FieldTable::new(&[
        ("code", "CODE"),
        ("status", "STATUS"),
        ("price", "PRICE"),
        ("name", "NAME"),
        ("dateCreated", "DATE_CREATED"),
    ]);

    #[test]
    fn test_bare_values_join_in_declaration_order() {
        let criteria = SearchCriteria::new()
            .field("code", "ABC")
            .field("status", 1);
        assert_eq!(
            criteria.compile(&TABLE),
            Some("CODE eq 'ABC' and STATUS eq 1".to_string())
        );
    }

    #[test]
    fn test_empty_criteria_compile_to_none() {
        assert_eq!(SearchCriteria::new().compile(&TABLE), None);
    }

    #[test]
    fn test_array_criteria_compile_to_or_group() {
        let criteria = SearchCriteria::new().field_in("status", [1, 2, 3]);
        assert_eq!(
            criteria.compile(&TABLE),
            Some("(STATUS eq 1 or STATUS eq 2 or STATUS eq 3)".to_string())
        );
    }

    #[test]
    fn test_operator_conditions_and_join_per_field() {
        let criteria = SearchCriteria::new().field_where(
            "price",
            [Condition::Gte(100.into()), Condition::Lte(500.into())],
        );
        assert_eq!(
            criteria.compile(&TABLE),
            Some("PRICE gte 100 and PRICE lte 500".to_string())
        );
    }

    #[test]
    fn test_like_appends_wildcard() {
        let criteria =
            SearchCriteria::new().field_where("name", [Condition::Like("pump".to_string())]);
        assert_eq!(
            criteria.compile(&TABLE),
            Some("NAME like 'pump*'".to_string())
        );
    }

    #[test]
    fn test_in_condition_matches_array_form() {
        let criteria = SearchCriteria::new()
            .field_where("status", [Condition::In(vec![1.into(), 2.into()])]);
        assert_eq!(
            criteria.compile(&TABLE),
            Some("(STATUS eq 1 or STATUS eq 2)".to_string())
        );
    }

    #[test]
    fn test_mixed_shapes_compile_independently() {
        let criteria = SearchCriteria::new()
            .field("code", "ABC")
            .field_in("status", [1, 2])
            .field_where("price", [Condition::Gt(10.into())]);
        assert_eq!(
            criteria.compile(&TABLE),
            Some("CODE eq 'ABC' and (STATUS eq 1 or STATUS eq 2) and PRICE gt 10".to_string())
        );
    }

    #[test]
    fn test_empty_or_group_contributes_nothing() {
        let criteria = SearchCriteria::new()
            .field_in("status", Vec::<i64>::new())
            .field("code", "ABC");
        assert_eq!(criteria.compile(&TABLE), Some("CODE eq 'ABC'".to_string()));

        let only_empty = SearchCriteria::new().field_in("status", Vec::<i64>::new());
        assert_eq!(only_empty.compile(&TABLE), None);
    }

    #[test]
    fn test_unknown_keys_pass_through_unchanged() {
        let criteria = SearchCriteria::new().field("CUSTOM_1", "x");
        assert_eq!(
            criteria.compile(&TABLE),
            Some("CUSTOM_1 eq 'x'".to_string())
        );
    }

    #[test]
    fn test_compilation_is_idempotent() {
        let criteria = SearchCriteria::new()
            .field("code", "ABC")
            .field_in("status", [1, 2, 3]);
        assert_eq!(criteria.compile(&TABLE), criteria.compile(&TABLE));
    }

    #[test]
    fn test_from_json_preserves_declaration_order() {
        let criteria = SearchCriteria::from_json(&serde_json::json!({
            "code": "ABC",
            "status": [1, 2],
            "price": {"gte": 100, "lte": 500}
        }))
        .unwrap();
        assert_eq!(
            criteria.compile(&TABLE),
            Some(
                "CODE eq 'ABC' and (STATUS eq 1 or STATUS eq 2) \
                 and PRICE gte 100 and PRICE lte 500"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_from_json_skips_null_entries() {
        let criteria = SearchCriteria::from_json(&serde_json::json!({
            "code": null,
            "status": 1
        }))
        .unwrap();
        assert_eq!(criteria.compile(&TABLE), Some("STATUS eq 1".to_string()));

        let all_null = SearchCriteria::from_json(&serde_json::json!({"code": null})).unwrap();
        assert_eq!(all_null.compile(&TABLE), None);
    }

    #[test]
    fn test_from_json_rejects_unknown_operator() {
        let err = SearchCriteria::from_json(&serde_json::json!({
            "price": {"between": [1, 2]}
        }))
        .unwrap_err();
        assert_eq!(
            err,
            QueryError::unsupported_operator("price", "between")
        );
    }

    #[test]
    fn test_from_json_rejects_unencodable_values() {
        let err = SearchCriteria::from_json(&serde_json::json!({
            "status": [[1, 2]]
        }))
        .unwrap_err();
        assert!(matches!(err, QueryError::InvalidFieldValue { .. }));
    }

    #[test]
    fn test_prefix_search() {
        assert_eq!(prefix_search("code", "test", &TABLE), "CODE like 'test*'");
    }

    #[test]
    fn test_conjoin_preserves_clause_text() {
        assert_eq!(
            conjoin(&["CODE eq 'ABC'", "STATUS eq 1"]),
            "CODE eq 'ABC' and STATUS eq 1"
        );
        assert_eq!(conjoin(&["CODE eq 'ABC'"]), "CODE eq 'ABC'");
        assert_eq!(conjoin::<&str>(&[]), "");
    }
}
