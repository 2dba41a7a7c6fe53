//! Field value types and their wire encoding.
//!
//! The quoting rule of the filter grammar lives here: text and dates are
//! single-quoted in the compiled expression, numbers and booleans are not.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use erp_core::QueryError;

/// A value that can appear on the right-hand side of a filter clause.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text value, single-quoted on the wire
    Text(String),
    /// Integer value, emitted bare
    Int(i64),
    /// Floating-point value, emitted bare
    Float(f64),
    /// Boolean value, emitted bare as `true`/`false`
    Bool(bool),
    /// Calendar date, single-quoted as `YYYY-MM-DD`
    Date(NaiveDate),
    /// Timestamp, single-quoted as RFC 3339 with millisecond precision
    DateTime(DateTime<Utc>),
}

impl FieldValue {
    /// Encode the value for the filter expression, applying the quoting rule.
    pub fn encode(&self) -> String {
        match self {
            Self::Text(s) => format!("'{}'", s),
            Self::Int(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Date(d) => format!("'{}'", d.format("%Y-%m-%d")),
            Self::DateTime(dt) => format!("'{}'", dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }

    /// Convert a dynamic JSON value into a typed field value.
    ///
    /// Only scalars are encodable; `null`, arrays, and objects in value
    /// position are caller bugs and fail with [`QueryError::InvalidFieldValue`].
    pub fn from_json(field: &str, value: &serde_json::Value) -> Result<Self, QueryError> {
        match value {
            serde_json::Value::String(s) => Ok(Self::Text(s.clone())),
            serde_json::Value::Bool(b) => Ok(Self::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Self::Float(f))
                } else {
                    Err(QueryError::invalid_field_value(
                        field,
                        format!("number '{}' is out of range", n),
                    ))
                }
            }
            serde_json::Value::Null => Err(QueryError::invalid_field_value(
                field,
                "null has no wire encoding",
            )),
            serde_json::Value::Array(_) => Err(QueryError::invalid_field_value(
                field,
                "nested array has no wire encoding",
            )),
            serde_json::Value::Object(_) => Err(QueryError::invalid_field_value(
                field,
                "nested object has no wire encoding",
            )),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        Self::Int(n as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_dates_are_quoted() {
        assert_eq!(FieldValue::from("ABC").encode(), "'ABC'");

        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(FieldValue::from(date).encode(), "'2024-03-15'");
    }

    #[test]
    fn test_numbers_and_bools_are_bare() {
        assert_eq!(FieldValue::from(42).encode(), "42");
        assert_eq!(FieldValue::from(2.5).encode(), "2.5");
        assert_eq!(FieldValue::from(true).encode(), "true");
        assert_eq!(FieldValue::from(false).encode(), "false");
    }

    #[test]
    fn test_datetime_encoding() {
        let dt = DateTime::parse_from_rfc3339("2024-03-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            FieldValue::from(dt).encode(),
            "'2024-03-15T10:30:00.000Z'"
        );
    }

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(
            FieldValue::from_json("code", &serde_json::json!("test")).unwrap(),
            FieldValue::Text("test".to_string())
        );
        assert_eq!(
            FieldValue::from_json("status", &serde_json::json!(7)).unwrap(),
            FieldValue::Int(7)
        );
        assert_eq!(
            FieldValue::from_json("price", &serde_json::json!(9.75)).unwrap(),
            FieldValue::Float(9.75)
        );
        assert_eq!(
            FieldValue::from_json("active", &serde_json::json!(true)).unwrap(),
            FieldValue::Bool(true)
        );
    }

    #[test]
    fn test_from_json_rejects_unencodable() {
        let err = FieldValue::from_json("code", &serde_json::Value::Null).unwrap_err();
        assert!(matches!(err, QueryError::InvalidFieldValue { .. }));

        let err = FieldValue::from_json("code", &serde_json::json!({"nested": 1})).unwrap_err();
        assert!(matches!(
            err,
            QueryError::InvalidFieldValue { ref field, .. } if field == "code"
        ));
    }
}
