//! Text conversion and matching for values.

use crate::value::Value;

/// Display text of a value, or `None` when the value is missing.
///
/// Strings are returned verbatim, numbers in their shortest form, booleans
/// as `true`/`false`, timestamps as RFC 3339 and nested JSON compactly.
///
/// ```
/// use tabview_seeker::{display_value, Number, Value};
///
/// assert_eq!(display_value(&Value::Number(Number::F64(2.5))).as_deref(), Some("2.5"));
/// assert_eq!(display_value(&Value::None), None);
/// ```
pub fn display_value(value: &Value<'_>) -> Option<String> {
    match value {
        Value::String(s) => Some((*s).to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Timestamp(ts) => Some(ts.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Nested(json) => Some(json.to_string()),
        Value::None => None,
    }
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Number, Timestamp};

    #[test]
    fn display_all_kinds() {
        let nested = serde_json::json!({"a": [1, 2]});
        assert_eq!(display_value(&Value::String("x")).as_deref(), Some("x"));
        assert_eq!(
            display_value(&Value::Number(Number::U64(7))).as_deref(),
            Some("7")
        );
        assert_eq!(
            display_value(&Value::Timestamp(Timestamp(0))).as_deref(),
            Some("1970-01-01T00:00:00Z")
        );
        assert_eq!(display_value(&Value::Bool(false)).as_deref(), Some("false"));
        assert_eq!(
            display_value(&Value::Nested(&nested)).as_deref(),
            Some(r#"{"a":[1,2]}"#)
        );
    }

    #[test]
    fn contains_matching() {
        assert!(contains_ignore_case("Pump Station", "station"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("valve", "pump"));
        assert!(contains_ignore_case("设备管理", "设备"));
    }
}
