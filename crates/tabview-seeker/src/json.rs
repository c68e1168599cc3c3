//! [`Record`] support for dynamic JSON records.
//!
//! Admin screens often hold rows whose shape is only known at runtime.
//! `serde_json` objects act as records directly: keys resolve to top-level
//! members, and dotted keys (`"owner.name"`) walk nested objects.

use serde_json::{Map, Value as Json};

use crate::traits::Record;
use crate::value::{Number, Value};

/// Resolves `path` against a JSON value.
///
/// An exact member match wins over dot traversal, so keys that contain dots
/// still resolve. Returns `None` for missing members and for non-objects.
///
/// ```
/// use serde_json::json;
/// use tabview_seeker::lookup_path;
///
/// let row = json!({"owner": {"name": "Ada"}, "a.b": 1});
/// assert_eq!(lookup_path(&row, "owner.name"), Some(&json!("Ada")));
/// assert_eq!(lookup_path(&row, "a.b"), Some(&json!(1)));
/// assert_eq!(lookup_path(&row, "owner.email"), None);
/// ```
pub fn lookup_path<'a>(value: &'a Json, path: &str) -> Option<&'a Json> {
    match value {
        Json::Object(map) => lookup_in_map(map, path),
        _ => None,
    }
}

fn lookup_in_map<'a>(map: &'a Map<String, Json>, path: &str) -> Option<&'a Json> {
    if let Some(found) = map.get(path) {
        return Some(found);
    }
    let (head, rest) = path.split_once('.')?;
    lookup_path(map.get(head)?, rest)
}

fn to_value(json: &Json) -> Value<'_> {
    match json {
        Json::Null => Value::None,
        Json::Bool(b) => Value::Bool(*b),
        Json::String(s) => Value::String(s),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(Number::I64(i))
            } else if let Some(u) = n.as_u64() {
                Value::Number(Number::U64(u))
            } else {
                n.as_f64()
                    .map(|f| Value::Number(Number::F64(f)))
                    .unwrap_or(Value::None)
            }
        }
        Json::Array(_) | Json::Object(_) => Value::Nested(json),
    }
}

impl Record for Json {
    fn field(&self, key: &str) -> Value<'_> {
        lookup_path(self, key).map(to_value).unwrap_or(Value::None)
    }
}

impl Record for Map<String, Json> {
    fn field(&self, key: &str) -> Value<'_> {
        lookup_in_map(self, key).map(to_value).unwrap_or(Value::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_fields() {
        let row = json!({"id": "a", "v": 3, "big": u64::MAX, "ratio": 0.5, "ok": true, "gone": null});
        assert_eq!(row.field("id"), Value::String("a"));
        assert_eq!(row.field("v"), Value::Number(Number::I64(3)));
        assert_eq!(row.field("big"), Value::Number(Number::U64(u64::MAX)));
        assert_eq!(row.field("ratio"), Value::Number(Number::F64(0.5)));
        assert_eq!(row.field("ok"), Value::Bool(true));
        assert_eq!(row.field("gone"), Value::None);
        assert_eq!(row.field("missing"), Value::None);
    }

    #[test]
    fn nested_fields() {
        let row = json!({"owner": {"name": "Ada", "tags": ["x"]}});
        assert_eq!(row.field("owner.name"), Value::String("Ada"));
        assert!(matches!(row.field("owner"), Value::Nested(_)));
        assert!(matches!(row.field("owner.tags"), Value::Nested(_)));
        assert_eq!(row.field("owner.name.first"), Value::None);
    }

    #[test]
    fn non_object_has_no_fields() {
        assert_eq!(json!([1, 2]).field("0"), Value::None);
        assert_eq!(json!("text").field("id"), Value::None);
    }

    #[test]
    fn map_records() {
        let mut map = Map::new();
        map.insert("name".to_string(), json!("pump"));
        assert_eq!(map.field("name"), Value::String("pump"));
    }
}
