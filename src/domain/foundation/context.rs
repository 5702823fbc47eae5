//! Context snapshots and dotted-path resolution.
//!
//! A snapshot is the read-only view of conversation state handed to the
//! validation engine. Its root is always an object, so "which fields exist"
//! is answered by walking a typed tree rather than poking at an untyped bag.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::ContextError;

/// Resolves a dotted key path against a nested JSON value.
///
/// Objects are walked by key, arrays by decimal index. Returns `None` for an
/// empty path, an empty segment, a missing key, an out-of-range index, or an
/// attempt to descend into a scalar.
///
/// ```
/// use dialog_gate::domain::foundation::resolve_path;
/// use serde_json::json;
///
/// let root = json!({"cart": {"items": [{"name": "samosa"}]}});
/// assert_eq!(resolve_path(&root, "cart.items.0.name"), Some(&json!("samosa")));
/// assert_eq!(resolve_path(&root, "cart.total"), None);
/// ```
pub fn resolve_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }

    let mut current = root;
    for segment in path.split('.') {
        if segment.is_empty() {
            return None;
        }
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Read-only snapshot of conversation context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct ContextSnapshot {
    root: Value,
}

impl ContextSnapshot {
    /// Creates an empty snapshot.
    pub fn empty() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Creates a snapshot from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, ContextError> {
        if value.is_object() {
            Ok(Self { root: value })
        } else {
            Err(ContextError::not_an_object(&value))
        }
    }

    /// Resolves a dotted path inside the snapshot.
    pub fn get(&self, path: &str) -> Option<&Value> {
        resolve_path(&self.root, path)
    }

    /// Resolves a dotted path and returns it only if it is a string.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// Returns the root object.
    pub fn as_value(&self) -> &Value {
        &self.root
    }
}

impl Default for ContextSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<Value> for ContextSnapshot {
    type Error = ContextError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<ContextSnapshot> for Value {
    fn from(snapshot: ContextSnapshot) -> Self {
        snapshot.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    mod path_resolution {
        use super::*;

        #[test]
        fn resolves_nested_keys() {
            let root = json!({"nlu": {"intent": "order_food"}});
            assert_eq!(resolve_path(&root, "nlu.intent"), Some(&json!("order_food")));
        }

        #[test]
        fn resolves_array_indices() {
            let root = json!({"stores": ["Bandra", "Andheri"]});
            assert_eq!(resolve_path(&root, "stores.1"), Some(&json!("Andheri")));
        }

        #[test]
        fn missing_key_is_absent() {
            let root = json!({"nlu": {}});
            assert_eq!(resolve_path(&root, "nlu.intent"), None);
        }

        #[test]
        fn out_of_range_index_is_absent() {
            let root = json!({"stores": ["Bandra"]});
            assert_eq!(resolve_path(&root, "stores.3"), None);
        }

        #[test]
        fn non_numeric_index_is_absent() {
            let root = json!({"stores": ["Bandra"]});
            assert_eq!(resolve_path(&root, "stores.first"), None);
        }

        #[test]
        fn descending_into_scalar_is_absent() {
            let root = json!({"nlu": "order_food"});
            assert_eq!(resolve_path(&root, "nlu.intent"), None);
        }

        #[test]
        fn empty_path_and_empty_segments_are_absent() {
            let root = json!({"a": {"b": 1}});
            assert_eq!(resolve_path(&root, ""), None);
            assert_eq!(resolve_path(&root, "a..b"), None);
            assert_eq!(resolve_path(&root, "a."), None);
        }

        #[test]
        fn resolves_null_leaf_as_present() {
            let root = json!({"a": null});
            assert_eq!(resolve_path(&root, "a"), Some(&Value::Null));
        }
    }

    mod snapshot {
        use super::*;

        #[test]
        fn rejects_non_object_roots() {
            assert!(ContextSnapshot::from_value(json!("text")).is_err());
            assert!(ContextSnapshot::from_value(json!([1])).is_err());
        }

        #[test]
        fn get_str_ignores_non_strings() {
            let ctx = ContextSnapshot::from_value(json!({"nlu": {"intent": 7}})).unwrap();
            assert_eq!(ctx.get_str("nlu.intent"), None);
            assert_eq!(ctx.get("nlu.intent"), Some(&json!(7)));
        }

        #[test]
        fn empty_snapshot_resolves_nothing() {
            assert_eq!(ContextSnapshot::empty().get("nlu.intent"), None);
        }

        #[test]
        fn deserializes_only_from_objects() {
            let ok: Result<ContextSnapshot, _> = serde_json::from_str(r#"{"nlu": {"intent": "greet"}}"#);
            assert_eq!(ok.unwrap().get_str("nlu.intent"), Some("greet"));

            let bad: Result<ContextSnapshot, _> = serde_json::from_str("[]");
            assert!(bad.is_err());
        }
    }
}
