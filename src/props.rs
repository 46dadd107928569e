//! Open extension bag carried by every attribute.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// String-keyed mapping for forward-compatible data not part of the core
/// schema.
///
/// Producers attach provenance or experimental fields here without the model
/// needing to anticipate them. An absent key means "not present"; nothing in
/// this crate stores `Value::Null` to mean absence.
///
/// Backed by a `BTreeMap`, so iteration order, equality, and hashing are
/// deterministic regardless of insertion order.
///
/// # Example
///
/// ```rust
/// use notate::ExtendedProperties;
/// use serde_json::json;
///
/// let mut props = ExtendedProperties::new();
/// props.insert("model", json!("udp-1.3"));
/// props.insert("beam-width", json!(4));
///
/// assert_eq!(props.get("model"), Some(&json!("udp-1.3")));
/// assert!(props.get("missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtendedProperties(BTreeMap<String, Value>);

impl ExtendedProperties {
    /// Create an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one entry, replacing any previous value under the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up an entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Check whether a key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the bag holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for ExtendedProperties {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_and_get() {
        let mut props = ExtendedProperties::new();
        assert!(props.is_empty());

        props.insert("source", json!("tokenizer-v2"));
        assert_eq!(props.len(), 1);
        assert!(props.contains_key("source"));
        assert_eq!(props.get("source"), Some(&json!("tokenizer-v2")));
    }

    #[test]
    fn insert_replaces() {
        let mut props = ExtendedProperties::new();
        props.insert("k", json!(1));
        props.insert("k", json!(2));
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("k"), Some(&json!(2)));
    }

    #[test]
    fn insertion_order_does_not_affect_equality() {
        let mut a = ExtendedProperties::new();
        a.insert("x", json!(1));
        a.insert("y", json!([1, 2, 3]));

        let mut b = ExtendedProperties::new();
        b.insert("y", json!([1, 2, 3]));
        b.insert("x", json!(1));

        assert_eq!(a, b);
    }

    #[test]
    fn absent_key_differs_from_null_value() {
        let mut with_null = ExtendedProperties::new();
        with_null.insert("k", Value::Null);

        let without = ExtendedProperties::new();
        assert_ne!(with_null, without);
        assert!(without.get("k").is_none());
        assert_eq!(with_null.get("k"), Some(&Value::Null));
    }

    #[test]
    fn serde_is_transparent() {
        let mut props = ExtendedProperties::new();
        props.insert("a", json!(true));
        let json = serde_json::to_string(&props).unwrap();
        assert_eq!(json, r#"{"a":true}"#);
    }
}
