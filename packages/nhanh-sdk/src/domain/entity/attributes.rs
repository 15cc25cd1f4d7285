//! Attribute bag backing every entity.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::validation::{as_number, lookup};

/// Loosely-typed attributes with coercing getters.
///
/// Keys may be dotted paths (`inventory.remain`). Getters never fail: a
/// missing or unconvertible value yields the type's default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    inner: Map<String, Value>,
}

impl Attributes {
    /// Create an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON object; any other value yields `None`.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(inner) => Some(Self { inner }),
            _ => None,
        }
    }

    /// Raw value at `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self.inner.get(key) {
            Some(value) => Some(value),
            None if key.contains('.') => {
                let (head, rest) = key.split_once('.')?;
                self.inner.get(head).and_then(|value| lookup(value, rest))
            }
            None => None,
        }
    }

    /// Whether `key` holds a non-null value.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_null())
    }

    /// Set a top-level attribute. Never re-validates.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.inner.insert(key.into(), value.into());
    }

    /// Remove a top-level attribute.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.inner.remove(key)
    }

    /// String form of the value, empty when missing.
    #[must_use]
    pub fn string(&self, key: &str) -> String {
        self.opt_string(key).unwrap_or_default()
    }

    /// String form of the value, `None` when missing or null.
    #[must_use]
    pub fn opt_string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Integer value, `0` when missing.
    #[must_use]
    pub fn int(&self, key: &str) -> i64 {
        self.opt_int(key).unwrap_or(0)
    }

    /// Integer value; numeric strings are parsed and floats truncated.
    #[must_use]
    pub fn opt_int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .ok()
                .or_else(|| as_number(&Value::String(s.clone())).map(|f| f as i64)),
            Value::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    /// Float value, `0.0` when missing.
    #[must_use]
    pub fn float(&self, key: &str) -> f64 {
        self.get(key).and_then(as_number).unwrap_or(0.0)
    }

    /// Exact decimal value, zero when missing.
    ///
    /// Strings are parsed directly so amounts like `"199000.50"` keep
    /// their precision.
    #[must_use]
    pub fn decimal(&self, key: &str) -> Decimal {
        self.opt_decimal(key).unwrap_or(Decimal::ZERO)
    }

    /// Exact decimal value, `None` when missing or unparseable.
    #[must_use]
    pub fn opt_decimal(&self, key: &str) -> Option<Decimal> {
        match self.get(key)? {
            Value::String(s) => Decimal::from_str(s.trim()).ok(),
            Value::Number(n) => n
                .as_i64()
                .map(Decimal::from)
                .or_else(|| Decimal::from_str(&n.to_string()).ok())
                .or_else(|| n.as_f64().and_then(Decimal::from_f64)),
            _ => None,
        }
    }

    /// Boolean value; accepts `1`, `"1"`, `"true"`.
    #[must_use]
    pub fn bool(&self, key: &str) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => matches!(s.as_str(), "1" | "true"),
            _ => false,
        }
    }

    /// Elements of an array, or values of an object keyed by id.
    #[must_use]
    pub fn list(&self, key: &str) -> Vec<&Value> {
        match self.get(key) {
            Some(Value::Array(items)) => items.iter().collect(),
            Some(Value::Object(map)) => map.values().collect(),
            _ => Vec::new(),
        }
    }

    /// Nested bags for every object element of `key`.
    #[must_use]
    pub fn children(&self, key: &str) -> Vec<Self> {
        self.list(key)
            .into_iter()
            .filter_map(|value| Self::from_value(value.clone()))
            .collect()
    }

    /// JSON object view of the bag.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.inner.clone())
    }

    /// Underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.inner
    }
}

impl From<Map<String, Value>> for Attributes {
    fn from(inner: Map<String, Value>) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn bag(value: Value) -> Attributes {
        Attributes::from_value(value).unwrap()
    }

    #[test]
    fn missing_keys_yield_defaults() {
        let attrs = Attributes::new();
        assert_eq!(attrs.string("name"), "");
        assert_eq!(attrs.opt_string("name"), None);
        assert_eq!(attrs.int("id"), 0);
        assert_eq!(attrs.float("price"), 0.0);
        assert_eq!(attrs.decimal("price"), Decimal::ZERO);
        assert!(!attrs.bool("active"));
        assert!(attrs.list("items").is_empty());
    }

    #[test]
    fn coerces_on_read() {
        let attrs = bag(json!({
            "id": "125",
            "price": "199000.50",
            "qty": 3.9,
            "code": 4411,
            "active": "1",
        }));
        assert_eq!(attrs.int("id"), 125);
        assert_eq!(attrs.decimal("price"), dec!(199000.50));
        assert_eq!(attrs.float("price"), 199_000.5);
        assert_eq!(attrs.int("qty"), 3);
        assert_eq!(attrs.string("code"), "4411");
        assert!(attrs.bool("active"));
    }

    #[test]
    fn dotted_lookup() {
        let attrs = bag(json!({ "inventory": { "remain": 12, "depots": [{ "id": 7 }] } }));
        assert_eq!(attrs.int("inventory.remain"), 12);
        assert_eq!(attrs.int("inventory.depots.0.id"), 7);
        assert!(!attrs.has("inventory.missing"));
    }

    #[test]
    fn list_accepts_keyed_objects() {
        let attrs = bag(json!({ "customers": { "5": { "id": 5 }, "9": { "id": 9 } } }));
        let children = attrs.children("customers");
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].int("id"), 5);
    }

    #[test]
    fn set_and_remove_mutate_in_place() {
        let mut attrs = Attributes::new();
        attrs.set("name", "Lan");
        assert_eq!(attrs.string("name"), "Lan");
        assert_eq!(attrs.remove("name"), Some(json!("Lan")));
        assert!(!attrs.has("name"));
    }

    #[test]
    fn non_objects_are_rejected() {
        assert!(Attributes::from_value(json!([1, 2])).is_none());
        assert!(Attributes::from_value(json!("text")).is_none());
    }
}
