//! Validation error collection.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use super::rule::RuleSpecError;

/// Messages keyed by field path, in discovery order.
///
/// Paths are dot-delimited for nested data (`productList.0.price`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(String, Vec<String>)>,
}

impl ValidationErrors {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a message for a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((field, vec![message])),
        }
    }

    /// Append every message of `other`, keeping its order.
    pub fn merge(&mut self, other: Self) {
        for (field, messages) in other.entries {
            for message in messages {
                self.add(field.clone(), message);
            }
        }
    }

    /// Messages recorded for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    /// First message recorded for a field.
    #[must_use]
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// Whether the field has at least one message.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields with messages.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Field paths in discovery order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// All messages, flattened in discovery order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, messages)| messages.iter().map(String::as_str))
    }

    /// Iterate over `(field, messages)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.entries {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

/// Outcome of a failed validation pass.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more fields broke their rules.
    #[error("validation failed: {0}")]
    Invalid(ValidationErrors),

    /// A rule table could not be parsed.
    #[error(transparent)]
    RuleSpec(#[from] RuleSpecError),

    /// The value could not be serialized to JSON for checking.
    #[error("payload could not be serialized: {0}")]
    Payload(String),
}

impl ValidationError {
    /// Field errors, empty when the failure was not a field check.
    #[must_use]
    pub fn errors(&self) -> ValidationErrors {
        match self {
            Self::Invalid(errors) => errors.clone(),
            Self::RuleSpec(_) | Self::Payload(_) => ValidationErrors::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_discovery_order() {
        let mut errors = ValidationErrors::new();
        errors.add("zeta", "first");
        errors.add("alpha", "second");
        errors.add("zeta", "third");

        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["zeta", "alpha"]);
        assert_eq!(errors.get("zeta").unwrap(), ["first", "third"]);
        assert_eq!(errors.first("alpha"), Some("second"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn merge_appends() {
        let mut left = ValidationErrors::new();
        left.add("name", "missing");
        let mut right = ValidationErrors::new();
        right.add("mobile", "too long");
        right.add("name", "not a string");

        left.merge(right);

        assert_eq!(left.get("name").unwrap().len(), 2);
        assert!(left.has("mobile"));
    }

    #[test]
    fn display_joins_messages() {
        let mut errors = ValidationErrors::new();
        errors.add("icpp", "too big");
        errors.add("page", "not an integer");
        assert_eq!(errors.to_string(), "icpp: too big; page: not an integer");
    }

    #[test]
    fn serializes_as_ordered_map() {
        let mut errors = ValidationErrors::new();
        errors.add("b", "x");
        errors.add("a", "y");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"b":["x"],"a":["y"]}"#);
    }

    #[test]
    fn empty_by_default() {
        let errors = ValidationErrors::default();
        assert!(errors.is_empty());
        assert_eq!(errors.first("anything"), None);
    }
}
