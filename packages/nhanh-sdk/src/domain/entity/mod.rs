//! Entity attribute bag pattern.
//!
//! An entity wraps an [`Attributes`] bag with a static rule table. It is
//! never validated on construction; callers ask for `validate()` when they
//! need to, and every call re-runs the full table.

mod attributes;

use serde_json::Value;

use crate::domain::validation::{self, RuleTable, ValidationError, ValidationErrors};

pub use attributes::Attributes;

/// Validated data-transfer object over an attribute bag.
pub trait Entity: Sized {
    /// Rules applied by [`Entity::validate`].
    const RULES: RuleTable;

    /// Build from raw attributes. Does not validate.
    fn from_attributes(attributes: Attributes) -> Self;

    /// Read access to the bag.
    fn attributes(&self) -> &Attributes;

    /// Write access to the bag. Mutation does not re-validate.
    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Build from a JSON object; `None` for any other JSON value.
    fn from_value(value: Value) -> Option<Self> {
        Attributes::from_value(value).map(Self::from_attributes)
    }

    /// Run the rule table against the current attributes.
    fn validate(&self) -> Result<(), ValidationError> {
        validation::check(Self::RULES, &self.attributes().to_value())
    }

    /// Whether the current attributes satisfy the rule table.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Field errors of the current attributes; empty when valid.
    fn errors(&self) -> ValidationErrors {
        self.validate()
            .err()
            .map(|err| err.errors())
            .unwrap_or_default()
    }

    /// Raw attribute value.
    fn get(&self, key: &str) -> Option<&Value> {
        self.attributes().get(key)
    }

    /// Set an attribute in place.
    fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attributes_mut().set(key, value);
    }

    /// JSON form of the attributes.
    fn to_value(&self) -> Value {
        self.attributes().to_value()
    }
}

/// Decode every object element of a JSON array (or id-keyed object).
pub fn collect<E: Entity>(value: &Value) -> Vec<E> {
    let items: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => map.values().collect(),
        _ => Vec::new(),
    };
    items
        .into_iter()
        .filter_map(|item| E::from_value(item.clone()))
        .collect()
}

/// Implements the boilerplate half of [`Entity`] for a newtype over
/// `Attributes`.
macro_rules! attribute_entity {
    ($name:ident, $rules:expr) => {
        impl $crate::domain::entity::Entity for $name {
            const RULES: $crate::domain::validation::RuleTable = $rules;

            fn from_attributes(attributes: $crate::domain::entity::Attributes) -> Self {
                Self { attributes }
            }

            fn attributes(&self) -> &$crate::domain::entity::Attributes {
                &self.attributes
            }

            fn attributes_mut(&mut self) -> &mut $crate::domain::entity::Attributes {
                &mut self.attributes
            }
        }
    };
}

pub(crate) use attribute_entity;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone)]
    struct Sample {
        attributes: Attributes,
    }

    attribute_entity!(
        Sample,
        &[("name", "required|string|max:5"), ("age", "integer|min:0")]
    );

    #[test]
    fn construction_does_not_validate() {
        let sample = Sample::from_value(json!({ "age": -1 })).unwrap();
        assert!(!sample.is_valid());
    }

    #[test]
    fn validation_reruns_after_mutation() {
        let mut sample = Sample::from_value(json!({ "name": "toolongname" })).unwrap();
        assert!(sample.errors().has("name"));

        sample.set("name", "Lan");
        assert!(sample.is_valid());
        assert!(sample.errors().is_empty());
    }

    #[test]
    fn errors_are_keyed_by_field() {
        let sample = Sample::from_value(json!({ "age": "x" })).unwrap();
        let errors = sample.errors();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "age"]);
    }

    #[test]
    fn collect_skips_non_objects() {
        let items: Vec<Sample> = collect(&json!([{ "name": "a" }, 3, { "name": "b" }]));
        assert_eq!(items.len(), 2);
        let keyed: Vec<Sample> = collect(&json!({ "1": { "name": "a" } }));
        assert_eq!(keyed.len(), 1);
    }
}
