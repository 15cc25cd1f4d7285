//! Rule-table validator.
//!
//! A rule table pairs field paths with rule specs:
//!
//! ```rust,ignore
//! const RULES: RuleTable = &[
//!     ("customerName", "required|string|max:255"),
//!     ("productList", "required|array"),
//!     ("productList.*.quantity", "required|integer|min:1"),
//! ];
//! ```
//!
//! A `*` segment expands over every element of an array (or every value of
//! an object keyed by id, which is how Nhanh returns collections), so one
//! table covers nested line items without hand-written loops. Errors are
//! reported under the concrete path, e.g. `productList.2.quantity`.

use serde_json::Value;

use super::errors::{ValidationError, ValidationErrors};
use super::rule::{RuleSet, RuleSpecError};

/// Static `(path, spec)` pairs describing how to validate a payload.
pub type RuleTable = &'static [(&'static str, &'static str)];

/// Wildcard segment matching every element of a collection.
const WILDCARD: &str = "*";

/// Name used in messages for rules on the root path `""`.
const ROOT_FIELD: &str = "data";

#[derive(Debug, Clone)]
struct FieldRules {
    segments: Vec<String>,
    rules: RuleSet,
}

/// Compiled rule table.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    fields: Vec<FieldRules>,
}

impl Validator {
    /// Compile a rule table, rejecting malformed specs and paths.
    pub fn new(table: &[(&str, &str)]) -> Result<Self, RuleSpecError> {
        let fields = table
            .iter()
            .map(|(path, spec)| {
                let segments: Vec<String> = if path.is_empty() {
                    Vec::new()
                } else {
                    path.split('.').map(str::to_string).collect()
                };
                if segments.iter().any(String::is_empty) {
                    return Err(RuleSpecError::InvalidPath {
                        path: (*path).to_string(),
                    });
                }
                Ok(FieldRules {
                    segments,
                    rules: RuleSet::parse(spec)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { fields })
    }

    /// Run every field's rules against `data`.
    ///
    /// Each concrete path records at most one message: the first rule it
    /// fails. Later rules on the same path are skipped.
    #[must_use]
    pub fn validate(&self, data: &Value) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for field in &self.fields {
            let mut targets = Vec::new();
            expand(Some(data), &field.segments, String::new(), &mut targets);
            for (path, value) in targets {
                let path = if path.is_empty() {
                    ROOT_FIELD.to_string()
                } else {
                    path
                };
                if let Some(rule) = field.rules.first_failure(value) {
                    let message = rule.message(&path, value, field.rules.is_numeric());
                    errors.add(path, message);
                }
            }
        }
        errors
    }

    /// Validate and turn a non-empty error set into `Err`.
    pub fn check(&self, data: &Value) -> Result<(), ValidationError> {
        let errors = self.validate(data);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Invalid(errors))
        }
    }
}

/// Compile `table` and check `data` in one step.
pub fn check(table: &[(&str, &str)], data: &Value) -> Result<(), ValidationError> {
    Validator::new(table)?.check(data)
}

/// Resolve a dotted path against a value, without wildcard expansion.
#[must_use]
pub fn lookup<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(data, |current, segment| child(current, segment))
}

fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Collect `(concrete path, value)` targets for a segment list.
///
/// Wildcards over missing or scalar values produce no targets, so rules on
/// elements of an absent collection are not evaluated.
fn expand<'a>(
    value: Option<&'a Value>,
    segments: &[String],
    prefix: String,
    out: &mut Vec<(String, Option<&'a Value>)>,
) {
    let Some((head, rest)) = segments.split_first() else {
        out.push((prefix, value));
        return;
    };

    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        }
    };

    if head == WILDCARD {
        match value {
            Some(Value::Array(items)) => {
                for (index, item) in items.iter().enumerate() {
                    expand(Some(item), rest, join(&index.to_string()), out);
                }
            }
            Some(Value::Object(map)) => {
                for (key, item) in map {
                    expand(Some(item), rest, join(key), out);
                }
            }
            _ => {}
        }
        return;
    }

    let next = value.and_then(|v| child(v, head));
    expand(next, rest, join(head), out);
}
