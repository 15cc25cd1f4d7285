//! Rule tokens and their checks.
//!
//! A rule spec is a pipe-delimited list of tokens such as
//! `required|integer|min:0`. Each token names a check and may carry one
//! parameter after the first `:`.

use std::fmt;
use std::sync::OnceLock;

use serde_json::Value;
use thiserror::Error;

use super::date_format;

/// Malformed rule spec.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuleSpecError {
    /// Rule name is not recognized.
    #[error("unknown rule '{rule}'")]
    UnknownRule {
        /// The offending token.
        rule: String,
    },

    /// Empty token between two pipes.
    #[error("empty rule in spec '{spec}'")]
    EmptyRule {
        /// The full spec.
        spec: String,
    },

    /// Rule needs a parameter but none was given.
    #[error("rule '{rule}' requires a parameter")]
    MissingParameter {
        /// Rule name.
        rule: String,
    },

    /// Parameter could not be interpreted.
    #[error("rule '{rule}' has invalid parameter '{parameter}'")]
    InvalidParameter {
        /// Rule name.
        rule: String,
        /// Raw parameter text.
        parameter: String,
    },

    /// Parameter given to a rule that takes none.
    #[error("rule '{rule}' does not take a parameter")]
    UnexpectedParameter {
        /// Rule name.
        rule: String,
    },

    /// Field path has an empty segment.
    #[error("invalid field path '{path}'")]
    InvalidPath {
        /// The path as written.
        path: String,
    },
}

/// A single validation check.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Value must be present and non-empty (integer zero counts as present).
    Required,
    /// Value must be a string.
    String,
    /// Value must be an integer or an integer string.
    Integer,
    /// Value must be a number or a numeric string.
    Numeric,
    /// Value must be an array.
    Array,
    /// Value must be a boolean-like scalar.
    Boolean,
    /// Value must be a structurally valid email address.
    Email,
    /// Size must not exceed the bound.
    Max(f64),
    /// Size must be at least the bound.
    Min(f64),
    /// Size must fall within the inclusive range.
    Between(f64, f64),
    /// String form must equal one of the options.
    In(Vec<String>),
    /// Must parse and re-format identically under the PHP-style format.
    DateFormat(String),
}

impl Rule {
    /// Parse one token (`max:255`, `in:A,B`, `required`).
    pub fn parse(token: &str) -> Result<Self, RuleSpecError> {
        let (name, parameter) = match token.split_once(':') {
            Some((name, parameter)) => (name.trim(), Some(parameter)),
            None => (token.trim(), None),
        };

        let bare = |rule: Self| match parameter {
            Some(_) => Err(RuleSpecError::UnexpectedParameter {
                rule: name.to_string(),
            }),
            None => Ok(rule),
        };

        match name {
            "required" => bare(Self::Required),
            "string" => bare(Self::String),
            "integer" => bare(Self::Integer),
            "numeric" => bare(Self::Numeric),
            "array" => bare(Self::Array),
            "boolean" => bare(Self::Boolean),
            "email" => bare(Self::Email),
            "max" => Ok(Self::Max(parse_bound(name, parameter)?)),
            "min" => Ok(Self::Min(parse_bound(name, parameter)?)),
            "between" => {
                let raw = require_parameter(name, parameter)?;
                let invalid = || RuleSpecError::InvalidParameter {
                    rule: name.to_string(),
                    parameter: raw.to_string(),
                };
                let (low, high) = raw.split_once(',').ok_or_else(invalid)?;
                let low: f64 = low.trim().parse().map_err(|_| invalid())?;
                let high: f64 = high.trim().parse().map_err(|_| invalid())?;
                if low > high {
                    return Err(invalid());
                }
                Ok(Self::Between(low, high))
            }
            "in" => {
                let raw = require_parameter(name, parameter)?;
                Ok(Self::In(raw.split(',').map(str::to_string).collect()))
            }
            "date_format" => {
                let raw = require_parameter(name, parameter)?;
                Ok(Self::DateFormat(raw.to_string()))
            }
            _ => Err(RuleSpecError::UnknownRule {
                rule: token.to_string(),
            }),
        }
    }

    /// Whether this rule is satisfied by a present value.
    ///
    /// `numeric_context` is true when the field also carries `integer` or
    /// `numeric`; numeric strings are then sized by value, not length.
    #[must_use]
    pub fn passes(&self, value: &Value, numeric_context: bool) -> bool {
        match self {
            Self::Required => !is_empty(value) || is_integer_zero(value),
            Self::String => value.is_string(),
            Self::Integer => is_integer(value),
            Self::Numeric => as_number(value).is_some(),
            Self::Array => value.is_array(),
            Self::Boolean => is_boolean(value),
            Self::Email => value.as_str().is_some_and(is_email),
            Self::Max(limit) => size_of(value, numeric_context).is_some_and(|size| size <= *limit),
            Self::Min(limit) => size_of(value, numeric_context).is_some_and(|size| size >= *limit),
            Self::Between(low, high) => size_of(value, numeric_context)
                .is_some_and(|size| size >= *low && size <= *high),
            Self::In(options) => {
                scalar_text(value).is_some_and(|text| options.iter().any(|o| *o == text))
            }
            Self::DateFormat(format) => value
                .as_str()
                .is_some_and(|text| date_format::matches(text, format)),
        }
    }

    /// Human-readable failure message for `field`.
    #[must_use]
    pub fn message(&self, field: &str, value: Option<&Value>, numeric_context: bool) -> String {
        let unit = match value {
            Some(Value::String(_)) if !numeric_context => " characters",
            Some(Value::Array(_) | Value::Object(_)) => " items",
            _ => "",
        };
        match self {
            Self::Required => format!("The {field} field is required."),
            Self::String => format!("The {field} must be a string."),
            Self::Integer => format!("The {field} must be an integer."),
            Self::Numeric => format!("The {field} must be a number."),
            Self::Array => format!("The {field} must be an array."),
            Self::Boolean => format!("The {field} field must be true or false."),
            Self::Email => format!("The {field} must be a valid email address."),
            Self::Max(limit) => format!(
                "The {field} may not be greater than {}{unit}.",
                format_bound(*limit)
            ),
            Self::Min(limit) => format!("The {field} must be at least {}{unit}.", format_bound(*limit)),
            Self::Between(low, high) => format!(
                "The {field} must be between {} and {}{unit}.",
                format_bound(*low),
                format_bound(*high)
            ),
            Self::In(_) => format!("The selected {field} is invalid."),
            Self::DateFormat(format) => {
                format!("The {field} does not match the format {format}.")
            }
        }
    }

    /// Whether values of this rule's field should be sized numerically.
    #[must_use]
    pub const fn is_numeric_type(&self) -> bool {
        matches!(self, Self::Integer | Self::Numeric)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
            Self::Numeric => write!(f, "numeric"),
            Self::Array => write!(f, "array"),
            Self::Boolean => write!(f, "boolean"),
            Self::Email => write!(f, "email"),
            Self::Max(limit) => write!(f, "max:{}", format_bound(*limit)),
            Self::Min(limit) => write!(f, "min:{}", format_bound(*limit)),
            Self::Between(low, high) => {
                write!(f, "between:{},{}", format_bound(*low), format_bound(*high))
            }
            Self::In(options) => write!(f, "in:{}", options.join(",")),
            Self::DateFormat(format) => write!(f, "date_format:{format}"),
        }
    }
}

/// Ordered rules for one field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Parse a pipe-delimited spec. An empty spec yields an empty set.
    pub fn parse(spec: &str) -> Result<Self, RuleSpecError> {
        if spec.trim().is_empty() {
            return Ok(Self::default());
        }
        let rules = spec
            .split('|')
            .map(|token| {
                if token.trim().is_empty() {
                    Err(RuleSpecError::EmptyRule {
                        spec: spec.to_string(),
                    })
                } else {
                    Rule::parse(token)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Whether `required` is part of the set.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }

    /// Whether numeric strings should be sized by value.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.rules.iter().any(Rule::is_numeric_type)
    }

    /// First rule the value breaks, if any.
    ///
    /// Absent, null, or empty-string values skip every rule except
    /// `required`.
    #[must_use]
    pub fn first_failure(&self, value: Option<&Value>) -> Option<&Rule> {
        let Some(value) = value.filter(|v| !is_blank(v)) else {
            return self.rules.iter().find(|rule| **rule == Rule::Required);
        };
        let numeric = self.is_numeric();
        self.rules.iter().find(|rule| !rule.passes(value, numeric))
    }
}

fn require_parameter<'a>(rule: &str, parameter: Option<&'a str>) -> Result<&'a str, RuleSpecError> {
    match parameter {
        Some(raw) if !raw.is_empty() => Ok(raw),
        _ => Err(RuleSpecError::MissingParameter {
            rule: rule.to_string(),
        }),
    }
}

fn parse_bound(rule: &str, parameter: Option<&str>) -> Result<f64, RuleSpecError> {
    let raw = require_parameter(rule, parameter)?;
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|bound| bound.is_finite())
        .ok_or_else(|| RuleSpecError::InvalidParameter {
            rule: rule.to_string(),
            parameter: raw.to_string(),
        })
}

fn format_bound(bound: f64) -> String {
    if bound.fract() == 0.0 && bound.abs() < 1e15 {
        format!("{}", bound as i64)
    } else {
        bound.to_string()
    }
}

/// Absent-equivalent values for optional fields.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Loose emptiness: null, false, numeric zero, `""`, and empty collections.
/// The string `"0"` is not empty.
pub(crate) fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn is_integer_zero(value: &Value) -> bool {
    value.as_i64() == Some(0) || value.as_u64() == Some(0)
}

fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_i64() || n.is_u64(),
        Value::String(s) => s.parse::<i64>().is_ok_and(|parsed| parsed.to_string() == *s),
        _ => false,
    }
}

/// Numeric value of a number or decimal string.
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric(s),
        _ => None,
    }
}

fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let well_formed = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !well_formed {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
}

fn is_boolean(value: &Value) -> bool {
    match value {
        Value::Bool(_) => true,
        Value::Number(n) => matches!(n.as_i64(), Some(0 | 1)),
        Value::String(s) => matches!(s.as_str(), "0" | "1"),
        _ => false,
    }
}

fn size_of(value: &Value, numeric_context: bool) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if numeric_context => parse_numeric(s),
        Value::String(s) => Some(s.chars().count() as f64),
        Value::Array(items) => Some(items.len() as f64),
        Value::Object(map) => Some(map.len() as f64),
        _ => None,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
        _ => None,
    }
}

#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn is_email(candidate: &str) -> bool {
    static EMAIL_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = EMAIL_REGEX.get_or_init(|| {
        regex::Regex::new(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$",
        )
        .expect("email regex is valid")
    });

    candidate.len() <= 254 && re.is_match(candidate)
}
