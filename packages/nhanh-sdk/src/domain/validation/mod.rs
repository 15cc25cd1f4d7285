//! Declarative field validation.
//!
//! Every request DTO and response entity declares a [`RuleTable`]; the
//! [`Validator`] interprets it against the JSON form of the data.
//!
//! # Rules
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `required` | present and non-empty; integer `0` and the string `"0"` count as present, float `0.0` does not |
//! | `string` / `integer` / `numeric` / `array` / `boolean` | type checks |
//! | `email` | addr-spec grammar |
//! | `max:N` / `min:N` / `between:A,B` | size: characters, value, or element count |
//! | `in:A,B,C` | case-sensitive membership |
//! | `date_format:F` | PHP-style format, exact round trip |
//!
//! Each field reports only its first failing rule.
//!
//! The path `""` addresses the payload itself, for bodies that are a bare
//! value or array; its errors are reported under `data`.
//!
//! `"0"` is treated as present so that zero amounts, which `Decimal`
//! serializes as strings, pass `required`.

mod date_format;
mod errors;
mod rule;
mod validator;

pub use errors::{ValidationError, ValidationErrors};
pub use rule::{Rule, RuleSet, RuleSpecError};
pub use validator::{RuleTable, Validator, check, lookup};

pub(crate) use rule::as_number;
