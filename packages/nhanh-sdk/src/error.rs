//! Error types for the Nhanh SDK.
//!
//! Every failure of a remote call is carried by [`NhanhError`]. API failures
//! keep the raw response alongside the parsed Nhanh error code and messages
//! so callers can decide whether to retry.
//!
//! # Classification
//!
//! | Source | Condition | Variant |
//! |--------|-----------|---------|
//! | HTTP status | 401 | `Authentication` |
//! | HTTP status | 403 | `Authorization` |
//! | HTTP status | 404 | `NotFound` |
//! | HTTP status | 429 | `RateLimited` |
//! | HTTP status | other 4xx | `Client` |
//! | HTTP status | 5xx | `Server` |
//! | Envelope `code != 1` | `ERR_429` | `RateLimited` |
//! | Envelope `code != 1` | invalid credential codes | `Authentication` |
//! | Envelope `code != 1` | permission codes | `Authorization` |
//! | Envelope `code != 1` | anything else | `Api` |

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::domain::validation::{RuleSpecError, ValidationError, ValidationErrors};

/// Lockout applied when a rate-limited response does not say how long.
pub const DEFAULT_LOCKED_SECONDS: u64 = 60;

const RATE_LIMIT_CODE: &str = "ERR_429";

const AUTHENTICATION_CODES: &[&str] = &[
    "ERR_INVALID_ACCESS_TOKEN",
    "ERR_EXPIRED_ACCESS_TOKEN",
    "ERR_INVALID_APP_ID",
    "ERR_INVALID_BUSINESS_ID",
    "ERR_INVALID_SECRET_KEY",
    "ERR_INVALID_ACCESS_CODE",
    "ERR_INVALID_VERSION",
];

const AUTHORIZATION_CODES: &[&str] = &[
    "ERR_NO_PERMISSION",
    "ERR_ACCESS_DENIED",
    "ERR_APP_NOT_APPROVED",
    "ERR_BUSINESS_NOT_ALLOWED",
];

/// Details of a failed API call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiFailure {
    /// HTTP status of the response.
    pub status: u16,
    /// Raw response body.
    pub body: String,
    /// Nhanh `errorCode`, when present.
    pub error_code: Option<String>,
    /// Messages from the envelope, flattened.
    pub messages: Vec<String>,
}

impl ApiFailure {
    /// Build from a status and raw body, pulling the error code and messages
    /// out of the body when it is a Nhanh envelope.
    #[must_use]
    pub fn from_body(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let envelope = serde_json::from_str::<Value>(&body).unwrap_or(Value::Null);
        Self::from_envelope(status, body, &envelope)
    }

    /// Build from an already-parsed envelope.
    #[must_use]
    pub fn from_envelope(status: u16, body: String, envelope: &Value) -> Self {
        let error_code = envelope.get("errorCode").and_then(|code| match code {
            Value::String(code) if !code.is_empty() => Some(code.clone()),
            Value::Number(code) => Some(code.to_string()),
            _ => None,
        });
        Self {
            status,
            body,
            error_code,
            messages: envelope.get("messages").map(flatten_messages).unwrap_or_default(),
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(code) = &self.error_code {
            write!(f, " [{code}]")?;
        }
        if self.messages.is_empty() {
            if !self.body.is_empty() {
                write!(f, ": {}", truncate(&self.body, 200))?;
            }
        } else {
            write!(f, ": {}", self.messages.join("; "))?;
        }
        Ok(())
    }
}

/// Errors returned by the SDK.
#[derive(Debug, Error)]
pub enum NhanhError {
    /// Credentials were rejected.
    #[error("Authentication failed: {0}")]
    Authentication(ApiFailure),

    /// Credentials lack the needed permission.
    #[error("Authorization failed: {0}")]
    Authorization(ApiFailure),

    /// Resource does not exist.
    #[error("Not found: {0}")]
    NotFound(ApiFailure),

    /// Too many requests; the business is locked for a while.
    #[error("Rate limited for {locked_seconds}s: {failure}")]
    RateLimited {
        /// Response details.
        failure: ApiFailure,
        /// Seconds until requests are accepted again.
        locked_seconds: u64,
    },

    /// Other 4xx response.
    #[error("Client error: {0}")]
    Client(ApiFailure),

    /// 5xx response.
    #[error("Server error: {0}")]
    Server(ApiFailure),

    /// Successful HTTP response whose envelope reports failure.
    #[error("API error: {0}")]
    Api(ApiFailure),

    /// Transport failure before a response arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// JSON could not be decoded from a response or encoded from a request.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// A credential needed for the call is not configured.
    #[error("Missing credential: {0}")]
    MissingCredentials(String),

    /// A configured URL could not be parsed.
    #[error("Invalid URL '{0}'")]
    InvalidUrl(String),

    /// Response decoded but did not have the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A rule table is malformed.
    #[error("Invalid rule: {0}")]
    RuleSpec(#[from] RuleSpecError),

    /// The request failed local validation and was not sent.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
}

impl NhanhError {
    /// Classify a non-2xx HTTP response.
    ///
    /// `retry_after` is the parsed `Retry-After` header, if any.
    #[must_use]
    pub fn from_status(status: u16, body: impl Into<String>, retry_after: Option<u64>) -> Self {
        let body = body.into();
        let envelope = serde_json::from_str::<Value>(&body).unwrap_or(Value::Null);
        let failure = ApiFailure::from_envelope(status, body, &envelope);
        match status {
            401 => Self::Authentication(failure),
            403 => Self::Authorization(failure),
            404 => Self::NotFound(failure),
            429 => Self::RateLimited {
                locked_seconds: retry_after
                    .or_else(|| locked_seconds_of(&envelope))
                    .unwrap_or(DEFAULT_LOCKED_SECONDS),
                failure,
            },
            500..=599 => Self::Server(failure),
            _ => Self::Client(failure),
        }
    }

    /// Classify an HTTP 200 envelope whose `code` is not `1`.
    #[must_use]
    pub fn from_envelope(status: u16, body: String, envelope: &Value) -> Self {
        let failure = ApiFailure::from_envelope(status, body, envelope);
        let code = failure.error_code.clone();
        match code.as_deref() {
            Some(RATE_LIMIT_CODE) => Self::RateLimited {
                locked_seconds: locked_seconds_of(envelope).unwrap_or(DEFAULT_LOCKED_SECONDS),
                failure,
            },
            Some(code) if AUTHENTICATION_CODES.contains(&code) => Self::Authentication(failure),
            Some(code) if AUTHORIZATION_CODES.contains(&code) => Self::Authorization(failure),
            _ => Self::Api(failure),
        }
    }

    /// Response details, for API failures.
    #[must_use]
    pub const fn failure(&self) -> Option<&ApiFailure> {
        match self {
            Self::Authentication(failure)
            | Self::Authorization(failure)
            | Self::NotFound(failure)
            | Self::Client(failure)
            | Self::Server(failure)
            | Self::Api(failure)
            | Self::RateLimited { failure, .. } => Some(failure),
            _ => None,
        }
    }

    /// HTTP status, for API failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.failure().map(|failure| failure.status)
    }

    /// Nhanh `errorCode`, when the response carried one.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.failure()?.error_code.as_deref()
    }

    /// Whether the call was refused for exceeding the rate limit.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Lockout duration of a rate-limited call.
    #[must_use]
    pub const fn locked_seconds(&self) -> Option<u64> {
        match self {
            Self::RateLimited { locked_seconds, .. } => Some(*locked_seconds),
            _ => None,
        }
    }

    /// Field errors of a request refused locally.
    #[must_use]
    pub const fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationError> for NhanhError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Invalid(errors) => Self::Validation(errors),
            ValidationError::RuleSpec(err) => Self::RuleSpec(err),
            ValidationError::Payload(message) => Self::JsonParse(message),
        }
    }
}

impl From<reqwest::Error> for NhanhError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for NhanhError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Flatten the envelope `messages` field, which may be a string, a list, or
/// an object of field → message(s).
pub(crate) fn flatten_messages(messages: &Value) -> Vec<String> {
    match messages {
        Value::String(message) if !message.is_empty() => vec![message.clone()],
        Value::Array(items) => items.iter().flat_map(flatten_messages).collect(),
        Value::Object(map) => map.values().flat_map(flatten_messages).collect(),
        Value::Number(_) | Value::Bool(_) => vec![messages.to_string()],
        _ => Vec::new(),
    }
}

fn locked_seconds_of(envelope: &Value) -> Option<u64> {
    let locked = envelope.get("data")?.get("lockedSeconds")?;
    locked
        .as_u64()
        .or_else(|| locked.as_str()?.trim().parse().ok())
}

fn truncate(text: &str, max_chars: usize) -> &str {
    text.char_indices()
        .nth(max_chars)
        .map_or(text, |(index, _)| &text[..index])
}
