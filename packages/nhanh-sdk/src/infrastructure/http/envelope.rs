//! Response envelope handling.
//!
//! Every Nhanh response is `{code, messages, errorCode, data}`. `code == 1`
//! means success; anything else is a failure even under HTTP 200.

use reqwest::Response;
use serde_json::Value;

use crate::error::NhanhError;

/// Read a response and return the envelope of a successful call.
pub(crate) async fn read_envelope(response: Response, endpoint: &str) -> Result<Value, NhanhError> {
    let status = response.status().as_u16();
    let retry_after = response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());
    let body = response.text().await?;

    if !(200..300).contains(&status) {
        let err = NhanhError::from_status(status, body, retry_after);
        tracing::warn!(
            endpoint,
            status,
            error_code = err.error_code().unwrap_or_default(),
            error = %err,
            "Nhanh API returned an error status"
        );
        return Err(err);
    }

    parse_envelope(status, body).inspect_err(|err| {
        tracing::warn!(
            endpoint,
            status,
            error_code = err.error_code().unwrap_or_default(),
            error = %err,
            "Nhanh API call failed"
        );
    })
}

/// Parse a 2xx body into its envelope, failing when `code != 1`.
pub(crate) fn parse_envelope(status: u16, body: String) -> Result<Value, NhanhError> {
    let envelope: Value = serde_json::from_str(&body)?;
    if !envelope.is_object() {
        return Err(NhanhError::InvalidResponse(format!(
            "expected a JSON object envelope, got {}",
            kind_of(&envelope)
        )));
    }
    if is_success(envelope.get("code")) {
        Ok(envelope)
    } else {
        Err(NhanhError::from_envelope(status, body, &envelope))
    }
}

fn is_success(code: Option<&Value>) -> bool {
    match code {
        Some(Value::Number(code)) => code.as_i64() == Some(1),
        Some(Value::String(code)) => code.trim() == "1",
        Some(Value::Bool(code)) => *code,
        _ => false,
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
