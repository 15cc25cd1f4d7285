//! Nhanh API Port (Driven Port)
//!
//! Interface for sending one call to the Nhanh REST API.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::NhanhError;

/// Port for Nhanh API calls.
///
/// Implementations attach credentials, unwrap the response envelope and
/// classify failures. The returned value is the envelope's `data` field
/// (`Value::Null` when absent).
#[async_trait]
pub trait NhanhApiPort: Send + Sync {
    /// Call `endpoint` with an optional JSON payload.
    async fn call(&self, endpoint: &str, payload: Option<&Value>) -> Result<Value, NhanhError>;
}
