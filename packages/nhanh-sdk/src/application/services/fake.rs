//! Hand-written API port fake for service tests.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::application::ports::NhanhApiPort;
use crate::error::NhanhError;

enum Canned {
    Data(Value),
    Status(u16, String),
}

/// Replies with canned `data` per endpoint and records every call.
#[derive(Default)]
pub struct FakeApi {
    responses: Mutex<HashMap<String, Canned>>,
    calls: Mutex<Vec<(String, Option<Value>)>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, endpoint: &str, data: Value) -> Self {
        self.responses
            .lock()
            .insert(endpoint.to_string(), Canned::Data(data));
        self
    }

    pub fn fail(self, endpoint: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .insert(endpoint.to_string(), Canned::Status(status, body.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<(String, Option<Value>)> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|(called, _)| called == endpoint)
            .count()
    }
}

#[async_trait]
impl NhanhApiPort for FakeApi {
    async fn call(&self, endpoint: &str, payload: Option<&Value>) -> Result<Value, NhanhError> {
        self.calls
            .lock()
            .push((endpoint.to_string(), payload.cloned()));
        match self.responses.lock().get(endpoint) {
            Some(Canned::Data(data)) => Ok(data.clone()),
            Some(Canned::Status(status, body)) => {
                Err(NhanhError::from_status(*status, body.clone(), None))
            }
            None => Err(NhanhError::from_status(404, "", None)),
        }
    }
}
