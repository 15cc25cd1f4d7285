//! Request DTO contract.

use serde::Serialize;
use serde_json::Value;

use crate::domain::validation::{self, RuleTable, ValidationError, ValidationErrors};

/// A typed request body bound to one Nhanh endpoint.
///
/// The struct serializes to the `data` field of the multipart call; the
/// rule table is checked against that same JSON before it is sent.
pub trait ApiRequest: Serialize {
    /// Endpoint path relative to the API base URL.
    const ENDPOINT: &'static str;

    /// Rules applied to the serialized payload.
    const RULES: RuleTable;

    /// Serialized payload.
    fn to_payload(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Check the payload against [`ApiRequest::RULES`].
    ///
    /// A request that cannot be serialized fails with
    /// [`ValidationError::Payload`].
    fn validate(&self) -> Result<(), ValidationError> {
        let payload = self
            .to_payload()
            .map_err(|err| ValidationError::Payload(err.to_string()))?;
        validation::check(Self::RULES, &payload)
    }

    /// Whether the request would be accepted locally.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Field errors; empty when valid.
    fn errors(&self) -> ValidationErrors {
        self.validate()
            .err()
            .map(|err| err.errors())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NhanhError;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot encode"))
        }
    }

    impl ApiRequest for Unserializable {
        const ENDPOINT: &'static str = "/test/unserializable";
        const RULES: RuleTable = &[("", "array")];
    }

    #[test]
    fn serialization_failure_is_reported() {
        let err = Unserializable.validate().unwrap_err();
        assert!(matches!(&err, ValidationError::Payload(message) if message.contains("cannot encode")));
        assert!(!Unserializable.is_valid());
        assert!(Unserializable.errors().is_empty());
        assert!(matches!(NhanhError::from(err), NhanhError::JsonParse(_)));
    }
}
