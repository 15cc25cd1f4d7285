//! Multipart HTTP client for the Nhanh REST API.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::Form;
use serde_json::Value;

use super::envelope::read_envelope;
use crate::application::ports::NhanhApiPort;
use crate::config::ApiConfig;
use crate::domain::auth::AccessToken;
use crate::error::NhanhError;

/// HTTP client for the Nhanh API.
///
/// Every call is a `POST {base_url}{endpoint}` with multipart fields
/// `version`, `appId`, `businessId`, `accessToken` and, when there is a
/// payload, `data` as JSON text.
#[derive(Debug, Clone)]
pub struct NhanhHttpClient {
    client: Client,
    base_url: String,
    version: String,
    app_id: String,
    business_id: String,
    access_token: String,
}

impl NhanhHttpClient {
    /// Create a new HTTP client from config.
    pub fn new(config: &ApiConfig) -> Result<Self, NhanhError> {
        for (name, value) in [
            ("app_id", &config.app_id),
            ("business_id", &config.business_id),
            ("access_token", &config.access_token),
        ] {
            if value.trim().is_empty() {
                return Err(NhanhError::MissingCredentials(name.to_string()));
            }
        }

        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            version: config.version.clone(),
            app_id: config.app_id.clone(),
            business_id: config.business_id.clone(),
            access_token: config.access_token.clone(),
        })
    }

    /// Same client, acting with a freshly exchanged token.
    #[must_use]
    pub fn with_token(mut self, token: &AccessToken) -> Self {
        self.business_id = token.business_id().to_string();
        self.access_token = token.token();
        self
    }

    /// Business the client acts for.
    #[must_use]
    pub fn business_id(&self) -> &str {
        &self.business_id
    }

    fn form(&self, payload: Option<&Value>) -> Result<Form, NhanhError> {
        let mut form = Form::new()
            .text("version", self.version.clone())
            .text("appId", self.app_id.clone())
            .text("businessId", self.business_id.clone())
            .text("accessToken", self.access_token.clone());
        if let Some(payload) = payload {
            form = form.text("data", serde_json::to_string(payload)?);
        }
        Ok(form)
    }
}

#[async_trait]
impl NhanhApiPort for NhanhHttpClient {
    async fn call(&self, endpoint: &str, payload: Option<&Value>) -> Result<Value, NhanhError> {
        let url = format!("{}{endpoint}", self.base_url);
        let form = self.form(payload)?;

        tracing::debug!(endpoint, has_payload = payload.is_some(), "Calling Nhanh API");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(endpoint, error = %e, "Nhanh API request failed");
                NhanhError::Network(e.to_string())
            })?;

        let mut envelope = read_envelope(response, endpoint).await?;
        Ok(envelope
            .get_mut("data")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig {
            app_id: "73001".to_string(),
            business_id: "14".to_string(),
            access_token: "tok".to_string(),
            base_url: "http://localhost:1/api/".to_string(),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn missing_token_is_rejected() {
        let config = ApiConfig {
            access_token: String::new(),
            ..config()
        };
        let err = NhanhHttpClient::new(&config).unwrap_err();
        assert!(matches!(err, NhanhError::MissingCredentials(name) if name == "access_token"));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = NhanhHttpClient::new(&config()).unwrap();
        assert_eq!(client.base_url, "http://localhost:1/api");
        assert_eq!(client.business_id(), "14");
    }

    #[test]
    fn token_replaces_credentials() {
        use crate::domain::entity::Entity;
        let token = AccessToken::from_value(serde_json::json!({
            "accessToken": "fresh",
            "businessId": 99,
            "expiredDateTime": "2030-01-01 00:00:00"
        }))
        .unwrap();
        let client = NhanhHttpClient::new(&config()).unwrap().with_token(&token);
        assert_eq!(client.business_id(), "99");
        assert_eq!(client.access_token, "fresh");
    }
}
