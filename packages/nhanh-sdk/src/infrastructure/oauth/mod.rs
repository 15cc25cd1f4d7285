//! OAuth access-code flow.
//!
//! 1. Send the merchant to [`OAuthClient::authorization_url`].
//! 2. Nhanh redirects back to the return link with `accessCode`.
//! 3. [`OAuthClient::exchange`] trades the code for an [`AccessToken`].

use reqwest::{Client, Url};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::domain::auth::AccessToken;
use crate::domain::entity::Entity;
use crate::error::NhanhError;
use crate::infrastructure::http::read_envelope;

const ACCESS_TOKEN_PATH: &str = "/oauth/access_token";

/// Client for the OAuth endpoints.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    client: Client,
    base_url: String,
    oauth_url: String,
    version: String,
    app_id: String,
    secret_key: String,
}

impl OAuthClient {
    /// Create a new OAuth client from config.
    pub fn new(config: &ApiConfig) -> Result<Self, NhanhError> {
        if config.app_id.trim().is_empty() {
            return Err(NhanhError::MissingCredentials("app_id".to_string()));
        }

        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            oauth_url: config.oauth_url.clone(),
            version: config.version.clone(),
            app_id: config.app_id.clone(),
            secret_key: config.secret_key.clone(),
        })
    }

    /// Consent page URL that redirects to `return_link` afterwards.
    pub fn authorization_url(&self, return_link: &str) -> Result<String, NhanhError> {
        let url = Url::parse_with_params(
            &self.oauth_url,
            [
                ("version", self.version.as_str()),
                ("appId", self.app_id.as_str()),
                ("returnLink", return_link),
            ],
        )
        .map_err(|_| NhanhError::InvalidUrl(self.oauth_url.clone()))?;
        Ok(url.into())
    }

    /// Exchange an access code for a token.
    ///
    /// The token is validated before it is returned; a malformed token is an
    /// `InvalidResponse`.
    pub async fn exchange(&self, access_code: &str) -> Result<AccessToken, NhanhError> {
        if self.secret_key.trim().is_empty() {
            return Err(NhanhError::MissingCredentials("secret_key".to_string()));
        }
        if access_code.trim().is_empty() {
            return Err(NhanhError::MissingCredentials("access_code".to_string()));
        }

        let url = format!("{}{ACCESS_TOKEN_PATH}", self.base_url);
        let response = self
            .client
            .post(&url)
            .form(&[
                ("version", self.version.as_str()),
                ("appId", self.app_id.as_str()),
                ("secretKey", self.secret_key.as_str()),
                ("accessCode", access_code),
            ])
            .send()
            .await?;

        let envelope = read_envelope(response, ACCESS_TOKEN_PATH).await?;
        let token = AccessToken::from_value(token_fields(envelope)).unwrap_or_default();
        token
            .validate()
            .map_err(|err| NhanhError::InvalidResponse(format!("access token: {err}")))?;

        tracing::info!(
            business_id = token.business_id(),
            depots = token.depot_ids().len(),
            expires = ?token.expires_at(),
            "Access code exchanged"
        );
        Ok(token)
    }
}

/// Token fields live under `data` on newer API versions and at the top
/// level on older ones.
fn token_fields(mut envelope: Value) -> Value {
    if envelope
        .get("data")
        .is_some_and(|data| data.get("accessToken").is_some())
    {
        envelope["data"].take()
    } else {
        envelope
    }
}
