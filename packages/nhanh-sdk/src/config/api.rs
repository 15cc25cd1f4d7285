//! API credentials and endpoints.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

/// Nhanh application credentials and transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Application id issued by Nhanh.
    #[serde(default)]
    pub app_id: String,
    /// Application secret, needed for the OAuth exchange.
    #[serde(default)]
    pub secret_key: String,
    /// Business the access token belongs to.
    #[serde(default, deserialize_with = "string_or_number")]
    pub business_id: String,
    /// Access token obtained through OAuth.
    #[serde(default)]
    pub access_token: String,
    /// API version sent with every call.
    #[serde(default = "default_version")]
    pub version: String,
    /// Base URL of the REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL of the OAuth consent page.
    #[serde(default = "default_oauth_url")]
    pub oauth_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Config pointing at a different base URL (used for local servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            secret_key: String::new(),
            business_id: String::new(),
            access_token: String::new(),
            version: default_version(),
            base_url: default_base_url(),
            oauth_url: default_oauth_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_version() -> String {
    "2.0".to_string()
}

fn default_base_url() -> String {
    "https://open.nhanh.vn/api".to_string()
}

fn default_oauth_url() -> String {
    "https://nhanh.vn/oauth".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

/// Business ids are numeric but often quoted in YAML.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
        Missing(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
        Raw::Missing(()) => String::new(),
    })
}
