//! Configuration module for the Nhanh SDK.
//!
//! Loads YAML configuration with environment variable interpolation and
//! validates it before any client is built.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nhanh_sdk::config::load_config;
//!
//! // Load from default path (nhanh.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("config/nhanh.yaml"))?;
//!
//! println!("API base: {}", config.api.base_url);
//! ```
//!
//! # Example file
//!
//! ```yaml
//! api:
//!   app_id: ${NHANH_APP_ID}
//!   secret_key: ${NHANH_SECRET_KEY}
//!   business_id: ${NHANH_BUSINESS_ID}
//!   access_token: ${NHANH_ACCESS_TOKEN}
//!   timeout_secs: ${NHANH_TIMEOUT_SECS:-30}
//! cache:
//!   ttl_secs: 600
//! observability:
//!   logging:
//!     level: debug
//!     format: pretty
//! ```

mod api;
mod cache;
mod observability;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use api::ApiConfig;
pub use cache::CacheConfig;
pub use observability::{LOG_FORMATS, LoggingConfig, ObservabilityConfig};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NhanhConfig {
    /// Credentials and endpoints.
    #[serde(default)]
    pub api: ApiConfig,
    /// Reference-data cache.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Load configuration from a YAML file with environment variable interpolation.
///
/// Defaults to `nhanh.yaml` in the working directory.
pub fn load_config(path: Option<&str>) -> Result<NhanhConfig, ConfigError> {
    let path = path.unwrap_or("nhanh.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string.
pub fn load_config_from_string(yaml: &str) -> Result<NhanhConfig, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: NhanhConfig = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax. Unset or empty
/// variables without a default become the empty string.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
pub fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match cap.get(1).map(|m| std::env::var(m.as_str())) {
            Some(Ok(value)) if !value.is_empty() => value,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
pub fn validate_config(config: &NhanhConfig) -> Result<(), ConfigError> {
    let api = &config.api;

    if api.app_id.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "api.app_id must not be empty".to_string(),
        ));
    }

    if api.version.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "api.version must not be empty".to_string(),
        ));
    }

    for (name, url) in [("api.base_url", &api.base_url), ("api.oauth_url", &api.oauth_url)] {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::ValidationError(format!(
                "{name} must be an http(s) URL, got '{url}'"
            )));
        }
    }

    if api.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "api.timeout_secs must be positive".to_string(),
        ));
    }

    let format = config.observability.logging.format.as_str();
    if !LOG_FORMATS.contains(&format) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    Ok(())
}
