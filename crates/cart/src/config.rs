//! Cart client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `EASYSHOP_API_BASE_URL` - Base URL of the EasyShop API (e.g., `http://localhost:8080`)
//!
//! ## Optional
//! - `EASYSHOP_API_TOKEN` - Bearer token for authenticated requests
//! - `EASYSHOP_CHECKOUT_MESSAGE_DELAY_MS` - How long the checkout success
//!   message stays visible before the cart re-renders (default: 1500)

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart client configuration.
#[derive(Clone)]
pub struct CartConfig {
    /// Base URL of the EasyShop API
    pub base_url: Url,
    /// Bearer token for authenticated requests, if the user is signed in
    pub api_token: Option<SecretString>,
    /// How long the checkout success message stays visible before the
    /// full cart re-render
    pub checkout_message_delay: Duration,
}

impl std::fmt::Debug for CartConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartConfig")
            .field("base_url", &self.base_url.as_str())
            .field(
                "api_token",
                &self.api_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("checkout_message_delay", &self.checkout_message_delay)
            .finish()
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = parse_base_url(&get_required_env("EASYSHOP_API_BASE_URL")?)?;
        let api_token = get_optional_env("EASYSHOP_API_TOKEN").map(SecretString::from);
        let checkout_message_delay = parse_delay_ms(&get_env_or_default(
            "EASYSHOP_CHECKOUT_MESSAGE_DELAY_MS",
            "1500",
        ))?;

        Ok(Self {
            base_url,
            api_token,
            checkout_message_delay,
        })
    }

    /// Create a configuration directly from a base URL, with defaults for
    /// everything else.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_token: None,
            checkout_message_delay: Duration::from_millis(1500),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse and validate the API base URL.
fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| {
        ConfigError::InvalidEnvVar("EASYSHOP_API_BASE_URL".to_string(), e.to_string())
    })?;
    if url.host_str().is_none() {
        return Err(ConfigError::InvalidEnvVar(
            "EASYSHOP_API_BASE_URL".to_string(),
            "URL must have a host".to_string(),
        ));
    }
    Ok(url)
}

/// Parse the checkout message delay in milliseconds.
fn parse_delay_ms(value: &str) -> Result<Duration, ConfigError> {
    value.parse::<u64>().map(Duration::from_millis).map_err(|e| {
        ConfigError::InvalidEnvVar(
            "EASYSHOP_CHECKOUT_MESSAGE_DELAY_MS".to_string(),
            e.to_string(),
        )
    })
}
