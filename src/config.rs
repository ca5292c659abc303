//! Session settings for talking to a petstore.
//!
//! # Environment Variables
//!
//! | Variable | Required | Description |
//! |----------|----------|-------------|
//! | `PETSTORE_API_KEY` | Yes | Value sent in the `api_key` header |
//! | `PETSTORE_BASE_URL` | No | Overrides the public demo URL |
//! | `PETSTORE_TIMEOUT_SECS` | No | Total request timeout in seconds, greater than zero |
//!
//! Values are read from the process environment only. Callers that keep them
//! in a `.env` file load it first (the test suite uses `dotenvy`).

use std::error::Error as StdErr;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::swagger::{Client, SwaggerPetstore};
use crate::HttpClientConfig;

/// Base URL of the public Swagger Petstore demo.
pub const DEFAULT_BASE_URL: &str = crate::swagger::api::PETSTORE_API_URL;

pub const API_KEY_VAR: &str = "PETSTORE_API_KEY";
pub const BASE_URL_VAR: &str = "PETSTORE_BASE_URL";
pub const TIMEOUT_VAR: &str = "PETSTORE_TIMEOUT_SECS";

/// Errors raised while loading [`Settings`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(
        "PETSTORE_API_KEY is not set. Please add it to your .env file \
         or set it as a GitHub Actions secret."
    )]
    MissingApiKey,

    #[error("PETSTORE_TIMEOUT_SECS must be a positive whole number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

/// Base URL, credentials and HTTP options for one test session.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub api_key: String,
    pub http: HttpClientConfig,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("http", &self.http)
            .finish()
    }
}

impl Settings {
    /// Settings for the public demo with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            http: HttpClientConfig::default(),
        }
    }

    /// Loads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads settings through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// ```
    /// use petstore::config::{ConfigError, Settings, DEFAULT_BASE_URL};
    ///
    /// let settings = Settings::from_lookup(|name| match name {
    ///     "PETSTORE_API_KEY" => Some("special-key".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    ///
    /// let missing = Settings::from_lookup(|_| None);
    /// assert_eq!(missing, Err(ConfigError::MissingApiKey));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut settings = Self::new(api_key);

        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|url| !url.is_empty()) {
            settings.base_url = base_url;
        }

        if let Some(raw) = lookup(TIMEOUT_VAR).filter(|raw| !raw.is_empty()) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            settings.http = settings.http.timeout(Duration::from_secs(secs));
        }

        debug!(base_url = %settings.base_url, timeout = ?settings.http.timeout, "loaded petstore settings");
        Ok(settings)
    }

    /// Builds the pre-configured HTTP client for this session.
    pub fn client(&self) -> Result<Client, Box<dyn StdErr + Send + Sync>> {
        Client::with_base_url(&self.api_key, &self.base_url, self.http.clone())
    }

    /// Builds a provider backed by [`Settings::client`].
    pub fn provider(&self) -> Result<SwaggerPetstore, Box<dyn StdErr + Send + Sync>> {
        Ok(SwaggerPetstore::from_client(self.client()?))
    }
}
