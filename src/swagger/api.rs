//! Low-level Swagger Petstore API client.
//!
//! This module provides direct access to the `/pet` endpoints. Typed calls
//! decode successful responses into [`Pet`] and turn every other status into a
//! [`PetstoreError`]; raw calls hand back the status and body untouched so
//! callers can assert on how the service treats malformed input.
//!
//! # API Reference
//!
//! - [Swagger Petstore](https://petstore.swagger.io/)

use std::fmt::Display;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{HttpClientConfig, Pet};

/// The public Swagger Petstore base URL.
pub const PETSTORE_API_URL: &str = "https://petstore.swagger.io/v2";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "api_key";

/// Errors that may occur when interacting with the Petstore API.
#[derive(Debug, Error)]
pub enum PetstoreError {
    /// The service answered 404.
    #[error("Not found: {0}")]
    NotFound(ApiMessage),

    /// The service answered 401 or 403.
    #[error("Unauthorized ({status}): {message}")]
    Unauthorized {
        status: StatusCode,
        message: ApiMessage,
    },

    /// The service rejected the request with another 4xx status.
    #[error("Invalid input ({status}): {message}")]
    InvalidInput {
        status: StatusCode,
        message: ApiMessage,
    },

    /// The service answered with a 5xx status.
    #[error("Server error ({status}): {message}")]
    Server {
        status: StatusCode,
        message: ApiMessage,
    },

    /// The service answered with a status that is neither success nor error.
    #[error("Unexpected status {0}")]
    UnexpectedStatus(StatusCode),

    /// An HTTP request error occurred.
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to serialize/deserialize.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PetstoreError {
    /// Returns the HTTP status behind this error, if the service answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::NotFound(_) => Some(StatusCode::NOT_FOUND),
            Self::Unauthorized { status, .. }
            | Self::InvalidInput { status, .. }
            | Self::Server { status, .. }
            | Self::UnexpectedStatus(status) => Some(*status),
            Self::Request(err) => err.status(),
            Self::Serialization(_) => None,
        }
    }
}

/// Error body returned by the Petstore API.
///
/// ```json
/// {"code": 1, "type": "error", "message": "Pet not found"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub code: i64,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub message: String,
}

impl Display for ApiMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// A response whose status has not been interpreted.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    /// The body parsed as JSON, or `None` if it is empty or not JSON.
    pub body: Option<Value>,
    /// The body as text.
    pub text: String,
}

impl RawResponse {
    /// Decodes the body as a [`Pet`], ignoring the status.
    pub fn pet(&self) -> Result<Pet, serde_json::Error> {
        serde_json::from_str(&self.text)
    }

    /// Decodes a successful response as a [`Pet`], or maps the status to an
    /// error.
    pub fn into_pet(self) -> Result<Pet, PetstoreError> {
        if self.status.is_success() {
            return Ok(self.pet()?);
        }
        Err(self.into_error())
    }

    fn message(&self) -> ApiMessage {
        self.body
            .as_ref()
            .and_then(|body| ApiMessage::deserialize(body).ok())
            .unwrap_or_else(|| ApiMessage {
                code: i64::from(self.status.as_u16()),
                kind: String::new(),
                message: self.text.clone(),
            })
    }

    fn into_error(self) -> PetstoreError {
        let status = self.status;
        let message = self.message();
        warn!(status = status.as_u16(), reason = %message.message, "petstore request failed");

        match status {
            StatusCode::NOT_FOUND => PetstoreError::NotFound(message),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                PetstoreError::Unauthorized { status, message }
            }
            s if s.is_client_error() => PetstoreError::InvalidInput { status, message },
            s if s.is_server_error() => PetstoreError::Server { status, message },
            _ => PetstoreError::UnexpectedStatus(status),
        }
    }
}

// =============================================================================
// API Client
// =============================================================================

/// Petstore API client.
///
/// Every request carries `Content-Type: application/json` and the `api_key`
/// header, like a session with default headers.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a client for the public Petstore.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Value sent in the `api_key` header
    pub fn new(api_key: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Self::with_base_url(api_key, PETSTORE_API_URL, HttpClientConfig::default())
    }

    /// Creates a client for the public Petstore with custom HTTP configuration.
    pub fn with_config(
        api_key: &str,
        config: HttpClientConfig,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Self::with_base_url(api_key, PETSTORE_API_URL, config)
    }

    /// Creates a client with a custom base URL.
    ///
    /// This is primarily useful for testing with mock servers.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Value sent in the `api_key` header
    /// * `base_url` - Base URL including the API version prefix
    /// * `config` - HTTP client configuration
    pub fn with_base_url(
        api_key: &str,
        base_url: &str,
        config: HttpClientConfig,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut key_value = HeaderValue::from_str(api_key)?;
        key_value.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key_value);

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout.unwrap_or(Duration::from_secs(30)));

        if let Some(addr) = config.local_address {
            builder = builder.local_address(addr);
        }

        #[cfg(any(
            target_os = "android",
            target_os = "fuchsia",
            target_os = "linux",
            target_os = "macos",
            target_os = "ios",
            target_os = "tvos",
            target_os = "watchos",
            target_os = "illumos",
            target_os = "solaris",
        ))]
        if let Some(ref iface) = config.interface {
            builder = builder.interface(iface);
        }

        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a request and reads the whole body.
    async fn send(&self, request: RequestBuilder) -> Result<RawResponse, PetstoreError> {
        let request = request.build()?;
        debug!(method = %request.method(), url = %request.url(), "sending petstore request");

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), bytes = text.len(), "received petstore response");

        let body = serde_json::from_str(&text).ok();
        Ok(RawResponse { status, body, text })
    }

    fn pet_url(&self) -> String {
        format!("{}/pet", self.base_url)
    }

    fn pet_id_url(&self, pet_id: impl Display) -> String {
        format!("{}/pet/{}", self.base_url, pet_id)
    }

    // =========================================================================
    // Raw APIs
    // =========================================================================

    /// `POST /pet` with an arbitrary JSON body.
    pub async fn post_pet_json(&self, body: &Value) -> Result<RawResponse, PetstoreError> {
        self.send(self.http_client.post(self.pet_url()).json(body))
            .await
    }

    /// `PUT /pet` with an arbitrary JSON body.
    pub async fn put_pet_json(&self, body: &Value) -> Result<RawResponse, PetstoreError> {
        self.send(self.http_client.put(self.pet_url()).json(body))
            .await
    }

    /// `GET /pet/{id}` for any path segment, including ids the typed API
    /// would not accept.
    pub async fn get_pet_raw(&self, pet_id: impl Display) -> Result<RawResponse, PetstoreError> {
        self.send(self.http_client.get(self.pet_id_url(pet_id)))
            .await
    }

    // =========================================================================
    // Pet APIs
    // =========================================================================

    /// Creates a pet.
    pub async fn create_pet(&self, pet: &Pet) -> Result<Pet, PetstoreError> {
        self.send(self.http_client.post(self.pet_url()).json(pet))
            .await?
            .into_pet()
    }

    /// Replaces an existing pet.
    pub async fn update_pet(&self, pet: &Pet) -> Result<Pet, PetstoreError> {
        self.send(self.http_client.put(self.pet_url()).json(pet))
            .await?
            .into_pet()
    }

    /// Gets a pet by ID.
    pub async fn get_pet(&self, pet_id: i64) -> Result<Pet, PetstoreError> {
        self.send(self.http_client.get(self.pet_id_url(pet_id)))
            .await?
            .into_pet()
    }

    /// Gets a pet by ID, overriding the client timeout for this request.
    pub async fn get_pet_with_timeout(
        &self,
        pet_id: i64,
        timeout: Duration,
    ) -> Result<Pet, PetstoreError> {
        self.send(self.http_client.get(self.pet_id_url(pet_id)).timeout(timeout))
            .await?
            .into_pet()
    }
}
