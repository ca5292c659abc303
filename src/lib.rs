//! Typed client and fixtures for the Swagger Petstore demo service.
//!
//! The crate is the library half of a black-box API test suite: it holds the
//! session settings, the pre-configured HTTP client, the pet payload model and
//! the structural checks the suite asserts with. The suite itself lives under
//! `tests/`.
//!
//! # Example
//!
//! ```no_run
//! use petstore::config::Settings;
//! use petstore::{CreatePet, Pet, PetStatus, PetStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let settings = Settings::from_env()?;
//! let store = settings.provider()?;
//!
//! let created = store
//!     .create_pet(&Pet::template().with_name("Good_Doggo"))
//!     .await?;
//! let fetched = store.get_pet(created.id.unwrap_or_default()).await?;
//! assert_eq!(fetched.status, Some(PetStatus::Available));
//! # Ok(())
//! # }
//! ```

use std::net::IpAddr;
use std::time::Duration;

use thiserror::Error;

pub mod config;
pub mod payload;
pub mod shape;
pub mod swagger;
pub mod types;

pub use types::{Category, Pet, PetStatus, Tag};

/// HTTP client configuration shared by every client the crate builds.
///
/// # Example
///
/// ```
/// use petstore::HttpClientConfig;
/// use std::time::Duration;
///
/// let config = HttpClientConfig::new().timeout(Duration::from_secs(5));
/// assert_eq!(config.timeout, Some(Duration::from_secs(5)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Local address outgoing connections are bound to.
    pub local_address: Option<IpAddr>,
    /// Network interface outgoing connections are bound to (Unix only).
    pub interface: Option<String>,
    /// Total request timeout. Defaults to 30 seconds when unset.
    pub timeout: Option<Duration>,
}

impl HttpClientConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds outgoing connections to `addr`.
    pub fn local_address(mut self, addr: IpAddr) -> Self {
        self.local_address = Some(addr);
        self
    }

    /// Binds outgoing connections to the named interface.
    pub fn interface(mut self, name: impl Into<String>) -> Self {
        self.interface = Some(name.into());
        self
    }

    /// Sets the total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Errors returned when retrieving a pet.
#[derive(Debug, Error)]
pub enum RetrievePetError<T> {
    /// No pet exists with the requested ID.
    #[error("pet not found")]
    NotFound,

    /// The API key was rejected.
    #[error("unauthorized")]
    Unauthorized,

    /// Provider-specific failure.
    #[error("{0}")]
    Custom(T),
}

/// Errors returned when creating a pet.
#[derive(Debug, Error)]
pub enum CreatePetError<T> {
    /// The API key was rejected.
    #[error("unauthorized")]
    Unauthorized,

    /// The service rejected the payload.
    #[error("invalid pet: {0}")]
    InvalidPet(String),

    /// Provider-specific failure.
    #[error("{0}")]
    Custom(T),
}

/// Errors returned when updating a pet.
#[derive(Debug, Error)]
pub enum UpdatePetError<T> {
    /// No pet exists with the ID carried by the payload.
    #[error("pet not found")]
    NotFound,

    /// The API key was rejected.
    #[error("unauthorized")]
    Unauthorized,

    /// The service rejected the payload.
    #[error("invalid pet: {0}")]
    InvalidPet(String),

    /// Provider-specific failure.
    #[error("{0}")]
    Custom(T),
}

/// A pet store that can look pets up by ID.
pub trait PetStore {
    type CustomRetrieveError;

    /// Fetches the pet with the given ID.
    async fn get_pet(&self, pet_id: i64) -> Result<Pet, RetrievePetError<Self::CustomRetrieveError>>;
}

/// A pet store that accepts new pets.
pub trait CreatePet: PetStore {
    type CustomCreateError;

    /// Creates a pet and returns the record as stored, including its
    /// server-assigned ID.
    async fn create_pet(&self, pet: &Pet) -> Result<Pet, CreatePetError<Self::CustomCreateError>>;
}

/// A pet store that accepts updates to existing pets.
pub trait UpdatePet: PetStore {
    type CustomUpdateError;

    /// Replaces the pet identified by `pet.id` and returns the updated record.
    async fn update_pet(&self, pet: &Pet) -> Result<Pet, UpdatePetError<Self::CustomUpdateError>>;
}
