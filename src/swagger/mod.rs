//! Swagger Petstore provider.
//!
//! Wraps the low-level [`api::Client`] and implements the crate's
//! [`PetStore`], [`CreatePet`] and [`UpdatePet`] traits on top of it.
//!
//! # Authentication
//!
//! Every request carries an `api_key` header. The public demo accepts any
//! value; the suite reads it from `PETSTORE_API_KEY`.
//!
//! # Example
//!
//! ```no_run
//! use petstore::swagger::SwaggerPetstore;
//! use petstore::{CreatePet, Pet, UpdatePet};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let provider = SwaggerPetstore::new("special-key")?;
//!
//! let created = provider
//!     .create_pet(&Pet::template().with_name("German_Sheppard").with_status("sold"))
//!     .await?;
//!
//! let id = created.id.unwrap_or_default();
//! let updated = provider
//!     .update_pet(&created.clone().with_id(id).with_name("Retriever").with_status("available"))
//!     .await?;
//! println!("{} is now {:?}", updated.name, updated.status);
//! # Ok(())
//! # }
//! ```
//!
//! # Known Service Behaviour
//!
//! The public demo shares one store between all users and does not persist
//! writes reliably: a `GET` right after `POST` or `PUT` may return 404 or a
//! stale record. It also accepts any `status` string and negative IDs.

pub mod api;

use std::error::Error as StdErr;
use std::sync::Arc;

pub use api::{ApiMessage, Client, PetstoreError, RawResponse};

use crate::{
    CreatePet, CreatePetError, HttpClientConfig, Pet, PetStore, RetrievePetError, UpdatePet,
    UpdatePetError,
};

/// Swagger Petstore provider.
#[derive(Debug, Clone)]
pub struct SwaggerPetstore {
    api_client: Arc<Client>,
}

impl SwaggerPetstore {
    /// Creates a provider for the public Petstore.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use petstore::swagger::SwaggerPetstore;
    ///
    /// let provider = SwaggerPetstore::new("special-key").unwrap();
    /// ```
    pub fn new(api_key: &str) -> Result<Self, Box<dyn StdErr + Send + Sync>> {
        let api_client = Client::new(api_key)?;
        Ok(Self::from_client(api_client))
    }

    /// Creates a provider with custom HTTP client configuration.
    pub fn with_config(
        api_key: &str,
        config: HttpClientConfig,
    ) -> Result<Self, Box<dyn StdErr + Send + Sync>> {
        let api_client = Client::with_config(api_key, config)?;
        Ok(Self::from_client(api_client))
    }

    /// Creates a provider with a custom API base URL.
    ///
    /// This is primarily useful for testing with mock servers.
    pub fn with_base_url(
        api_key: &str,
        base_url: &str,
    ) -> Result<Self, Box<dyn StdErr + Send + Sync>> {
        let api_client = Client::with_base_url(api_key, base_url, HttpClientConfig::default())?;
        Ok(Self::from_client(api_client))
    }

    /// Wraps an already configured client.
    pub fn from_client(api_client: Client) -> Self {
        Self {
            api_client: Arc::new(api_client),
        }
    }

    /// Returns the low-level client, for raw requests.
    pub fn api(&self) -> &Client {
        &self.api_client
    }
}

impl PetStore for SwaggerPetstore {
    type CustomRetrieveError = PetstoreError;

    async fn get_pet(
        &self,
        pet_id: i64,
    ) -> Result<Pet, RetrievePetError<Self::CustomRetrieveError>> {
        self.api_client
            .get_pet(pet_id)
            .await
            .map_err(|err| match err {
                PetstoreError::NotFound(_) => RetrievePetError::NotFound,
                PetstoreError::Unauthorized { .. } => RetrievePetError::Unauthorized,
                _ => RetrievePetError::Custom(err),
            })
    }
}

impl CreatePet for SwaggerPetstore {
    type CustomCreateError = PetstoreError;

    async fn create_pet(&self, pet: &Pet) -> Result<Pet, CreatePetError<Self::CustomCreateError>> {
        self.api_client
            .create_pet(pet)
            .await
            .map_err(|err| match err {
                PetstoreError::Unauthorized { .. } => CreatePetError::Unauthorized,
                PetstoreError::InvalidInput { message, .. } => {
                    CreatePetError::InvalidPet(message.message)
                }
                _ => CreatePetError::Custom(err),
            })
    }
}

impl UpdatePet for SwaggerPetstore {
    type CustomUpdateError = PetstoreError;

    async fn update_pet(&self, pet: &Pet) -> Result<Pet, UpdatePetError<Self::CustomUpdateError>> {
        self.api_client
            .update_pet(pet)
            .await
            .map_err(|err| match err {
                PetstoreError::NotFound(_) => UpdatePetError::NotFound,
                PetstoreError::Unauthorized { .. } => UpdatePetError::Unauthorized,
                PetstoreError::InvalidInput { message, .. } => {
                    UpdatePetError::InvalidPet(message.message)
                }
                _ => UpdatePetError::Custom(err),
            })
    }
}
