//! Pet payload types exchanged with the petstore API.
//!
//! The JSON shape follows the Swagger Petstore `Pet` definition:
//!
//! | Field | JSON type | Notes |
//! |-------|-----------|-------|
//! | `id` | integer | Server-assigned, omitted on create |
//! | `category` | `{id, name}` | |
//! | `name` | string | |
//! | `photoUrls` | array of strings | Ordered |
//! | `tags` | array of `{id, name}` | Ordered |
//! | `status` | string | Not validated by the service |

use core::fmt;

use serde::{Deserialize, Serialize};

/// Pet name used by the template payload.
pub const TEMPLATE_NAME: &str = "Good_Doggo";

/// Placeholder string the template uses for category, tag and photo values.
pub const PLACEHOLDER: &str = "string";

/// A pet category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A tag attached to a pet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

impl Tag {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Pet status in the store.
///
/// The service documents `available`, `pending` and `sold` but accepts any
/// string, so unknown values are kept verbatim in [`PetStatus::Other`].
///
/// # Example
///
/// ```
/// use petstore::PetStatus;
///
/// assert_eq!(PetStatus::from("sold"), PetStatus::Sold);
/// assert_eq!(PetStatus::from("lost").as_str(), "lost");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
    Other(String),
}

impl PetStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::Pending => "pending",
            Self::Sold => "sold",
            Self::Other(s) => s,
        }
    }

    /// Returns `true` for the three statuses the API documents.
    pub fn is_documented(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for PetStatus {
    fn from(s: &str) -> Self {
        match s {
            "available" => Self::Available,
            "pending" => Self::Pending,
            "sold" => Self::Sold,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for PetStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "available" => Self::Available,
            "pending" => Self::Pending,
            "sold" => Self::Sold,
            _ => Self::Other(s),
        }
    }
}

impl From<PetStatus> for String {
    fn from(status: PetStatus) -> Self {
        match status {
            PetStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pet record.
///
/// `id` is assigned by the service; leave it `None` when creating a pet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "photoUrls", default)]
    pub photo_urls: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PetStatus>,
}

impl Pet {
    /// Returns the default valid payload tests start from.
    ///
    /// ```
    /// use petstore::{Pet, PetStatus};
    ///
    /// let pet = Pet::template();
    /// assert_eq!(pet.name, "Good_Doggo");
    /// assert_eq!(pet.status, Some(PetStatus::Available));
    /// assert!(pet.id.is_none());
    /// ```
    pub fn template() -> Self {
        Self {
            id: None,
            category: Some(Category::new(0, PLACEHOLDER)),
            name: TEMPLATE_NAME.to_string(),
            photo_urls: vec![PLACEHOLDER.to_string()],
            tags: vec![Tag::new(0, PLACEHOLDER)],
            status: Some(PetStatus::Available),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<PetStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Renders the pet as a JSON request body.
    pub fn to_value(&self) -> serde_json::Value {
        // Every field serializes to a plain JSON value, so this cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
