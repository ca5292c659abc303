//! Structural checks for pet response bodies.
//!
//! The service is loosely typed, so the suite checks the shape of the raw JSON
//! before trusting any value in it.

use serde_json::Value;
use thiserror::Error;

/// Keys every pet response must carry.
pub const PET_KEYS: [&str; 6] = ["id", "category", "name", "photoUrls", "tags", "status"];

/// A structural violation in a pet body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The body (or a nested element) is not a JSON object.
    #[error("{path} is not an object")]
    NotAnObject { path: String },

    /// A required key is absent.
    #[error("{path} is missing key `{key}`")]
    MissingKey { path: String, key: &'static str },

    /// A value has the wrong JSON type.
    #[error("{path} should be {expected}")]
    WrongType { path: String, expected: &'static str },
}

/// Checks that `body` looks like a pet:
///
/// - all of [`PET_KEYS`] are present;
/// - `category` is an object with `id` and `name`;
/// - `photoUrls` is an array of strings;
/// - `tags` is an array of objects with `id` and `name`.
///
/// ```
/// use petstore::shape::check_pet_shape;
/// use serde_json::json;
///
/// let body = json!({
///     "id": 1,
///     "category": {"id": 0, "name": "string"},
///     "name": "Good_Doggo",
///     "photoUrls": ["string"],
///     "tags": [{"id": 0, "name": "string"}],
///     "status": "available"
/// });
/// assert!(check_pet_shape(&body).is_ok());
/// ```
pub fn check_pet_shape(body: &Value) -> Result<(), ShapeError> {
    let pet = body.as_object().ok_or_else(|| ShapeError::NotAnObject {
        path: "$".to_string(),
    })?;

    for key in PET_KEYS {
        if !pet.contains_key(key) {
            return Err(ShapeError::MissingKey {
                path: "$".to_string(),
                key,
            });
        }
    }

    check_id_name(&pet["category"], "$.category")?;

    let photo_urls = pet["photoUrls"]
        .as_array()
        .ok_or_else(|| ShapeError::WrongType {
            path: "$.photoUrls".to_string(),
            expected: "an array",
        })?;
    for (i, url) in photo_urls.iter().enumerate() {
        if !url.is_string() {
            return Err(ShapeError::WrongType {
                path: format!("$.photoUrls[{}]", i),
                expected: "a string",
            });
        }
    }

    let tags = pet["tags"].as_array().ok_or_else(|| ShapeError::WrongType {
        path: "$.tags".to_string(),
        expected: "an array",
    })?;
    for (i, tag) in tags.iter().enumerate() {
        check_id_name(tag, &format!("$.tags[{}]", i))?;
    }

    Ok(())
}

/// Category and tag objects share the `{id, name}` shape.
fn check_id_name(value: &Value, path: &str) -> Result<(), ShapeError> {
    let object = value.as_object().ok_or_else(|| ShapeError::NotAnObject {
        path: path.to_string(),
    })?;

    for key in ["id", "name"] {
        if !object.contains_key(key) {
            return Err(ShapeError::MissingKey {
                path: path.to_string(),
                key,
            });
        }
    }

    Ok(())
}
