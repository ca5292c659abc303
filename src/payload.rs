//! Raw JSON payload edits.
//!
//! Negative tests send values a [`Pet`](crate::Pet) cannot hold (a boolean
//! name, an array category), so they edit the rendered JSON instead.

use serde_json::{Map, Value};

/// Replaces top-level `field` of a JSON object with `value`.
///
/// Inserts the field when it is missing. Non-object payloads are replaced by
/// a single-field object.
///
/// ```
/// use petstore::payload::override_field;
/// use petstore::Pet;
/// use serde_json::json;
///
/// let body = override_field(Pet::template().to_value(), "name", json!(true));
/// assert_eq!(body["name"], json!(true));
/// assert_eq!(body["status"], json!("available"));
/// ```
pub fn override_field(payload: Value, field: &str, value: Value) -> Value {
    let mut object = match payload {
        Value::Object(object) => object,
        _ => Map::new(),
    };
    object.insert(field.to_string(), value);
    Value::Object(object)
}

