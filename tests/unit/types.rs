//! Unit tests for the pet payload types.

use petstore::{Category, Pet, PetStatus, Tag};
use serde_json::json;

#[test]
fn test_template_matches_default_payload() {
    assert_eq!(
        Pet::template().to_value(),
        json!({
            "category": {"id": 0, "name": "string"},
            "name": "Good_Doggo",
            "photoUrls": ["string"],
            "tags": [{"id": 0, "name": "string"}],
            "status": "available"
        })
    );
}

#[test]
fn test_template_is_a_fresh_copy() {
    let mut first = Pet::template();
    first.name = "German_Sheppard".to_string();
    first.tags.clear();

    let second = Pet::template();
    assert_eq!(second.name, "Good_Doggo");
    assert_eq!(second.tags, vec![Tag::new(0, "string")]);
}

#[test]
fn test_id_serialized_only_when_set() {
    let value = Pet::template().with_id(42).to_value();
    assert_eq!(value["id"], 42);

    let value = Pet::template().to_value();
    assert!(value.get("id").is_none());
}

#[test]
fn test_decode_server_response() {
    let pet: Pet = serde_json::from_value(json!({
        "id": 9223372036854775807_i64,
        "category": {"id": 0, "name": "string"},
        "name": "Retriever",
        "photoUrls": ["string"],
        "tags": [{"id": 0, "name": "string"}],
        "status": "sold"
    }))
    .unwrap();

    assert_eq!(pet.id, Some(i64::MAX));
    assert_eq!(pet.category, Some(Category::new(0, "string")));
    assert_eq!(pet.name, "Retriever");
    assert_eq!(pet.photo_urls, vec!["string".to_string()]);
    assert_eq!(pet.status, Some(PetStatus::Sold));
}

#[test]
fn test_decode_sparse_response() {
    // The service omits empty collections and unset fields.
    let pet: Pet = serde_json::from_value(json!({"id": 3, "name": "doggie"})).unwrap();

    assert_eq!(pet.id, Some(3));
    assert!(pet.category.is_none());
    assert!(pet.photo_urls.is_empty());
    assert!(pet.tags.is_empty());
    assert!(pet.status.is_none());
}

#[test]
fn test_unknown_status_is_kept_verbatim() {
    let pet = Pet::template().with_status("not_a_status");
    assert_eq!(
        pet.status,
        Some(PetStatus::Other("not_a_status".to_string()))
    );
    assert_eq!(pet.to_value()["status"], "not_a_status");

    let decoded: Pet = serde_json::from_value(pet.to_value()).unwrap();
    assert_eq!(decoded.status, pet.status);
}

#[test]
fn test_documented_statuses() {
    for (raw, status) in [
        ("available", PetStatus::Available),
        ("pending", PetStatus::Pending),
        ("sold", PetStatus::Sold),
    ] {
        assert_eq!(PetStatus::from(raw), status);
        assert!(status.is_documented());
        assert_eq!(status.to_string(), raw);
    }

    assert!(!PetStatus::from("Sold").is_documented());
}
