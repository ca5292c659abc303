//! `PUT /pet` on a freshly created pet, verified through `GET`.

use std::time::Duration;

use petstore::swagger::Client;
use petstore::{Pet, PetStatus};
use reqwest::StatusCode;

pub async fn put_pet_updates_existing_pet(client: Client) {
    let payload = Pet::template();

    let create_response = client
        .post_pet_json(&payload.to_value())
        .await
        .expect("POST /pet failed");
    assert_eq!(create_response.status, StatusCode::OK);
    let pet_id = create_response
        .pet()
        .expect("Created pet should decode")
        .id
        .expect("Created pet should carry an id");

    // 200 or 404 are both legitimate answers here; only 200 carries a name.
    let new_pet = match client
        .get_pet_with_timeout(pet_id, Duration::from_secs(5))
        .await
    {
        Ok(pet) => pet,
        Err(err) => {
            assert_eq!(err.status(), Some(StatusCode::NOT_FOUND), "{}", err);
            panic!("Pet {} was not found after creation", pet_id);
        }
    };
    assert_eq!(new_pet.name, payload.name);

    let updated = new_pet.with_name("Better_Doggo").with_status("sold");
    let put_response = client
        .put_pet_json(&updated.to_value())
        .await
        .expect("PUT /pet failed");
    assert_eq!(put_response.status, StatusCode::OK);

    let updated_pet = client
        .get_pet(pet_id)
        .await
        .expect("GET /pet/{id} after update failed");
    assert_eq!(updated_pet.name, "Better_Doggo");
    assert_eq!(updated_pet.status, Some(PetStatus::Sold));
    assert_eq!(updated_pet.id, Some(pet_id));
}
