#![no_main]

use libfuzzer_sys::fuzz_target;
use petstore::shape::{check_pet_shape, PET_KEYS};
use petstore::Pet;

fuzz_target!(|data: &str| {
    let Ok(body) = serde_json::from_str::<serde_json::Value>(data) else {
        return;
    };

    if check_pet_shape(&body).is_ok() {
        assert!(body.is_object());
        for key in PET_KEYS {
            assert!(body.get(key).is_some(), "Shape check passed without `{}`", key);
        }
    }
    let _ = serde_json::from_value::<Pet>(body);
});
