#![no_main]

//! Fuzz testing for pet decoding.
//!
//! Response bodies come from a loosely typed service, so decoding arbitrary
//! bytes must never panic, and any pet that decodes must re-encode to a body
//! that decodes to the same pet.

use libfuzzer_sys::fuzz_target;
use petstore::Pet;

fuzz_target!(|data: &[u8]| {
    if let Ok(pet) = serde_json::from_slice::<Pet>(data) {
        let encoded = pet.to_value();
        let decoded: Pet = serde_json::from_value(encoded).expect("Should roundtrip");
        assert_eq!(pet, decoded);
    }
});
