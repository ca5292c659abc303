#![no_main]

use libfuzzer_sys::fuzz_target;
use petstore::swagger::RawResponse;
use reqwest::StatusCode;

// Test error mapping with arbitrary statuses and bodies
fuzz_target!(|data: (u16, &str)| {
    let (code, text) = data;
    let Ok(status) = StatusCode::from_u16(code) else {
        return;
    };

    let response = RawResponse {
        status,
        body: serde_json::from_str(text).ok(),
        text: text.to_string(),
    };

    if let Err(err) = response.into_pet() {
        if let Some(err_status) = err.status() {
            assert_eq!(err_status, status);
        }
    }
});
