//! Integration tests against the live Swagger Petstore demo.
//!
//! These tests require a petstore API key and are ignored by default.
//!
//! # Running Tests
//!
//! 1. Create a `.env` file in the project root with `PETSTORE_API_KEY=...`
//!    (the public demo accepts `special-key`)
//! 2. Run with: `cargo test -- --ignored`
//!
//! # Environment Variables
//!
//! | Variable | Required | Description |
//! |----------|----------|-------------|
//! | `PETSTORE_API_KEY` | Yes | Sent in the `api_key` header |
//! | `PETSTORE_BASE_URL` | No | Run the suite against another petstore |
//! | `PETSTORE_TIMEOUT_SECS` | No | Total request timeout |
//!
//! The demo shares one store between all users and drops writes; cases that
//! depend on persistence run under a known issue and pass either way.
