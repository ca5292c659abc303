//! Mock-based tests for the petstore client.
//!
//! These tests use wiremock to simulate the service without hitting the live
//! demo. `suite` runs every scenario against the fake petstore, `client`
//! covers request construction and error mapping.
