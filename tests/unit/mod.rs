//! Unit tests for the payload model and helpers.
//!
//! These tests focus on serialization, payload edits, client configuration
//! and the known-issue runner, and don't require network access or mock
//! servers.

mod known_issue;
mod types;
