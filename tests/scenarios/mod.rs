//! Suite scenarios shared by the live and mock-backed tests.
//!
//! Each scenario takes an owned [`Client`](petstore::swagger::Client) so it can
//! run under [`known_issue`](crate::common::known_issue), and asserts on status
//! codes and response bodies exactly as the suite requires. The callers decide
//! which service the client points at.

pub mod put_pet;

/// The demo does not persist created pets reliably.
pub const CREATED_PETS_NOT_PERSISTED: &str =
    "Swagger Petstore demo API does not persist created pets reliably";

/// The demo does not persist updates reliably.
pub const UPDATES_NOT_PERSISTED: &str =
    "Swagger Petstore demo API does not consistently persist updates";

/// The demo may answer 200 for IDs that were never created.
pub const NONEXISTENT_IDS_FOUND: &str =
    "Swagger Petstore demo API may return 200 for nonexistent IDs";

pub const STATUS_NOT_VALIDATED: &str = "Petstore API does not validate status";

pub const NEGATIVE_IDS_ACCEPTED: &str = "Petstore API accepts negative IDs";
