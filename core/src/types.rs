//! Domain DTO for the Countries API.
//!
//! # Design
//! Mirrors the mock-server's schema but is defined independently; the
//! integration test catches drift between the two crates. An `id` of `0` on
//! the wire means "not yet persisted" and only ever appears in create
//! payloads.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the backend.
pub type CountryId = i64;

/// Wire id sent with a record that has not been created yet.
pub const UNSAVED_ID: CountryId = 0;

/// A single country record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
}

impl Country {
    pub fn new(id: CountryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
