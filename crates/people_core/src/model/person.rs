//! Person domain model.
//!
//! # Responsibility
//! - Define the canonical person record read from and written to `Person`.
//!
//! # Invariants
//! - `id` is assigned by the store; `0` marks an unsaved record.
//! - Serialized field names match the `Person` table columns.

use serde::{Deserialize, Serialize};

/// Store-assigned person identifier.
pub type PersonId = i64;

/// Identifier carried by records that have not been persisted yet.
pub const UNSAVED_PERSON_ID: PersonId = 0;

/// One person record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonModel {
    /// Store-assigned row id. `0` until persisted.
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    /// Total height in inches (`feet * 12 + inches`).
    pub height_in_inches: f64,
}

impl PersonModel {
    /// Creates an unsaved person record.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        height_in_inches: f64,
    ) -> Self {
        Self {
            id: UNSAVED_PERSON_ID,
            first_name: first_name.into(),
            last_name: last_name.into(),
            height_in_inches,
        }
    }

    /// Returns whether the store has assigned an id to this record.
    pub fn is_persisted(&self) -> bool {
        self.id != UNSAVED_PERSON_ID
    }
}
