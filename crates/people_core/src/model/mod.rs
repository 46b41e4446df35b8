//! Domain model for person records.
//!
//! # Responsibility
//! - Define the value objects passed between processor and store.
//!
//! # Invariants
//! - `id == 0` means the record has not been persisted yet.

pub mod person;
