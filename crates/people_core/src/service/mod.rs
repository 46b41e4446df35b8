//! Person use-case services.
//!
//! # Responsibility
//! - Validate and convert raw person input.
//! - Delegate persistence to an injected `DataAccess` collaborator.

pub mod height;
pub mod person_processor;
