//! Person record processing: height parsing, input validation and
//! persistence delegation to a pluggable SQL collaborator.

pub mod data_access;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;

pub use data_access::{
    DataAccess, DataAccessError, DataResult, NoopDataAccess, Record, RecordRow, SqliteDataAccess,
};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{PersonId, PersonModel, UNSAVED_PERSON_ID};
pub use service::height::{convert_height_text_to_inches, HeightConversion};
pub use service::person_processor::{
    InvalidArgumentError, PersonParam, PersonProcessor, LOAD_PEOPLE_SQL, SAVE_PERSON_SQL,
    UPDATE_PERSON_SQL,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
