//! SQLite store bootstrap for the `Person` table.
//!
//! # Responsibility
//! - Open and configure SQLite connections used by `SqliteDataAccess`.
//! - Bring the schema up to date before handing a connection out.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Person store failure.
#[derive(Debug)]
pub enum DbError {
    /// The store file could not be opened or created.
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },
    /// Statement, pragma or transaction failure on an open connection.
    Sqlite(rusqlite::Error),
    /// The store was migrated by a newer build.
    SchemaTooNew { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "cannot open person store `{}`: {source}", path.display())
            }
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "person store schema v{found} requires a newer build (this build supports up to v{supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Sqlite(source) => Some(source),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
