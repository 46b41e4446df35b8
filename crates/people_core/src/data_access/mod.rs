//! Data-access collaborator contract and implementations.
//!
//! # Responsibility
//! - Define the `DataAccess` seam the person processor delegates to.
//! - Map records to and from named SQL columns (`RecordRow`).
//! - Provide SQLite-backed and no-op collaborators.
//!
//! # Invariants
//! - Collaborators execute the SQL they are given verbatim.
//! - Named placeholders (`@Column`) bind from the record column of the same name.

use crate::db::DbError;
use rusqlite::types::Value;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod person;
mod sqlite;

pub use person::{COLUMN_FIRST_NAME, COLUMN_HEIGHT_IN_INCHES, COLUMN_ID, COLUMN_LAST_NAME};
pub use sqlite::SqliteDataAccess;

pub type DataResult<T> = Result<T, DataAccessError>;

/// Failure raised by a data-access collaborator.
#[derive(Debug)]
pub enum DataAccessError {
    /// Store transport, SQL or schema failure.
    Db(DbError),
    /// SQL placeholder or result column has no counterpart on the record.
    MissingColumn(String),
    /// Positional placeholder where only named ones are supported.
    UnnamedParameter(usize),
    /// Column value has a type the record cannot accept.
    InvalidData { column: String, message: String },
}

impl Display for DataAccessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingColumn(column) => write!(f, "missing column `{column}`"),
            Self::UnnamedParameter(index) => {
                write!(f, "unnamed SQL parameter at position {index}")
            }
            Self::InvalidData { column, message } => {
                write!(f, "invalid value in column `{column}`: {message}")
            }
        }
    }
}

impl Error for DataAccessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for DataAccessError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for DataAccessError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// One record flattened into named SQL values.
///
/// Lookups try the exact column name first and fall back to an
/// ASCII case-insensitive match, since SQL identifiers are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordRow {
    columns: BTreeMap<String, Value>,
}

impl RecordRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column).or_else(|| {
            self.columns
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(column))
                .map(|(_, value)| value)
        })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Reads an integer column.
    pub fn integer(&self, column: &str) -> DataResult<i64> {
        match self.require(column)? {
            Value::Integer(value) => Ok(*value),
            other => Err(invalid_type(column, "integer", other)),
        }
    }

    /// Reads a text column.
    pub fn text(&self, column: &str) -> DataResult<String> {
        match self.require(column)? {
            Value::Text(value) => Ok(value.clone()),
            other => Err(invalid_type(column, "text", other)),
        }
    }

    /// Reads a real column; integer storage is widened.
    pub fn real(&self, column: &str) -> DataResult<f64> {
        match self.require(column)? {
            Value::Real(value) => Ok(*value),
            Value::Integer(value) => Ok(*value as f64),
            other => Err(invalid_type(column, "real", other)),
        }
    }

    fn require(&self, column: &str) -> DataResult<&Value> {
        self.get(column)
            .ok_or_else(|| DataAccessError::MissingColumn(column.to_string()))
    }
}

fn invalid_type(column: &str, expected: &str, actual: &Value) -> DataAccessError {
    DataAccessError::InvalidData {
        column: column.to_string(),
        message: format!("expected {expected}, got {:?}", actual.data_type()),
    }
}

/// Record type that can round-trip through named SQL columns.
pub trait Record: Sized {
    /// Flattens the record into column values used for parameter binding.
    fn to_row(&self) -> RecordRow;
    /// Rebuilds the record from a result row.
    fn from_row(row: &RecordRow) -> DataResult<Self>;
}

/// Collaborator executing SQL against a person store.
pub trait DataAccess {
    /// Runs a read query and maps every result row into `T`.
    fn load_data<T: Record>(&self, sql: &str) -> DataResult<Vec<T>>;
    /// Runs an insert statement bound from `record`.
    fn save_data<T: Record>(&self, record: &T, sql: &str) -> DataResult<()>;
    /// Runs an update statement bound from `record`.
    fn update_data<T: Record>(&self, record: &T, sql: &str) -> DataResult<()>;
}

impl<D: DataAccess> DataAccess for &D {
    fn load_data<T: Record>(&self, sql: &str) -> DataResult<Vec<T>> {
        (**self).load_data(sql)
    }

    fn save_data<T: Record>(&self, record: &T, sql: &str) -> DataResult<()> {
        (**self).save_data(record, sql)
    }

    fn update_data<T: Record>(&self, record: &T, sql: &str) -> DataResult<()> {
        (**self).update_data(record, sql)
    }
}

/// Collaborator for callers that never touch persistence.
///
/// Reads return no rows and writes succeed without effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDataAccess;

impl DataAccess for NoopDataAccess {
    fn load_data<T: Record>(&self, _sql: &str) -> DataResult<Vec<T>> {
        Ok(Vec::new())
    }

    fn save_data<T: Record>(&self, _record: &T, _sql: &str) -> DataResult<()> {
        Ok(())
    }

    fn update_data<T: Record>(&self, _record: &T, _sql: &str) -> DataResult<()> {
        Ok(())
    }
}
