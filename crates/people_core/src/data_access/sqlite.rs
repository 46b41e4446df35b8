//! SQLite-backed `DataAccess` implementation.
//!
//! # Invariants
//! - Every statement placeholder must be named and present on the record.
//! - Record columns without a placeholder are not bound.
//! - Updates touching zero rows succeed; the row count is only logged.

use super::{DataAccess, DataAccessError, DataResult, Record, RecordRow};
use log::debug;
use rusqlite::types::Value;
use rusqlite::{Connection, Statement};

/// Named-parameter collaborator over a borrowed SQLite connection.
pub struct SqliteDataAccess<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDataAccess<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn execute<T: Record>(&self, record: &T, sql: &str) -> DataResult<usize> {
        let mut stmt = self.conn.prepare(sql)?;
        bind_named_parameters(&mut stmt, &record.to_row())?;
        Ok(stmt.raw_execute()?)
    }
}

impl DataAccess for SqliteDataAccess<'_> {
    fn load_data<T: Record>(&self, sql: &str) -> DataResult<Vec<T>> {
        let mut stmt = self.conn.prepare(sql)?;
        let column_names: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let mut record_row = RecordRow::new();
            for (index, name) in column_names.iter().enumerate() {
                record_row.insert(name.as_str(), row.get::<_, Value>(index)?);
            }
            records.push(T::from_row(&record_row)?);
        }

        debug!(
            "event=data_load module=data_access status=ok rows={}",
            records.len()
        );
        Ok(records)
    }

    fn save_data<T: Record>(&self, record: &T, sql: &str) -> DataResult<()> {
        let changed = self.execute(record, sql)?;
        debug!("event=data_save module=data_access status=ok rows={changed}");
        Ok(())
    }

    fn update_data<T: Record>(&self, record: &T, sql: &str) -> DataResult<()> {
        let changed = self.execute(record, sql)?;
        debug!("event=data_update module=data_access status=ok rows={changed}");
        Ok(())
    }
}

fn bind_named_parameters(stmt: &mut Statement<'_>, row: &RecordRow) -> DataResult<()> {
    for index in 1..=stmt.parameter_count() {
        let column = stmt
            .parameter_name(index)
            .map(|name| name.trim_start_matches(['@', ':', '$']).to_string())
            .ok_or(DataAccessError::UnnamedParameter(index))?;
        let value = row
            .get(&column)
            .ok_or_else(|| DataAccessError::MissingColumn(column.clone()))?;
        stmt.raw_bind_parameter(index, value)?;
    }
    Ok(())
}
