//! Person store schema versions.
//!
//! # Invariants
//! - Versions are listed in strictly increasing order.
//! - The applied version is mirrored to `PRAGMA user_version`.
//! - All pending steps commit together or not at all.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// `(version, script)` pairs, oldest first.
const SCHEMA_STEPS: &[(u32, &str)] = &[(1, include_str!("0001_person.sql"))];

/// Returns the newest schema version this build can write.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |(version, _)| *version)
}

/// Upgrades the store behind `conn` to `latest_version()`.
///
/// # Errors
/// - `SchemaTooNew` when the store is ahead of this build.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let found: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    let supported = latest_version();
    if found > supported {
        return Err(DbError::SchemaTooNew { found, supported });
    }

    let mut pending = SCHEMA_STEPS
        .iter()
        .filter(|(version, _)| *version > found)
        .peekable();
    if pending.peek().is_none() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, script) in pending {
        tx.execute_batch(script)?;
        tx.pragma_update(None, "user_version", version)?;
        info!("event=db_migrate module=db status=ok version={version}");
    }
    tx.commit()?;
    Ok(())
}
