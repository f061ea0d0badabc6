//! Key-value schema bootstrap.
//!
//! # Invariants
//! - The schema version is mirrored to `PRAGMA user_version`.
//! - Databases stamped by a newer binary are refused, never downgraded.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

const SCHEMA_VERSION: u32 = 1;
const SCHEMA_SQL: &str = include_str!("0001_kv_entries.sql");

/// Schema version written by this binary.
pub fn latest_version() -> u32 {
    SCHEMA_VERSION
}

/// Creates the `kv_entries` table when the database predates it.
///
/// # Errors
/// - `DbError::UnsupportedSchemaVersion` when `user_version` is newer.
/// - `DbError::Sqlite` when the schema script fails; nothing is committed.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let found: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if found > SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: found,
            latest_supported: SCHEMA_VERSION,
        });
    }
    if found == SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA_SQL)?;
    tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tx.commit()?;

    info!(
        "event=db_schema module=db status=ok from_version={} to_version={}",
        found, SCHEMA_VERSION
    );
    Ok(())
}
