//! Database schema creation.

use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the schema if it does not exist yet. Idempotent, so every command
/// can call it before touching the store.
///
/// Shift columns are TEXT on purpose: spreadsheet-era exports carried numeric
/// date serials next to plain strings, and normalization of whatever is in a
/// cell is the reader's job, not the schema's.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS shifts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL DEFAULT '',
            start TEXT NOT NULL DEFAULT '',
            "end" TEXT NOT NULL DEFAULT '',
            hours TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS audit (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            operation TEXT NOT NULL,
            target TEXT NOT NULL DEFAULT '',
            message TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}
