//! Row store contract and its SQLite-backed implementation.
//!
//! The contract mirrors a spreadsheet row API: read everything, append one
//! row with a store-assigned id, delete one row by id. No batching, no
//! update-in-place (edits are delete + re-create), no concurrency tokens.

use crate::db::audit;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::raw::{RawField, RawShiftRow};
use rusqlite::params;

/// A shift about to be created. All fields travel as strings, exactly the
/// way the row store keeps them.
#[derive(Debug, Clone)]
pub struct NewShiftRow {
    pub date: String,
    pub start: String,
    pub end: String,
    pub hours: String,
}

pub trait ShiftStore {
    /// All rows in storage order. Fields come back untyped; normalization is
    /// the caller's job.
    fn fetch(&self) -> AppResult<Vec<RawShiftRow>>;

    /// Append one row; the store assigns the id.
    fn create(&self, row: &NewShiftRow) -> AppResult<()>;

    /// Remove one row by id. Deleting an id that does not exist is a no-op.
    fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }
}

impl ShiftStore for SqliteStore {
    fn fetch(&self) -> AppResult<Vec<RawShiftRow>> {
        let mut stmt = self
            .pool
            .conn
            .prepare(r#"SELECT id, date, start, "end", hours FROM shifts ORDER BY id ASC"#)?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let date: String = row.get(1)?;
            let start: String = row.get(2)?;
            let end: String = row.get(3)?;
            let hours: String = row.get(4)?;
            Ok(RawShiftRow {
                id: id.to_string(),
                date: RawField::classify(&date),
                start: RawField::classify(&start),
                end: RawField::classify(&end),
                hours: RawField::classify(&hours),
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn create(&self, row: &NewShiftRow) -> AppResult<()> {
        self.pool.conn.execute(
            r#"INSERT INTO shifts (date, start, "end", hours) VALUES (?1, ?2, ?3, ?4)"#,
            params![row.date, row.start, row.end, row.hours],
        )?;

        audit::record(
            &self.pool.conn,
            "add",
            &row.date,
            &format!("{} → {} ({} h)", row.start, row.end, row.hours),
        )?;
        Ok(())
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        let removed = self
            .pool
            .conn
            .execute("DELETE FROM shifts WHERE id = ?1", [id])?;

        if removed > 0 {
            audit::record(&self.pool.conn, "del", id, "shift deleted")?;
        }
        Ok(())
    }
}
