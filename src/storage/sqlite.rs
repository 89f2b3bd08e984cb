//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, OptionalExtension, params};
use crate::Result;
use crate::bug::Bug;
use super::schema;

/// SQLite-backed storage for imported bugs
pub struct BugStore {
    conn: Connection,
}

impl BugStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        tracing::debug!("Opened bug store at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema.
    ///
    /// Every statement is `IF NOT EXISTS`, so re-running against a
    /// provisioned database leaves tables and rows as they are.
    pub fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute_batch(stmt)?;
        }
        Ok(())
    }

    /// Close the underlying connection, surfacing any error from SQLite
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }

    // ========== Bug Operations ==========

    /// Insert one bug row.
    ///
    /// Plain `INSERT`: a duplicate id fails with a constraint violation.
    /// Runs in autocommit mode, so the row is committed on return.
    /// Returns the raw SQLite error so the caller can attach file context.
    pub fn insert_bug(&self, bug: &Bug, other_fields_json: &str) -> rusqlite::Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO bugs (id, creation_time, creator, summary, other_fields_json)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                bug.id,
                bug.creation_time,
                bug.creator,
                bug.summary,
                other_fields_json,
            ],
        )?;
        Ok(())
    }

    /// Get a stored bug row by id
    pub fn get_bug(&self, id: i64) -> Result<Option<StoredBug>> {
        self.conn
            .query_row(
                "SELECT id, creation_time, creator, summary, other_fields_json FROM bugs WHERE id = ?1",
                [id],
                |row| self.row_to_stored_bug(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Count all bug rows
    pub fn count_bugs(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM bugs", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Number of tables named `bugs` in the schema (0 or 1)
    pub fn count_bug_tables(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'bugs'",
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    fn row_to_stored_bug(&self, row: &rusqlite::Row) -> rusqlite::Result<StoredBug> {
        Ok(StoredBug {
            id: row.get(0)?,
            creation_time: row.get(1)?,
            creator: row.get(2)?,
            summary: row.get(3)?,
            other_fields_json: row.get(4)?,
        })
    }
}

/// A row of the `bugs` table as persisted
#[derive(Debug, Clone, PartialEq)]
pub struct StoredBug {
    pub id: i64,
    pub creation_time: Option<String>,
    pub creator: Option<String>,
    pub summary: Option<String>,
    pub other_fields_json: Option<String>,
}

impl StoredBug {
    /// Decode the catch-all column back into a JSON value
    pub fn other_fields(&self) -> Option<serde_json::Value> {
        self.other_fields_json
            .as_deref()
            .and_then(|s| serde_json::from_str(s).ok())
    }
}
