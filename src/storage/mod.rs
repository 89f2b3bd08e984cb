//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with a single table:
//! - bugs(id, creation_time, creator, summary, other_fields_json)

pub mod schema;
pub mod sqlite;

pub use sqlite::{BugStore, StoredBug};
