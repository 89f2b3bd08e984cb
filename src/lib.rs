//! # Bugz - JSON bug report loader
//!
//! Loads a directory of bug-report JSON files into a SQLite database.
//!
//! Bugz provides:
//! - A `Bug` record with four named fields plus the open set of extra fields
//! - SQLite-backed storage that provisions the `bugs` table on open
//! - A sequential import pipeline: one file, one row, abort on first failure

pub mod bug;
pub mod config;
pub mod import;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use bug::Bug;
pub use import::{ImportReport, import_directory};
pub use storage::BugStore;

use std::path::PathBuf;

/// Result type alias for Bugz operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Bugz operations
///
/// Pipeline variants name the offending path; the underlying cause is
/// available through `std::error::Error::source`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Storage(#[from] rusqlite::Error),

    #[error("error reading directory {}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error reading file {}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error decoding JSON from file {}", .path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("error encoding bug from file {} to JSON", .path.display())]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("error inserting bug from file {}", .path.display())]
    Insert {
        path: PathBuf,
        source: rusqlite::Error,
    },
}

impl Error {
    /// Path of the file or directory the error is about, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::ReadDir { path, .. }
            | Error::ReadFile { path, .. }
            | Error::Decode { path, .. }
            | Error::Encode { path, .. }
            | Error::Insert { path, .. } => Some(path.as_path()),
            Error::Storage(_) => None,
        }
    }

    /// Whether the underlying cause is a SQLite constraint violation
    /// (duplicate primary key and the like).
    pub fn is_constraint_violation(&self) -> bool {
        let sqlite_err = match self {
            Error::Storage(e) | Error::Insert { source: e, .. } => e,
            _ => return false,
        };
        matches!(
            sqlite_err.sqlite_error_code(),
            Some(rusqlite::ErrorCode::ConstraintViolation)
        )
    }
}
