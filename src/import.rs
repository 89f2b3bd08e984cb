//! Import pipeline - directory scan, decode, insert
//!
//! Files are handled one at a time: read, decode into a [`Bug`], re-encode,
//! insert. The first failure aborts the run. There is no enclosing
//! transaction, so rows inserted before the failure stay committed.

use std::path::{Path, PathBuf};

use crate::bug::Bug;
use crate::storage::BugStore;
use crate::{Error, Result};

/// File name suffix selecting bug files (case sensitive)
pub const BUG_FILE_SUFFIX: &str = ".json";

/// Outcome of a successful import run
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub directory: PathBuf,
    pub imported: Vec<ImportedFile>,
}

impl ImportReport {
    pub fn count(&self) -> usize {
        self.imported.len()
    }
}

/// One file that made it into the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedFile {
    pub path: PathBuf,
    pub id: i64,
}

/// Whether a directory entry name selects a bug file.
///
/// Matches on the name alone, so a bare `.json` counts and `.JSON` does not.
pub fn is_bug_file_name(name: &str) -> bool {
    name.ends_with(BUG_FILE_SUFFIX)
}

/// List the bug files directly inside `dir`, sorted by file name.
///
/// No recursion and no file-type filtering: anything whose name matches is
/// returned, and a non-regular entry fails later when it is read.
pub fn discover_bug_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir_err = |source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let name = entry.file_name();
        if is_bug_file_name(&name.to_string_lossy()) {
            files.push(entry.path());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Read, decode, re-encode and insert a single bug file
pub fn import_file(store: &BugStore, path: &Path) -> Result<ImportedFile> {
    let data = std::fs::read(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let bug = Bug::from_json_slice(&data).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let bug_json = bug.to_json_string().map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    store
        .insert_bug(&bug, &bug_json)
        .map_err(|source| Error::Insert {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(ImportedFile {
        path: path.to_path_buf(),
        id: bug.id,
    })
}

/// Import every bug file in `dir` into `store`, stopping at the first error
pub fn import_directory(store: &BugStore, dir: &Path) -> Result<ImportReport> {
    let files = discover_bug_files(dir)?;
    tracing::info!("Found {} bug file(s) in {}", files.len(), dir.display());

    let mut report = ImportReport {
        directory: dir.to_path_buf(),
        imported: Vec::with_capacity(files.len()),
    };

    for path in &files {
        let imported = import_file(store, path)?;
        tracing::debug!("Imported bug {} from {}", imported.id, path.display());
        report.imported.push(imported);
    }

    Ok(report)
}
