use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BugzConfig {
    pub database: Option<String>,
    pub directory: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("bugz.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("bugs.db")
}

pub fn default_import_dir() -> PathBuf {
    PathBuf::from(".")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<BugzConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        tracing::debug!("No config file at {}", path.display());
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: BugzConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(Some(config))
}

/// Paths a run works with, after CLI > config file > default precedence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database: PathBuf,
    pub directory: PathBuf,
}

impl Settings {
    pub fn resolve(
        database: Option<PathBuf>,
        directory: Option<PathBuf>,
        config: Option<&BugzConfig>,
    ) -> Self {
        Self {
            database: database
                .or_else(|| config.and_then(|c| c.database.as_deref()).map(PathBuf::from))
                .unwrap_or_else(default_database_path),
            directory: directory
                .or_else(|| config.and_then(|c| c.directory.as_deref()).map(PathBuf::from))
                .unwrap_or_else(default_import_dir),
        }
    }
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
