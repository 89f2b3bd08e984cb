//! Bugz CLI - load a directory of JSON bug reports into SQLite

use anyhow::Context;
use bugz::config::{self, Settings};
use bugz::storage::BugStore;
use bugz::ui::{self, Icons};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "bugz")]
#[command(version)]
#[command(about = "Import JSON bug reports into a SQLite database")]
#[command(long_about = r#"
Bugz reads every *.json file directly inside a directory, one bug per file,
and inserts each into the `bugs` table of a SQLite database. The table is
created if it does not exist. The first failing file aborts the run; rows
imported before it are kept.

Example usage:
  bugz
  bugz --dir ./reports --database data/bugs.db
"#)]
struct Cli {
    /// Directory containing bug JSON files (default: current directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Path to the database file (default: bugs.db)
    #[arg(long)]
    database: Option<PathBuf>,

    /// Path to the config file (default: bugz.toml, optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = run(cli) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let file_config = config::load_config(cli.config.as_deref())
        .context("failed to load config")?;
    let settings = Settings::resolve(cli.database, cli.dir, file_config.as_ref());

    config::ensure_db_dir(&settings.database)
        .with_context(|| format!("failed to create directory for {}", settings.database.display()))?;

    let store = BugStore::open(&settings.database).with_context(|| {
        format!("failed to open database {}", settings.database.display())
    })?;

    if cli.verbose {
        ui::header("Importing bugs");
        ui::info(Icons::FOLDER, "Directory", &settings.directory.display().to_string());
        ui::info(Icons::DATABASE, "Database", &settings.database.display().to_string());
    }

    let report = bugz::import_directory(&store, &settings.directory)
        .context("error importing bugs from JSON")?;
    let total = store.count_bugs()?;
    store.close()?;

    tracing::info!(
        "Imported {} bug(s) from {}",
        report.count(),
        report.directory.display()
    );

    if cli.verbose {
        println!(
            "{}",
            ui::summary_table(&[
                ("Files imported", report.count().to_string()),
                ("Rows in database", total.to_string()),
            ])
        );
    }
    ui::success("Database and schema are ready. Bugs imported successfully.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_for(dir: &std::path::Path) -> Cli {
        Cli::try_parse_from([
            "bugz",
            "--dir",
            dir.to_str().unwrap(),
            "--database",
            dir.join("out").join("bugs.db").to_str().unwrap(),
            "--config",
            dir.join("absent.toml").to_str().unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_defaults_match_bare_invocation() {
        let cli = Cli::try_parse_from(["bugz"]).unwrap();
        assert!(cli.dir.is_none());
        assert!(cli.database.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_failed_run_yields_one_message_naming_the_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), r#"{"id":1}"#).unwrap();
        std::fs::write(dir.path().join("b.json"), r#"{"id":"#).unwrap();

        let err = run(cli_for(dir.path())).unwrap_err();
        let message = format!("{:#}", err);

        assert!(message.starts_with("error importing bugs from JSON: error decoding JSON from file"));
        assert_eq!(message.matches("b.json").count(), 1);
        assert_eq!(message.matches("EOF while parsing").count(), 1);
    }

    #[test]
    fn test_successful_run_imports_and_closes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), r#"{"id":1,"summary":"ok"}"#).unwrap();

        run(cli_for(dir.path())).unwrap();

        let store = BugStore::open(&dir.path().join("out").join("bugs.db")).unwrap();
        assert_eq!(store.count_bugs().unwrap(), 1);
    }
}
