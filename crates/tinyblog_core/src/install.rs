//! One-shot database installer.
//!
//! # Responsibility
//! - Create the blog database file and seed it from the install script.
//! - Report post/comment row counts after a successful install.
//!
//! # Invariants
//! - An existing non-empty database file is never touched.
//! - Steps run strictly in sequence; the first failure short-circuits.
//! - Failures are returned to the caller, never raised as panics.

use crate::db::{open_db, DbError};
use log::{error, info, warn};
use rusqlite::Connection;
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Tables whose row counts are reported after a successful install.
const COUNTED_TABLES: [&str; 2] = ["post", "comment"];

pub type InstallResult<T> = Result<T, InstallError>;

/// Installer error kinds, one per failing step.
#[derive(Debug)]
pub enum InstallError {
    /// The database file already exists and holds data.
    AlreadyInstalled { path: PathBuf },
    /// The empty database file could not be created.
    Creation { dir: PathBuf, source: io::Error },
    /// The install script could not be read.
    ScriptMissing { path: PathBuf, source: io::Error },
    /// Running the install script against the new database failed.
    Execution(DbError),
}

impl Display for InstallError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyInstalled { path } => write!(
                f,
                "database `{}` already exists and is not empty; delete it manually before installing afresh",
                path.display()
            ),
            Self::Creation { dir, source } => write!(
                f,
                "could not create the database, the server must be able to create files in `{}`: {source}",
                dir.display()
            ),
            Self::ScriptMissing { path, source } => write!(
                f,
                "cannot read the install script at `{}`: {source}",
                path.display()
            ),
            Self::Execution(err) => write!(f, "could not run the install script: {err}"),
        }
    }
}

impl Error for InstallError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AlreadyInstalled { .. } => None,
            Self::Creation { source, .. } | Self::ScriptMissing { source, .. } => Some(source),
            Self::Execution(err) => Some(err),
        }
    }
}

impl From<DbError> for InstallError {
    fn from(value: DbError) -> Self {
        Self::Execution(value)
    }
}

/// Row counts observed right after a successful install.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstallReport {
    /// Table name to row count. A table is absent when its count query
    /// failed; that is not an install failure.
    pub row_counts: BTreeMap<String, i64>,
}

/// Installs the blog database at `database_path` from the SQL script at
/// `script_path`.
///
/// # Contract
/// - Refuses to run when the database file exists and is non-empty.
/// - Creates exactly one file on the fresh-install path.
/// - The script runs as one batch inside a single transaction.
///
/// # Side effects
/// - Creates the file at `database_path` and populates its schema.
/// - Emits `install` logging events with duration and status.
pub fn install_blog(
    database_path: impl AsRef<Path>,
    script_path: impl AsRef<Path>,
) -> InstallResult<InstallReport> {
    let started_at = Instant::now();
    info!("event=install module=install status=start");

    let result = run_install(database_path.as_ref(), script_path.as_ref());
    match &result {
        Ok(report) => info!(
            "event=install module=install status=ok duration_ms={} tables_counted={}",
            started_at.elapsed().as_millis(),
            report.row_counts.len()
        ),
        Err(err) => error!(
            "event=install module=install status=error duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }
    result
}

fn run_install(database_path: &Path, script_path: &Path) -> InstallResult<InstallReport> {
    ensure_not_installed(database_path)?;
    create_database_file(database_path)?;
    let script = read_install_script(script_path)?;

    let mut conn = open_db(database_path)?;
    execute_install_script(&mut conn, &script)?;

    Ok(InstallReport {
        row_counts: count_seed_rows(&conn),
    })
}

// Safety guard: a database that already holds data must be deleted by the
// operator, never overwritten here.
fn ensure_not_installed(database_path: &Path) -> InstallResult<()> {
    match std::fs::metadata(database_path) {
        Ok(metadata) if metadata.is_file() && metadata.len() > 0 => {
            Err(InstallError::AlreadyInstalled {
                path: database_path.to_path_buf(),
            })
        }
        _ => Ok(()),
    }
}

fn create_database_file(database_path: &Path) -> InstallResult<()> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .open(database_path)
        .map(|_| ())
        .map_err(|source| InstallError::Creation {
            dir: database_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .to_path_buf(),
            source,
        })
}

fn read_install_script(script_path: &Path) -> InstallResult<String> {
    std::fs::read_to_string(script_path).map_err(|source| InstallError::ScriptMissing {
        path: script_path.to_path_buf(),
        source,
    })
}

// The whole script commits or rolls back as one unit, so a half-applied
// schema never survives a failed install.
fn execute_install_script(conn: &mut Connection, script: &str) -> InstallResult<()> {
    let tx = conn.transaction().map_err(DbError::from)?;
    tx.execute_batch(script).map_err(DbError::from)?;
    tx.commit().map_err(DbError::from)?;
    Ok(())
}

// A failed count query leaves that table out of the report instead of
// failing the install; the script itself has already committed.
fn count_seed_rows(conn: &Connection) -> BTreeMap<String, i64> {
    let mut row_counts = BTreeMap::new();
    for table in COUNTED_TABLES {
        let sql = format!("SELECT COUNT(*) FROM {table}");
        match conn.query_row(sql.as_str(), [], |row| row.get::<_, i64>(0)) {
            Ok(count) => {
                row_counts.insert(table.to_string(), count);
            }
            Err(err) => warn!(
                "event=install_count module=install status=error table={table} error={err}"
            ),
        }
    }
    row_counts
}
