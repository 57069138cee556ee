//! Explicit path and clock configuration.
//!
//! # Responsibility
//! - Derive well-known blog file locations from a single root directory.
//! - Format caller-supplied timestamps the way the SQL layer stores them.
//!
//! # Invariants
//! - Nothing here reads global state or samples the clock on its own.
//! - The data-directory layout (`data/blog.sqlite`, `data/init.sql`) is
//!   fixed relative to the root.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Well-known file locations under one blog root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPaths {
    root: PathBuf,
}

impl BlogPaths {
    /// Creates path configuration rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Blog root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// SQLite database file location.
    pub fn database_path(&self) -> PathBuf {
        self.root.join("data").join("blog.sqlite")
    }

    /// Install script location.
    pub fn sql_script_path(&self) -> PathBuf {
        self.root.join("data").join("init.sql")
    }

    /// Directory for operator-run log files.
    pub fn log_dir(&self) -> PathBuf {
        self.root.join("logs")
    }
}

/// Formats an instant in the canonical SQL datetime format,
/// `YYYY-MM-DD HH:MM:SS`.
///
/// The instant is always supplied by the caller so persistence tests can
/// pin timestamps exactly.
pub fn sql_datetime(when: DateTime<Utc>) -> String {
    when.format("%Y-%m-%d %H:%M:%S").to_string()
}
