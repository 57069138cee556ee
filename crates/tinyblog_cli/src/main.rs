//! Operator entry point for installing a blog and provisioning its admin.
//!
//! # Responsibility
//! - Drive the one-shot install and credential reset against one blog root.
//! - Keep output suitable for copy/paste by a human operator.

use chrono::Utc;
use std::process::ExitCode;
use tinyblog_core::{
    default_log_level, init_logging, install_blog, open_db, reset_credentials, BlogPaths,
    DEFAULT_PASSWORD_LENGTH,
};

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let (Some(root), Some(email)) = (args.next(), args.next()) else {
        eprintln!("usage: tinyblog_cli <blog-root> <admin-email>");
        return ExitCode::FAILURE;
    };

    let root = match std::fs::canonicalize(&root) {
        Ok(root) => root,
        Err(err) => {
            eprintln!("blog root `{root}` is not usable: {err}");
            return ExitCode::FAILURE;
        }
    };
    let paths = BlogPaths::new(root);

    // Logging is best-effort for operator runs; an unwritable log directory
    // must not block the install itself.
    if let Some(log_dir) = paths.log_dir().to_str() {
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let report = match install_blog(paths.database_path(), paths.sql_script_path()) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("install failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("database created at {}", paths.database_path().display());
    for (table, count) in &report.row_counts {
        println!("{table}: {count} rows");
    }

    let conn = match open_db(paths.database_path()) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("could not reopen the new database: {err}");
            return ExitCode::FAILURE;
        }
    };

    match reset_credentials(&conn, &email, DEFAULT_PASSWORD_LENGTH, Utc::now()) {
        Ok(password) => {
            println!("admin `{email}` enabled, one-time password: {password}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("admin provisioning failed: {err}");
            ExitCode::FAILURE
        }
    }
}
