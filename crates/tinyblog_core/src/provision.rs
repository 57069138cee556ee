//! Admin credential provisioning.
//!
//! # Responsibility
//! - Generate and hash a one-time admin password.
//! - Persist the new credentials on the user row matching an email.
//!
//! # Invariants
//! - Plaintext is only ever returned on success, never alongside an error.
//! - Only the Argon2 hash reaches the database.
//! - Zero matched rows is an error, not a silent success.

use crate::config::sql_datetime;
use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
use argon2::Argon2;
use chrono::{DateTime, Utc};
use log::{error, info};
use rand::Rng;
use rusqlite::{named_params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Password length used when the operator does not ask for another one.
pub const DEFAULT_PASSWORD_LENGTH: usize = 10;

// Inclusive ASCII band the generator samples from: 'A'..='z'. The band
// also contains '[', '\', ']', '^', '_' and '`' between the letter cases.
const PASSWORD_CODE_LOW: u8 = 65;
const PASSWORD_CODE_HIGH: u8 = 122;

pub type ProvisionResult<T> = Result<T, ProvisionError>;

/// Provisioner error kinds, one per failing step.
#[derive(Debug)]
pub enum ProvisionError {
    /// Password hashing failed.
    Hashing(argon2::password_hash::Error),
    /// The credential update statement could not be prepared.
    Preparation(rusqlite::Error),
    /// The bound credential update failed to execute.
    Execution(rusqlite::Error),
    /// No user row matched the given email.
    AccountNotFound { email: String },
}

impl Display for ProvisionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hashing(err) => write!(f, "password hashing failed: {err}"),
            Self::Preparation(err) => {
                write!(f, "could not prepare the credential update: {err}")
            }
            Self::Execution(err) => write!(f, "could not run the credential update: {err}"),
            Self::AccountNotFound { email } => write!(f, "no user account matches `{email}`"),
        }
    }
}

impl Error for ProvisionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Hashing(err) => Some(err),
            Self::Preparation(err) | Self::Execution(err) => Some(err),
            Self::AccountNotFound { .. } => None,
        }
    }
}

/// Resets the credentials of the user matching `email`.
///
/// Returns the generated plaintext password so the operator can hand it
/// over exactly once; the database only ever sees the hash.
///
/// # Contract
/// - The password has `length` characters, each sampled uniformly from the
///   fixed ASCII band.
/// - `now` supplies the persisted `created_at` timestamp.
/// - The matched row also gets `is_enabled` set.
///
/// # Side effects
/// - Updates exactly one `user` row.
/// - Emits `credential_reset` logging events with duration and status.
pub fn reset_credentials(
    conn: &Connection,
    email: &str,
    length: usize,
    now: DateTime<Utc>,
) -> ProvisionResult<String> {
    let started_at = Instant::now();
    info!("event=credential_reset module=provision status=start");

    let result = run_reset(conn, email, length, now);
    match &result {
        Ok(_) => info!(
            "event=credential_reset module=provision status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=credential_reset module=provision status=error duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }
    result
}

fn run_reset(
    conn: &Connection,
    email: &str,
    length: usize,
    now: DateTime<Utc>,
) -> ProvisionResult<String> {
    let password = generate_password(length);
    let hash = hash_password(&password)?;

    let mut stmt = conn
        .prepare(
            "UPDATE user
             SET
                password = :password,
                created_at = :created_at,
                is_enabled = 1
             WHERE email = :email;",
        )
        .map_err(ProvisionError::Preparation)?;

    let changed = stmt
        .execute(named_params! {
            ":password": hash,
            ":created_at": sql_datetime(now),
            ":email": email,
        })
        .map_err(ProvisionError::Execution)?;

    if changed == 0 {
        return Err(ProvisionError::AccountNotFound {
            email: email.to_string(),
        });
    }

    Ok(password)
}

/// Samples one character per position from the fixed ASCII band.
fn generate_password(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| char::from(rng.gen_range(PASSWORD_CODE_LOW..=PASSWORD_CODE_HIGH)))
        .collect()
}

fn hash_password(plaintext: &str) -> ProvisionResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(ProvisionError::Hashing)?;
    Ok(hash.to_string())
}
