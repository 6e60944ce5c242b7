//! Password hashing and verification.
//!
//! Argon2 is CPU bound. Async callers go through [`hash_password_blocking`] and
//! [`verify_password_blocking`], which run the work on tokio's blocking pool.

use std::sync::LazyLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tokio::task::JoinError;

use crate::server::error::AppError;

/// Hash verified against when no account matches, so an unknown email costs one
/// full verification like a known one.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("no-account-has-this-password").ok());

/// Hashes a plaintext password with Argon2id and a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash embedding algorithm, parameters and salt
/// - `Err(password_hash::Error)` - Hashing failed
pub fn hash_password(plaintext: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(plaintext.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Checks a plaintext password against a stored hash.
///
/// Returns false on mismatch and when the stored hash cannot be parsed.
pub fn verify_password(plaintext: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        tracing::warn!("Stored password hash could not be parsed");
        return false;
    };

    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}

/// Hashes a password on the blocking thread pool.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash
/// - `Err(AppError::PasswordHash)` - Hashing failed
/// - `Err(AppError::InternalError)` - The blocking task panicked or was cancelled
pub async fn hash_password_blocking(plaintext: String) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || hash_password(&plaintext))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))??;

    Ok(hash)
}

/// Verifies a password on the blocking thread pool.
///
/// With `hash` set to `None` the password is checked against a throwaway hash
/// and the result is always `false`.
pub async fn verify_password_blocking(
    plaintext: String,
    hash: Option<String>,
) -> Result<bool, JoinError> {
    tokio::task::spawn_blocking(move || match hash {
        Some(hash) => verify_password(&plaintext, &hash),
        None => {
            if let Some(dummy) = DUMMY_HASH.as_deref() {
                let _ = verify_password(&plaintext, dummy);
            }
            false
        }
    })
    .await
}
