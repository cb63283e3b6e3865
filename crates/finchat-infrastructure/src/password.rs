//! Password hashing and verification.
//!
//! Argon2id with a per-user random salt; hashes are stored as
//! self-describing PHC strings, so parameters can evolve without a schema
//! change to the account store.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use finchat_core::error::{FinchatError, Result};

/// Hashes a password with a freshly generated salt.
///
/// # Returns
///
/// The PHC-format hash string, or `FinchatError::Internal` if hashing fails.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| FinchatError::internal(format!("Password hashing failed: {e}")))
}

/// Verifies a password against a stored PHC hash.
///
/// # Returns
///
/// - `Ok(true)`: The password matches
/// - `Ok(false)`: The password does not match
/// - `Err(_)`: The stored hash is not a valid PHC string
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| FinchatError::internal(format!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("correcthorse").unwrap();
        assert!(verify_password("correcthorse", &hash).unwrap());
        assert!(!verify_password("wronghorse", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("secreto").unwrap();
        let second = hash_password("secreto").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_invalid_stored_hash_is_an_error() {
        assert!(verify_password("x", "not-a-phc-string").is_err());
    }
}
