//! Password hashing with Argon2id.
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`),
//! so the algorithm parameters and salt travel with the hash and verification
//! needs nothing else.
//!
//! Both operations are CPU bound by construction. Async callers should run
//! them on a blocking thread.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::{RngCore, rngs::OsRng};
use thiserror::Error;
use tracing::{trace, warn};

const SALT_LEN: usize = 16;

/// Error types for password hashing
#[derive(Error, Debug)]
pub enum PasswordError {
    /// The random salt could not be encoded
    #[error("Salt error: {0}")]
    Salt(String),

    /// The hashing primitive rejected its input
    #[error("Hashing error: {0}")]
    Hash(String),
}

/// Hashes `password` with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    trace!("Hashing password");

    let mut salt_bytes = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt_bytes);
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| PasswordError::Salt(e.to_string()))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::Hash(e.to_string()))
}

/// Checks `password` against a stored PHC hash.
///
/// A stored value that does not parse as a PHC string never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    trace!("Verifying password");

    let parsed_hash = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Stored password hash is malformed: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_never_contains_plaintext() {
        let hash = hash_password("hunter2").unwrap();

        assert_ne!(hash, "hunter2");
        assert!(!hash.contains("hunter2"));
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_verify_accepts_only_the_original_password() {
        let hash = hash_password("correct horse").unwrap();

        assert!(verify_password("correct horse", &hash));
        assert!(!verify_password("correct horse ", &hash));
        assert!(!verify_password("wrong", &hash));
        assert!(!verify_password("", &hash));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let first = hash_password("p").unwrap();
        let second = hash_password("p").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("p", &first));
        assert!(verify_password("p", &second));
    }

    #[test]
    fn test_malformed_hash_never_matches() {
        assert!(!verify_password("p", "p"));
        assert!(!verify_password("p", ""));
        assert!(!verify_password("p", "$2a$14$notabcrypthashatall"));
    }
}
