//! Pieces shared between the API binary and its helpers.

pub mod password;

pub use password::{PasswordError, hash_password, verify_password};
