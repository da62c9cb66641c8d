//! Password hashing capability.
//!
//! Argon2id with per-password random salt, PHC string encoding. Callers
//! treat the digest as opaque; nothing outside this module parses it.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash a cleartext password into an opaque digest.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Verify a cleartext password against a stored digest.
/// A malformed digest verifies as false rather than erroring; a row with
/// a corrupt digest is indistinguishable from a wrong password to callers.
pub fn verify_password(password: &str, digest: &str) -> bool {
    PasswordHash::new(digest)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}
