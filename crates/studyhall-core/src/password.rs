//! Password hashing
//!
//! Stored form is `sha256$<salt>$<hexdigest>` where the digest covers
//! salt bytes followed by password bytes. The plaintext is never stored;
//! diagnostics only ever see a short prefix of the stored form.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Hashing scheme tag recorded in the stored form
const SCHEME: &str = "sha256";

/// Length of the salt drawn from a v4 UUID
const SALT_LEN: usize = 8;

/// Number of leading characters of the stored hash that accessors may show
pub const DISPLAY_PREFIX_LEN: usize = 10;

/// Hash a plaintext password with a fresh random salt
pub fn hash_password(plain: &str) -> String {
    let salt: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(SALT_LEN)
        .collect();
    format!("{}${}${}", SCHEME, salt, digest(&salt, plain))
}

/// Check a plaintext candidate against a stored hash
///
/// Returns false for candidates that do not match and for stored values
/// that are not in the expected `scheme$salt$digest` form.
pub fn verify_password(stored: &str, candidate: &str) -> bool {
    let mut parts = stored.splitn(3, '$');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(SCHEME), Some(salt), Some(expected)) => digest(salt, candidate) == expected,
        _ => false,
    }
}

/// Truncated form of a stored hash for diagnostic display
///
/// Only the first `DISPLAY_PREFIX_LEN` characters are exposed; the full
/// hash never leaves the model.
pub fn display_prefix(stored: &str) -> String {
    let prefix: String = stored.chars().take(DISPLAY_PREFIX_LEN).collect();
    format!("{}...", prefix)
}

fn digest(salt: &str, plain: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(plain.as_bytes());
    hex::encode(hasher.finalize())
}
