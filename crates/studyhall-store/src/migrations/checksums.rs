//! Checksum validation for migrations
//!
//! Computes SHA256 checksums of migration SQL to detect drift between
//! the embedded SQL and what was applied.

use sha2::{Digest, Sha256};

/// Compute SHA256 checksum of a string
pub fn compute_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
