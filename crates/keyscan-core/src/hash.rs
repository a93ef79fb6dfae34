//! Content hashing

use sha2::{Digest, Sha256};

/// Compute the lowercase hex SHA-256 digest of raw bytes
#[must_use]
pub fn compute_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
