//! Utility functions for content hashing.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 content hash of a string.
///
/// The digest is taken over the UTF-8 bytes of `value` and returned as 64
/// lowercase hex characters. This hash is the identity of an analyzed string.
#[must_use]
pub fn content_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}
