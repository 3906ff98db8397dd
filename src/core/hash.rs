//! Hash utilities for txmerkle

use crate::core::types::Digest;
use sha2::{Digest as _, Sha256};

/// Compute SHA-256 hash of data
pub fn sha256(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    Digest::from_bytes(hasher.finalize().into())
}

/// Compute SHA-256 hash of a string
pub fn hash_string(s: &str) -> Digest {
    sha256(s.as_bytes())
}

/// Compute the parent of two nodes
///
/// Hashes the concatenated hex text of both children, no separator.
pub fn hash_pair(left: &Digest, right: &Digest) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(left.as_str().as_bytes());
    hasher.update(right.as_str().as_bytes());
    Digest::from_bytes(hasher.finalize().into())
}
