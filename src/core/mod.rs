//! Core types and utilities for txmerkle
//!
//! This module contains the digest type, error handling,
//! and the SHA-256 digest provider used by the tree engine.

pub mod error;
pub mod hash;
pub mod types;

// Re-export commonly used items
pub use error::{MerkleError, Result};
pub use hash::{hash_pair, hash_string, sha256};
pub use types::{Digest, Level, ProofPosition, RootHash};
