//! Merkle proof system for txmerkle
//!
//! This module builds trees over ordered leaves, generates inclusion proofs
//! for single leaves and verifies them against a published root.

pub mod merkle;
pub mod proof;
pub mod verify;

// Re-export commonly used items
pub use merkle::{build, next_level, MerkleTree};
pub use proof::{
    find_leaf, prove, prove_index, Proof, ProofDocument, ProofStep, PROOF_FORMAT_VERSION,
};
pub use verify::{compute_root, verify};
