//! txmerkle - Merkle trees with compact inclusion proofs
//!
//! txmerkle builds a binary SHA-256 hash tree over an ordered list of data
//! items, produces an inclusion proof for any one item and checks such a proof
//! against a published root without access to the other items.
//!
//! # Core Features
//!
//! - **Tree Builder**: level-by-level pairing, odd nodes paired with themselves
//! - **Proof Generator**: sibling digests plus left/right side for one leaf
//! - **Proof Verifier**: recomputes the root from a leaf and its proof
//! - **Rendering**: level listings, parent/child listings and folder outlines
//!
//! Digests are lowercase hex strings and a parent is the SHA-256 of its two
//! children's hex text concatenated, left first.
//!
//! # Example Usage
//!
//! ```rust
//! use txmerkle::{prove, verify, MerkleTree};
//!
//! let leaves = ["tx1", "tx2", "tx3", "tx4"];
//! let tree = MerkleTree::build(&leaves)?;
//!
//! let proof = prove(&leaves, b"tx3")?;
//! assert_eq!(proof.len(), 2);
//! assert!(verify(b"tx3", &proof, tree.root()));
//! # Ok::<(), txmerkle::MerkleError>(())
//! ```

#![allow(clippy::should_implement_trait)]

pub mod cli;
pub mod config;
pub mod core;
pub mod proofs;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    error::{MerkleError, Result},
    types::{Digest, Level, ProofPosition, RootHash},
};

pub use crate::proofs::{
    build, prove, prove_index, verify, MerkleTree, Proof, ProofDocument, ProofStep,
};

pub use crate::render::{RenderOptions, TreeStyle};

/// Current version of txmerkle
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
