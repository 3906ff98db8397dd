//! Proof verification
//!
//! Verification needs only the leaf value, its proof and the claimed root.
//! A mismatch is an ordinary `false`, never an error: a truncated path or a
//! corrupted sibling digest just reconstructs the wrong root.

use crate::core::{hash::*, types::*};
use crate::proofs::proof::Proof;
use tracing::trace;

/// Recompute the root implied by `target` and `proof`
pub fn compute_root(target: &[u8], proof: &Proof) -> Digest {
    proof.iter().fold(sha256(target), |current, step| {
        if step.sibling_is_left() {
            hash_pair(&step.hash, &current)
        } else {
            hash_pair(&current, &step.hash)
        }
    })
}

/// Check that `target` is committed to by `expected_root` through `proof`
pub fn verify(target: &[u8], proof: &Proof, expected_root: &Digest) -> bool {
    let computed = compute_root(target, proof);
    let valid = &computed == expected_root;
    trace!(steps = proof.len(), computed = %computed, expected = %expected_root, valid, "verified inclusion proof");
    valid
}
