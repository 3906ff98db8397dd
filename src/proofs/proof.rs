//! Proof generation
//!
//! The generator replays the builder's pairing level by level while tracking
//! the position of the node being proved, recording its sibling at each step.

use crate::core::{error::*, hash::*, types::*};
use crate::proofs::merkle::{next_level, sibling_step};
use crate::proofs::verify::compute_root;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single step of a merkle proof path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    /// Hash of the sibling node
    pub hash: Digest,
    /// Whether the sibling is on the left or right
    pub position: ProofPosition,
}

impl ProofStep {
    pub fn new(hash: Digest, position: ProofPosition) -> Self {
        Self { hash, position }
    }

    pub fn sibling_is_left(&self) -> bool {
        self.position.is_left()
    }
}

/// Ordered sibling path from a leaf up to the level below the root
///
/// A proof holds no reference to the tree that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Proof {
    steps: Vec<ProofStep>,
}

impl Proof {
    pub fn new(steps: Vec<ProofStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProofStep> {
        self.steps.iter()
    }

    pub fn into_steps(self) -> Vec<ProofStep> {
        self.steps
    }
}

impl From<Vec<ProofStep>> for Proof {
    fn from(steps: Vec<ProofStep>) -> Self {
        Self::new(steps)
    }
}

impl<'a> IntoIterator for &'a Proof {
    type Item = &'a ProofStep;
    type IntoIter = std::slice::Iter<'a, ProofStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Generate a proof for the first leaf equal to `target`
///
/// Leaves are matched on their raw bytes. When a value occurs more than once
/// the first occurrence is proved; use [`prove_index`] to pick another.
pub fn prove<L: AsRef<[u8]>>(leaves: &[L], target: &[u8]) -> Result<Proof> {
    let index = find_leaf(leaves, target)?;
    prove_index(leaves, index)
}

/// Generate a proof for the leaf at `index`
pub fn prove_index<L: AsRef<[u8]>>(leaves: &[L], index: usize) -> Result<Proof> {
    if leaves.is_empty() {
        return Err(MerkleError::invalid_input(
            "cannot generate a proof from an empty leaf list",
        ));
    }
    if index >= leaves.len() {
        return Err(MerkleError::index_out_of_range(index, leaves.len()));
    }

    let mut level: Level = leaves.iter().map(|leaf| sha256(leaf.as_ref())).collect();
    let mut current_index = index;
    let mut steps = Vec::new();

    while level.len() > 1 {
        steps.push(sibling_step(&level, current_index));
        level = next_level(&level);
        current_index /= 2;
    }

    debug!(leaf_index = index, steps = steps.len(), "generated inclusion proof");
    Ok(Proof::new(steps))
}

/// Index of the first leaf equal to `target`
///
/// An empty leaf list is invalid input rather than a missing target.
pub fn find_leaf<L: AsRef<[u8]>>(leaves: &[L], target: &[u8]) -> Result<usize> {
    if leaves.is_empty() {
        return Err(MerkleError::invalid_input(
            "cannot generate a proof from an empty leaf list",
        ));
    }
    leaves
        .iter()
        .position(|leaf| leaf.as_ref() == target)
        .ok_or_else(|| MerkleError::target_not_found(target))
}

/// Current proof document format version
pub const PROOF_FORMAT_VERSION: &str = "1.0";

/// Self-contained, serializable inclusion proof
///
/// Bundles the proved leaf with its path and the root it was generated
/// against, so it can be shipped and checked without the other leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofDocument {
    /// Version of the proof format
    pub version: String,
    /// Hex encoding of the proved leaf's bytes
    pub leaf: String,
    /// Position of the leaf in the original list
    pub leaf_index: usize,
    /// Number of leaves in the tree
    pub leaf_count: usize,
    /// Root hash the proof was generated against
    pub root: RootHash,
    /// Proof path elements
    pub path: Proof,
    /// Unix timestamp when the proof was generated
    pub generated_at: i64,
}

impl ProofDocument {
    /// Prove the first leaf equal to `target`
    pub fn for_target<L: AsRef<[u8]>>(leaves: &[L], target: &[u8]) -> Result<Self> {
        let index = find_leaf(leaves, target)?;
        Self::for_index(leaves, index)
    }

    /// Prove the leaf at `index`
    pub fn for_index<L: AsRef<[u8]>>(leaves: &[L], index: usize) -> Result<Self> {
        let path = prove_index(leaves, index)?;
        let leaf = leaves[index].as_ref();
        // The path already commits to every level, so the root falls out of it.
        let root = compute_root(leaf, &path);

        Ok(ProofDocument {
            version: PROOF_FORMAT_VERSION.to_string(),
            leaf: hex::encode(leaf),
            leaf_index: index,
            leaf_count: leaves.len(),
            root,
            path,
            generated_at: chrono::Utc::now().timestamp(),
        })
    }

    /// Decoded leaf bytes
    pub fn leaf_bytes(&self) -> Result<Vec<u8>> {
        Ok(hex::decode(&self.leaf)?)
    }

    /// Root reconstructed from the leaf and its path
    pub fn computed_root(&self) -> Result<Digest> {
        Ok(compute_root(&self.leaf_bytes()?, &self.path))
    }

    /// Check the proof against the root it carries
    ///
    /// An undecodable leaf counts as a failed proof.
    pub fn verify(&self) -> bool {
        self.verify_against(&self.root)
    }

    /// Check the proof against an externally published root
    pub fn verify_against(&self, expected_root: &Digest) -> bool {
        match self.leaf_bytes() {
            Ok(leaf) => crate::proofs::verify::verify(&leaf, &self.path, expected_root),
            Err(_) => false,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| MerkleError::invalid_proof_format(e.to_string()))
    }
}
