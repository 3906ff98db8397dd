//! Merkle tree construction
//!
//! Trees are stored arena style as a vector of levels. Level 0 holds the leaf
//! digests in input order and every following level pairs the one below it,
//! so parent and child positions are plain index arithmetic (`i * 2`,
//! `i * 2 + 1`, `i / 2`).
//!
//! An unmatched last node in a level is paired with itself. The duplicate
//! takes part in higher levels exactly like a real sibling.

use crate::core::{error::*, hash::*, types::*};
use crate::proofs::proof::{Proof, ProofStep};
use tracing::debug;

/// Immutable Merkle tree over an ordered list of leaves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    root: RootHash,
    levels: Vec<Level>,
}

impl MerkleTree {
    /// Build a tree from raw leaf values
    ///
    /// Fails with [`MerkleError::InvalidInput`] when `leaves` is empty.
    pub fn build<L: AsRef<[u8]>>(leaves: &[L]) -> Result<Self> {
        let leaf_digests = leaves.iter().map(|leaf| sha256(leaf.as_ref())).collect();
        Self::from_leaf_digests(leaf_digests)
    }

    /// Build a tree from already hashed leaves
    pub fn from_leaf_digests(leaf_digests: Level) -> Result<Self> {
        if leaf_digests.is_empty() {
            return Err(MerkleError::invalid_input(
                "cannot build a merkle tree from an empty leaf list",
            ));
        }

        let leaf_count = leaf_digests.len();
        let mut levels = vec![leaf_digests];
        while let Some(current) = levels.last().filter(|level| level.len() > 1) {
            let next = next_level(current);
            levels.push(next);
        }

        // The loop only stops on a single-node level.
        let root = levels
            .last()
            .and_then(|level| level.first())
            .cloned()
            .ok_or_else(|| MerkleError::invalid_input("tree has no root level"))?;

        debug!(leaf_count, height = levels.len() - 1, root = %root, "built merkle tree");

        Ok(MerkleTree { root, levels })
    }

    /// Root digest
    pub fn root(&self) -> &RootHash {
        &self.root
    }

    /// All levels, leaves first, root last
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels above the leaves
    pub fn height(&self) -> usize {
        self.levels.len() - 1
    }

    /// Inclusion proof for the leaf at `leaf_index`, read from the stored levels
    pub fn proof(&self, leaf_index: usize) -> Result<Proof> {
        let leaf_count = self.leaf_count();
        if leaf_index >= leaf_count {
            return Err(MerkleError::index_out_of_range(leaf_index, leaf_count));
        }

        let mut steps = Vec::with_capacity(self.height());
        let mut index = leaf_index;
        for level in &self.levels[..self.height()] {
            steps.push(sibling_step(level, index));
            index /= 2;
        }
        Ok(Proof::new(steps))
    }
}

/// Derive the next level up by pairing neighbours left to right
///
/// An odd trailing node is hashed together with a copy of itself.
pub fn next_level(level: &[Digest]) -> Level {
    level
        .chunks(2)
        .map(|pair| {
            let left = &pair[0];
            let right = pair.get(1).unwrap_or(left);
            hash_pair(left, right)
        })
        .collect()
}

/// Sibling of the node at `index` within `level`
///
/// The level must hold more than one node. A left node without a right
/// neighbour is its own sibling.
pub(crate) fn sibling_step(level: &[Digest], index: usize) -> ProofStep {
    if index % 2 == 0 {
        let sibling = level.get(index + 1).unwrap_or(&level[index]);
        ProofStep::new(sibling.clone(), ProofPosition::Right)
    } else {
        ProofStep::new(level[index - 1].clone(), ProofPosition::Left)
    }
}

/// Build a tree from raw leaf values
pub fn build<L: AsRef<[u8]>>(leaves: &[L]) -> Result<MerkleTree> {
    MerkleTree::build(leaves)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaves(values: &[&str]) -> Vec<Vec<u8>> {
        values.iter().map(|v| v.as_bytes().to_vec()).collect()
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let empty: Vec<Vec<u8>> = Vec::new();
        let err = MerkleTree::build(&empty).unwrap_err();
        assert!(matches!(err, MerkleError::InvalidInput { .. }));
    }

    #[test]
    fn test_single_leaf() {
        let tree = MerkleTree::build(&leaves(&["x"])).unwrap();
        assert_eq!(tree.root(), &hash_string("x"));
        assert_eq!(tree.levels().len(), 1);
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_four_leaves() {
        let tree = MerkleTree::build(&leaves(&["tx1", "tx2", "tx3", "tx4"])).unwrap();
        let level0 = &tree.levels()[0];
        let level1 = &tree.levels()[1];

        assert_eq!(level0.len(), 4);
        assert_eq!(level1.len(), 2);
        assert_eq!(tree.levels()[2].len(), 1);
        assert_eq!(level1[0], hash_pair(&level0[0], &level0[1]));
        assert_eq!(level1[1], hash_pair(&level0[2], &level0[3]));
        assert_eq!(tree.root(), &hash_pair(&level1[0], &level1[1]));
    }

    #[test]
    fn test_odd_node_is_duplicated() {
        let tree = MerkleTree::build(&leaves(&["a", "b", "c"])).unwrap();
        let level0 = &tree.levels()[0];
        let level1 = &tree.levels()[1];

        assert_eq!(level1.len(), 2);
        assert_eq!(level1[1], hash_pair(&level0[2], &level0[2]));
    }

    #[test]
    fn test_duplicate_cascades() {
        let tree = MerkleTree::build(&leaves(&["tx1", "tx2", "tx3", "tx4", "tx5"])).unwrap();
        let sizes: Vec<usize> = tree.levels().iter().map(|l| l.len()).collect();
        assert_eq!(sizes, vec![5, 3, 2, 1]);

        let level1 = &tree.levels()[1];
        let level2 = &tree.levels()[2];
        assert_eq!(level2[1], hash_pair(&level1[2], &level1[2]));
    }

    #[test]
    fn test_duplicated_tail_shares_root() {
        let odd = MerkleTree::build(&leaves(&["a", "b", "c"])).unwrap();
        let padded = MerkleTree::build(&leaves(&["a", "b", "c", "c"])).unwrap();
        assert_eq!(odd.root(), padded.root());
    }

    #[test]
    fn test_level_lengths_halve_rounding_up() {
        for n in 1..=33usize {
            let values: Vec<Vec<u8>> = (0..n).map(|i| i.to_string().into_bytes()).collect();
            let tree = MerkleTree::build(&values).unwrap();
            for pair in tree.levels().windows(2) {
                assert_eq!(pair[1].len(), (pair[0].len() + 1) / 2);
            }
            assert_eq!(tree.levels().last().unwrap().len(), 1);
        }
    }

    #[test]
    fn test_tree_proof_matches_sibling_rule() {
        let tree = MerkleTree::build(&leaves(&["tx1", "tx2", "tx3"])).unwrap();
        let proof = tree.proof(2).unwrap();
        let steps = proof.steps();

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].hash, hash_string("tx3"));
        assert_eq!(steps[0].position, ProofPosition::Right);
        assert_eq!(steps[1].hash, tree.levels()[1][0]);
        assert_eq!(steps[1].position, ProofPosition::Left);
    }

    #[test]
    fn test_tree_proof_index_out_of_range() {
        let tree = MerkleTree::build(&leaves(&["tx1", "tx2"])).unwrap();
        let err = tree.proof(2).unwrap_err();
        assert!(matches!(err, MerkleError::IndexOutOfRange { index: 2, len: 2 }));
    }
}
