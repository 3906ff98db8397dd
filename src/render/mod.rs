//! Human readable rendering of trees and proofs
//!
//! Everything here only reads a finished [`MerkleTree`](crate::MerkleTree) or
//! [`Proof`](crate::Proof) and returns text. The duplicated right child of an
//! odd level is labelled in the output but never changes the traversal.

pub mod proof;
pub mod tree;

pub use proof::{render_document, render_proof};
pub use tree::{render_connections, render_folder, render_levels, render_tree};

use crate::core::error::MerkleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of hex characters shown for shortened digests
pub const DEFAULT_SHORT_HASH_LEN: usize = 8;

/// Options shared by all renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Hex characters shown before the `...` of a shortened digest
    pub short_hash_len: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            short_hash_len: DEFAULT_SHORT_HASH_LEN,
        }
    }
}

/// Layout used when printing a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeStyle {
    /// One block per level, leaves first
    Levels,
    /// Root first, each node with its two children
    Connections,
    /// Nested folder-like outline
    #[default]
    Folder,
}

impl FromStr for TreeStyle {
    type Err = MerkleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "levels" => Ok(TreeStyle::Levels),
            "connections" => Ok(TreeStyle::Connections),
            "folder" => Ok(TreeStyle::Folder),
            other => Err(MerkleError::configuration(format!(
                "Unknown tree style '{}'. Use: levels, connections, folder",
                other
            ))),
        }
    }
}

impl fmt::Display for TreeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeStyle::Levels => f.write_str("levels"),
            TreeStyle::Connections => f.write_str("connections"),
            TreeStyle::Folder => f.write_str("folder"),
        }
    }
}

/// Display label for a leaf value
pub(crate) fn leaf_label<L: AsRef<[u8]>>(leaves: &[L], index: usize) -> String {
    leaves
        .get(index)
        .map(|leaf| String::from_utf8_lossy(leaf.as_ref()).into_owned())
        .unwrap_or_else(|| format!("<leaf {}>", index))
}
