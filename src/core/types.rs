//! Core data types for txmerkle

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a SHA-256 digest in hex characters
pub const DIGEST_HEX_LEN: usize = 64;

/// Lowercase hex encoded SHA-256 digest
///
/// Digests are compared by exact string equality. Parent nodes hash the
/// concatenation of their children's hex text, so the string form is the
/// canonical representation rather than the raw 32 bytes.
///
/// Deserialization is lenient and keeps whatever text it is given: a proof
/// carrying a corrupted sibling still parses and simply fails to verify.
/// Use [`Digest::from_hex`] for strict parsing of user supplied roots.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    /// Wrap raw SHA-256 output
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Digest(hex::encode(bytes))
    }

    /// Parse a 64 character hex string, normalizing to lowercase
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let trimmed = hex.trim();
        let bytes = hex::decode(trimmed)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        Ok(Digest(trimmed.to_ascii_lowercase()))
    }

    /// Canonical hex text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        self.0.clone()
    }

    /// Whether this value is a well-formed canonical digest
    pub fn is_canonical(&self) -> bool {
        self.0.len() == DIGEST_HEX_LEN
            && self
                .0
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }

    /// First `len` hex characters followed by `...`
    ///
    /// Values shorter than `len` are returned unchanged.
    pub fn short(&self, len: usize) -> String {
        if self.0.len() < len {
            return self.0.clone();
        }
        match self.0.get(..len) {
            Some(prefix) => format!("{}...", prefix),
            None => self.0.clone(),
        }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short(8))
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Root digest of a tree
pub type RootHash = Digest;

/// One row of digests, level 0 being the leaf digests
pub type Level = Vec<Digest>;

/// Side of the sibling relative to the node being proved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofPosition {
    /// Sibling precedes the current node in the concatenation
    Left,
    /// Sibling follows the current node in the concatenation
    Right,
}

impl ProofPosition {
    pub fn is_left(self) -> bool {
        matches!(self, ProofPosition::Left)
    }

    pub fn flipped(self) -> Self {
        match self {
            ProofPosition::Left => ProofPosition::Right,
            ProofPosition::Right => ProofPosition::Left,
        }
    }
}

impl fmt::Display for ProofPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProofPosition::Left => f.write_str("LEFT"),
            ProofPosition::Right => f.write_str("RIGHT"),
        }
    }
}
