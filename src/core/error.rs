//! Error types for txmerkle

use thiserror::Error;

/// Main error type for txmerkle operations
#[derive(Error, Debug)]
pub enum MerkleError {
    /// Tree construction was given no leaves
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Proof requested for a value absent from the leaf list
    #[error("Target not found in leaves: {target}")]
    TargetNotFound { target: String },

    /// Proof requested for an index past the end of the leaf list
    #[error("Leaf index {index} out of range for {len} leaves")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid digest: {value}")]
    InvalidDigest { value: String },

    #[error("Invalid proof format: {reason}")]
    InvalidProofFormat { reason: String },

    /// Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigurationError { reason: String },

    #[error("Home directory not found")]
    HomeDirectoryNotFound,

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Hex encoding/decoding errors
    #[error("Hex encoding error: {0}")]
    HexError(#[from] hex::FromHexError),
}

impl MerkleError {
    /// Create a new invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create a new target not found error, rendering the target lossily
    pub fn target_not_found(target: &[u8]) -> Self {
        Self::TargetNotFound {
            target: String::from_utf8_lossy(target).into_owned(),
        }
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    pub fn invalid_digest(value: impl Into<String>) -> Self {
        Self::InvalidDigest {
            value: value.into(),
        }
    }

    pub fn invalid_proof_format(reason: impl Into<String>) -> Self {
        Self::InvalidProofFormat {
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::ConfigurationError {
            reason: reason.into(),
        }
    }
}

/// Result type alias for txmerkle operations
pub type Result<T> = std::result::Result<T, MerkleError>;
