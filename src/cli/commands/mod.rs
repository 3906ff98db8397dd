//! CLI command implementations

pub mod config;
pub mod prove;
pub mod root;
pub mod tree;
pub mod verify;

// Common utilities for commands
use crate::cli::context::CliContext;
use crate::cli::LeafSource;
use crate::core::error::MerkleError;
use anyhow::Result;
use std::io::{self, Read};

/// Collect leaf values from arguments, a file or stdin
///
/// File and stdin input yield one leaf per line. Line endings are stripped
/// and blank lines skipped.
pub fn load_leaves(source: &LeafSource) -> Result<Vec<Vec<u8>>> {
    let text = if let Some(path) = &source.file {
        tracing::debug!(path = %path.display(), "reading leaves from file");
        Some(std::fs::read_to_string(path)?)
    } else if source.from_stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Some(buffer)
    } else {
        None
    };

    let mut leaves: Vec<Vec<u8>> = source
        .leaves
        .iter()
        .map(|leaf| leaf.as_bytes().to_vec())
        .collect();
    if let Some(text) = text {
        leaves.extend(parse_leaf_lines(&text));
    }

    if leaves.is_empty() {
        return Err(MerkleError::invalid_input(
            "no leaves given; pass values, --file or --from-stdin",
        )
        .into());
    }

    Ok(leaves)
}

/// Split text into leaf values, one per non-blank line
pub fn parse_leaf_lines(text: &str) -> Vec<Vec<u8>> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(|line| line.as_bytes().to_vec())
        .collect()
}

/// Print a status line to stderr unless quiet
pub fn status(message: impl AsRef<str>) {
    if !CliContext::is_quiet() {
        eprintln!("{}", message.as_ref());
    }
}
