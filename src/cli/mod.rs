//! Command-line interface for txmerkle

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod context;

use commands::{
    config::ConfigArgs, prove::ProveArgs, root::RootArgs, tree::TreeArgs, verify::VerifyArgs,
};

/// txmerkle - Merkle trees and inclusion proofs
#[derive(Parser, Debug)]
#[command(
    name = "txmerkle",
    version,
    about = "Build Merkle trees over data items and prove membership of single items",
    long_about = "txmerkle hashes an ordered list of data items into a binary SHA-256 Merkle tree, \
                  generates inclusion proofs for individual items and verifies them against a root."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output: auto, always, never
    #[arg(long, global = true)]
    pub color: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the merkle root of the given leaves
    Root(RootArgs),

    /// Render the tree built from the given leaves
    Tree(TreeArgs),

    /// Generate an inclusion proof for one leaf
    Prove(ProveArgs),

    /// Verify an inclusion proof document
    Verify(VerifyArgs),

    /// Get and set configuration values
    Config(ConfigArgs),
}

/// Where leaf values are read from
#[derive(Args, Debug, Clone, Default)]
pub struct LeafSource {
    /// Leaf values, in order
    #[arg(value_name = "LEAVES")]
    pub leaves: Vec<String>,

    /// Read leaves from a file, one per line
    #[arg(short, long, conflicts_with = "from_stdin")]
    pub file: Option<PathBuf>,

    /// Read leaves from stdin, one per line
    #[arg(long)]
    pub from_stdin: bool,
}
