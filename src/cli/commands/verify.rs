use crate::cli::commands::status;
use crate::cli::context::CliContext;
use crate::core::error::MerkleError;
use crate::core::types::Digest;
use crate::proofs::ProofDocument;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Proof file to verify
    #[arg(value_name = "PROOF", required_unless_present = "from_stdin")]
    pub proof: Option<PathBuf>,

    /// Published root to verify against (default: the root in the proof)
    #[arg(long)]
    pub root: Option<String>,

    /// Expected leaf value
    #[arg(long)]
    pub leaf: Option<String>,

    /// Read proof from stdin
    #[arg(long)]
    pub from_stdin: bool,
}

/// Execute the verify command
pub fn execute(args: VerifyArgs) -> Result<()> {
    let proof_data = if args.from_stdin {
        status("  • Reading proof from stdin");
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(path) = &args.proof {
        status(format!("  • Reading proof from: {}", path.display()));
        std::fs::read_to_string(path)?
    } else {
        return Err(MerkleError::invalid_input("no proof given; pass a file or --from-stdin").into());
    };

    let document = ProofDocument::from_json(&proof_data)?;

    let expected_root = match &args.root {
        Some(root) => Digest::from_hex(root).map_err(|_| MerkleError::invalid_digest(root.clone()))?,
        None => document.root.clone(),
    };

    if CliContext::is_verbose() {
        status(format!("  • Leaf index: {} of {}", document.leaf_index, document.leaf_count));
        status(format!("  • Proof steps: {}", document.path.len()));
        status(format!("  • Expected root: {}", expected_root.to_hex().cyan()));
        match document.computed_root() {
            Ok(computed) => status(format!("  • Calculated root: {}", computed.to_hex().cyan())),
            Err(e) => status(format!("  • Calculated root: unavailable ({})", e)),
        }
    }

    if let Some(expected_leaf) = &args.leaf {
        let matches = document
            .leaf_bytes()
            .map(|leaf| leaf == expected_leaf.as_bytes())
            .unwrap_or(false);
        if !matches {
            status(format!("{}", "✗ Proof is for a different leaf".red()));
            return Err(MerkleError::invalid_proof_format("leaf mismatch").into());
        }
    }

    if document.verify_against(&expected_root) {
        println!("{}", "✓ Proof verification successful!".green());
        Ok(())
    } else {
        println!("{}", "✗ Proof verification failed!".red());
        anyhow::bail!("proof does not reconstruct root {}", expected_root)
    }
}
