use crate::cli::commands::{load_leaves, status};
use crate::cli::LeafSource;
use crate::config::GlobalConfig;
use crate::core::error::MerkleError;
use crate::proofs::ProofDocument;
use crate::render::{render_document, RenderOptions};
use anyhow::Result;
use clap::{ArgGroup, Args};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("selector").required(true).args(["target", "index"])))]
pub struct ProveArgs {
    #[command(flatten)]
    pub source: LeafSource,

    /// Leaf value to prove (first occurrence is used)
    #[arg(short, long)]
    pub target: Option<String>,

    /// Position of the leaf to prove
    #[arg(short, long)]
    pub index: Option<usize>,

    /// Output format: json, text (default from config)
    #[arg(long)]
    pub format: Option<String>,

    /// Output file for proof (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the prove command
pub fn execute(args: ProveArgs) -> Result<()> {
    let config = GlobalConfig::load()?;
    let leaves = load_leaves(&args.source)?;

    let document = match (&args.target, args.index) {
        (Some(target), _) => ProofDocument::for_target(&leaves, target.as_bytes())?,
        (None, Some(index)) => ProofDocument::for_index(&leaves, index)?,
        (None, None) => {
            return Err(MerkleError::invalid_input("either --target or --index is required").into())
        }
    };

    status(format!("{}", "Generating proof...".green()));
    status(format!("  • Leaf index: {}", document.leaf_index));
    status(format!("  • Root: {}", document.root.to_hex().cyan()));

    let format = args.format.as_deref().unwrap_or(&config.output.format);
    let proof_data = format_document(&document, format, &config.render_options())?;

    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &proof_data)?;
        status(format!(
            "  • Proof written to: {}",
            output_path.display().to_string().cyan()
        ));
    } else {
        println!("{}", proof_data.trim_end());
    }

    status(format!("{}", "✓ Proof generated".green()));
    Ok(())
}

fn format_document(document: &ProofDocument, format: &str, options: &RenderOptions) -> Result<String> {
    match format {
        "json" => Ok(document.to_json()?),
        "text" => Ok(render_document(document, options)),
        other => Err(MerkleError::invalid_input(format!(
            "Invalid format '{}'. Use: json, text",
            other
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_document() -> Result<()> {
        let leaves = vec!["tx1", "tx2", "tx3"];
        let document = ProofDocument::for_index(&leaves, 1)?;
        let options = RenderOptions::default();

        let json = format_document(&document, "json", &options)?;
        assert_eq!(ProofDocument::from_json(&json)?, document);

        let text = format_document(&document, "text", &options)?;
        assert!(text.contains("Leaf Index: 1 of 3"));

        assert!(format_document(&document, "binary", &options).is_err());
        Ok(())
    }
}
