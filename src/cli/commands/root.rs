use crate::cli::commands::load_leaves;
use crate::cli::LeafSource;
use crate::proofs::MerkleTree;
use anyhow::Result;
use clap::Args;
use serde_json::json;

#[derive(Args, Debug)]
pub struct RootArgs {
    #[command(flatten)]
    pub source: LeafSource,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the root command
pub fn execute(args: RootArgs) -> Result<()> {
    let leaves = load_leaves(&args.source)?;
    let tree = MerkleTree::build(&leaves)?;

    if args.json {
        println!(
            "{}",
            json!({
                "root": tree.root(),
                "leaf_count": tree.leaf_count(),
                "height": tree.height(),
            })
        );
    } else {
        println!("{}", tree.root());
    }

    Ok(())
}
