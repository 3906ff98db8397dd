use crate::cli::commands::load_leaves;
use crate::cli::LeafSource;
use crate::config::GlobalConfig;
use crate::proofs::MerkleTree;
use crate::render::{render_tree, TreeStyle};
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct TreeArgs {
    #[command(flatten)]
    pub source: LeafSource,

    /// Layout: levels, connections, folder (default from config)
    #[arg(long)]
    pub style: Option<String>,

    /// Hex characters shown per shortened digest (default from config)
    #[arg(long, value_parser = parse_hash_len)]
    pub hash_len: Option<usize>,
}

fn parse_hash_len(raw: &str) -> std::result::Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("must be a positive number".to_string()),
        Ok(len) => Ok(len),
        Err(e) => Err(e.to_string()),
    }
}

/// Execute the tree command
pub fn execute(args: TreeArgs) -> Result<()> {
    let config = GlobalConfig::load()?;
    let leaves = load_leaves(&args.source)?;
    let tree = MerkleTree::build(&leaves)?;

    let style = match &args.style {
        Some(style) => style.parse::<TreeStyle>()?,
        None => config.display.style,
    };
    let mut options = config.render_options();
    if let Some(len) = args.hash_len {
        options.short_hash_len = len;
    }

    print!("{}", render_tree(&tree, &leaves, style, &options));
    Ok(())
}
