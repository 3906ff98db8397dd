//! txmerkle CLI
//!
//! Command-line interface for building Merkle trees and checking inclusion proofs.

use anyhow::Result;
use clap::Parser;
use txmerkle::cli::context::CliContext;
use txmerkle::cli::{commands, Cli, Commands};
use txmerkle::config::GlobalConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "txmerkle=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let color = match &cli.color {
        Some(color) => color.clone(),
        None => GlobalConfig::load()
            .map(|config| config.output.color)
            .unwrap_or_else(|_| "auto".to_string()),
    };
    match color.as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => {}
    }

    CliContext::set(CliContext {
        verbose: cli.verbose,
        quiet: cli.quiet,
    });

    // Execute the command
    match cli.command {
        Commands::Root(args) => commands::root::execute(args),
        Commands::Tree(args) => commands::tree::execute(args),
        Commands::Prove(args) => commands::prove::execute(args),
        Commands::Verify(args) => commands::verify::execute(args),
        Commands::Config(args) => commands::config::execute(args),
    }
}
