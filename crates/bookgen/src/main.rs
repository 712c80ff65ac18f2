//! bookgen CLI - Markdown tree generator.
//!
//! Provides commands for:
//! - `generate`: materialize the Markdown tree from the structure document
//! - `publish`: regenerate the tree and push the result to a git remote

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{GenerateArgs, PublishArgs};
use output::Output;

/// bookgen - Markdown tree generator.
#[derive(Parser)]
#[command(name = "bookgen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Materialize the Markdown tree from the structure document.
    Generate(GenerateArgs),
    /// Regenerate the tree and push changes to the configured remote.
    Publish(PublishArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Generate(args) => args.verbose,
        Commands::Publish(args) => args.verbose,
    };

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Publish(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
