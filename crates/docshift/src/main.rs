//! docshift CLI - MkDocs Material to Hugo/Hextra migration.
//!
//! Provides commands for:
//! - `migrate`: Migrate a whole MkDocs site into a Hugo site
//! - `convert`: Convert a single Markdown file to stdout

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Log level used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_LEVEL: &str = "warn";

use commands::{ConvertArgs, MigrateArgs};
use output::Output;

/// docshift - MkDocs Material to Hugo/Hextra migration.
#[derive(Parser)]
#[command(name = "docshift", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Migrate a MkDocs site into a Hugo/Hextra site.
    Migrate(MigrateArgs),
    /// Convert one Markdown file and print the result.
    Convert(ConvertArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Migrate(args) if args.verbose);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Migrate(args) => args.execute(),
        Commands::Convert(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// `--verbose` enables INFO level, otherwise use `RUST_LOG` or default to WARN.
fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    }
}
