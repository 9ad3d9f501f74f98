//! lang-probe CLI tool.
//!
//! Usage:
//! ```bash
//! lang-probe detect [OPTIONS] [PATH]
//! lang-probe list-languages
//! lang-probe init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Heuristic source-language detector for code snippets and files
#[derive(Parser)]
#[command(name = "lang-probe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a code sample against its claimed language
    Detect {
        /// Path to the code file; omit or pass "-" to read stdin
        path: Option<PathBuf>,

        /// Language the code is claimed to be written in.
        /// Inferred from the file extension if omitted.
        #[arg(short = 'l', long)]
        claimed: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Minimum confidence (0-100) required to report a mismatch
        #[arg(long)]
        min_confidence: Option<u8>,
    },

    /// List supported languages and their rule sets
    ListLanguages,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for detection results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Detect {
            path,
            claimed,
            format,
            min_confidence,
        } => commands::detect::run(
            path.as_deref(),
            claimed,
            format,
            min_confidence,
            cli.config.as_deref(),
        ),
        Commands::ListLanguages => commands::list_languages::run(),
        Commands::Init { force } => commands::init::run(force),
    }
}
