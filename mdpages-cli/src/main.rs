//! # mdpages CLI
//!
//! Command-line interface for the mdpages converter.

mod commands;
mod prompt;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdpages")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (read when present; defaults to mdpages.yml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a directory of markdown documents into HTML pages
    Build(commands::BuildArgs),

    /// Write a starter config and sample note
    Init {
        /// Target directory (defaults to current directory)
        path: Option<PathBuf>,
    },
}

const DEFAULT_CONFIG_FILE: &str = "mdpages.yml";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Build(args) => {
            let required = cli.config.is_some();
            let config_path = cli
                .config
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            commands::build_site(&config_path, required, args)
        }
        Commands::Init { path } => commands::init_project(path.as_deref()),
    }
}
