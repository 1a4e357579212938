//! pngsquash CLI - turn a tree of PNGs into resized, compressed JPEGs.
//!
//! Each `name.png` gets a `name.jpg` sibling, re-encoded at a low JPEG quality
//! and stretched to a fixed size.
//!
//! # Usage
//!
//! ```bash
//! # Convert everything under the configured root (~/MeasurementImages)
//! pngsquash convert
//!
//! # Convert a different tree with a custom size and a JSON summary
//! pngsquash convert ./scans --width 800 --height 600 --json
//!
//! # View configuration
//! pngsquash config show
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

mod cli;
mod logging;

/// pngsquash - batch PNG to resized, compressed JPEG converter.
#[derive(Parser, Debug)]
#[command(name = "pngsquash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file to use instead of the default location
    #[arg(short, long, global = true, env = "PNGSQUASH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert every PNG under a directory tree
    Convert(cli::convert::ConvertArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(pngsquash_core::Config::default_path);

    let config = resolve_config(&config_path, &cli.command)?;
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("pngsquash v{}", pngsquash_core::VERSION);

    match cli.command {
        Commands::Convert(args) => cli::convert::execute(args, config),
        Commands::Config(args) => cli::config::execute(args, &config_path),
    }
}

/// Load the config at `path`, falling back to defaults only when no file exists.
fn load_config(path: &Path) -> anyhow::Result<pngsquash_core::Config> {
    pngsquash_core::Config::load_or_default(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Config for `command`. A broken file is fatal for `convert`; `config`
/// subcommands fall back to defaults so the file can be inspected or re-initialized.
fn resolve_config(path: &Path, command: &Commands) -> anyhow::Result<pngsquash_core::Config> {
    match (load_config(path), command) {
        (Ok(config), _) => Ok(config),
        (Err(e), Commands::Config(_)) => {
            // Logging isn't initialized yet
            eprintln!("Warning: {e:#}");
            Ok(pngsquash_core::Config::default())
        }
        (Err(e), Commands::Convert(_)) => Err(e),
    }
}
