//! bindata CLI - embed directories of binary files as generated source
//!
//! Walks one or more resource directories and writes a C++ header (or Rust
//! module) exposing every file's bytes through a lookup table keyed by its
//! root-relative path.

use clap::{CommandFactory, Parser};
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::generate::{GenerateArgs, Settings};
use commands::{completions, generate};
use config::BindataConfig;
use output::OutputFormat;

/// Embed resource directories into generated source.
///
/// Every regular, non-empty file under the given directories becomes an
/// entry keyed by its path relative to the directory it was found in.
#[derive(Parser)]
#[command(name = "bindata")]
#[command(author, version)]
#[command(about = "Embed resource directories into generated source")]
#[command(after_help = "Examples:
  bindata -d assets -o BinaryData.h -n BinaryData
  bindata -d assets -d fonts -o src/assets.rs -n assets
  bindata -d assets -o out.h -n Assets --on-collision error --manifest out.json")]
pub struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,

    /// Read settings from this file instead of ./.bindatarc.toml
    #[arg(long, value_name = "PATH")]
    config: Option<std::path::PathBuf>,

    /// Report format (overrides config default)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<completions::Shell>,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        return completions::run(shell, &mut Cli::command());
    }

    setup_logging(cli.verbose, cli.quiet);

    // Explicit --config must load; the implicit file falls back to defaults
    let config = match &cli.config {
        Some(path) => BindataConfig::load_from(path)?,
        None => BindataConfig::load(Path::new(".")),
    };

    // Resolve report format: CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Table)
    });

    if let Some(use_color) = config.use_color() {
        colored::control::set_override(use_color);
    }

    let settings = Settings::resolve(cli.generate, config)?;
    generate::run(&settings, format, cli.quiet)
}
