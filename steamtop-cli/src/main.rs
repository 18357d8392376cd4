// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! `SteamTop` CLI - most-played Steam titles from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Serve the HTTP API on the configured address
//! steamtop serve
//!
//! # Serve on another address
//! steamtop serve --bind 0.0.0.0:9000
//!
//! # Top 10 titles as JSON
//! steamtop games --rows 10 --pretty
//!
//! # Top 25 titles as a table, five pages at a time
//! steamtop games --rows 25 --concurrency 5 --format text
//!
//! # Save a storefront page as a parser fixture
//! steamtop dump 570 --out tests/html
//! ```

mod api;
mod commands;
mod config;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use steamtop_core::CoreError;
use steamtop_fetch::PipelineError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{dump, games, serve};
use config::{Config, ConfigError};

// ============================================================================
// CLI Definition
// ============================================================================

/// `SteamTop` CLI - most-played Steam titles with storefront details.
#[derive(Parser)]
#[command(name = "steamtop")]
#[command(about = "Most-played Steam titles with storefront details")]
#[command(long_about = r#"
SteamTop reads the SteamSpy "top 100 in two weeks" ranking and scrapes
each title's Steam storefront page for its name, release date, price and
review score.

Examples:
  steamtop serve                       # HTTP API on 127.0.0.1:8000
  steamtop games --rows 10             # One query, JSON to stdout
  steamtop games --rows 10 -f text     # Same, as a table
  steamtop dump 570                    # Save tests/html/570.html
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (default: <config dir>/steamtop/config.json).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (json or text).
    #[arg(long, short = 'f', default_value = "json", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (no logging).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Serve the HTTP API.
    #[command(visible_alias = "s")]
    Serve(serve::ServeArgs),

    /// Run one games query and print the result.
    #[command(visible_alias = "g")]
    Games(games::GamesArgs),

    /// Save a raw storefront page to disk.
    Dump(dump::DumpArgs),

    /// Inspect configuration.
    Config(commands::config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// JSON output for scripting.
    #[default]
    Json,
    /// Human-readable table.
    Text,
}

/// CLI exit codes for failures.
#[repr(i32)]
pub enum ExitCode {
    /// General error.
    Error = 1,
    /// Configuration could not be loaded.
    Config = 2,
    /// Query parameters out of range.
    InvalidQuery = 3,
    /// Top list or a detail page could not be fetched.
    Upstream = 4,
}

impl ExitCode {
    fn for_error(err: &anyhow::Error) -> Self {
        if err.downcast_ref::<ConfigError>().is_some() {
            Self::Config
        } else if err.downcast_ref::<CoreError>().is_some() {
            Self::InvalidQuery
        } else if err.downcast_ref::<PipelineError>().is_some() {
            Self::Upstream
        } else {
            Self::Error
        }
    }
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool, default_filter: &str) {
    if quiet {
        return;
    }

    let filter = if verbose {
        EnvFilter::new("steamtop=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(ExitCode::Config as i32);
        }
    };

    setup_logging(cli.verbose, cli.quiet, &config.log_level);

    let result = match &cli.command {
        Commands::Serve(args) => serve::run(args, &config).await,
        Commands::Games(args) => games::run(args, &cli, &config).await,
        Commands::Dump(args) => dump::run(args, &cli, &config).await,
        Commands::Config(args) => commands::config::run(args, &cli, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(ExitCode::for_error(&e) as i32);
    }

    Ok(())
}
