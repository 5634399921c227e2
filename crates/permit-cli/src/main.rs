//! # permit CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use permit_cli::catalog::{run_catalog, CatalogArgs};
use permit_cli::matching::{run_match, MatchArgs};
use permit_cli::report::{run_report, ReportArgs};

/// Permit Stack CLI
///
/// Requirement matching and report synthesis against a local rule
/// catalog: catalog validation and inspection, offline matching, and
/// licensing report generation.
#[derive(Parser, Debug)]
#[command(name = "permit", version = "0.3.1", about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the rule catalog (overrides CATALOG_PATH).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate or inspect the rule catalog.
    Catalog(CatalogArgs),

    /// Match a business profile against the catalog.
    Match(MatchArgs),

    /// Generate a licensing report for a business profile.
    Report(ReportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let catalog_path = permit_cli::resolve_catalog_path(cli.catalog);
    tracing::debug!(catalog = %catalog_path.display(), "resolved catalog path");

    let result = match cli.command {
        Commands::Catalog(args) => run_catalog(&args, &catalog_path),
        Commands::Match(args) => run_match(&args, &catalog_path),
        Commands::Report(args) => run_report(&args, &catalog_path),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
