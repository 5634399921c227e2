//! # Report Subcommand
//!
//! End-to-end report generation from the command line. Matches the
//! profile, then synthesizes the report through the same pipeline as
//! the API service: generative backend when `GEMINI_API_KEY` is set
//! and `--offline` is not given, deterministic fallback otherwise.
//!
//! The report text goes to stdout (or `--output <file>`); provenance
//! goes to stderr so piped output stays clean markdown.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use permit_core::RuleCatalog;
use permit_engine::{match_requirements, ReportSynthesizer};
use permit_genai::{GeminiClient, GenAiConfig};

use crate::profile::ProfileOpts;

/// Arguments for the `permit report` subcommand.
#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub profile: ProfileOpts,

    /// Write the report to a file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Skip the generative backend and use the deterministic template.
    #[arg(long)]
    pub offline: bool,
}

/// Execute the report subcommand.
pub fn run_report(args: &ReportArgs, catalog_path: &Path) -> Result<u8> {
    let catalog = RuleCatalog::load(catalog_path)
        .with_context(|| format!("failed to load catalog: {}", catalog_path.display()))?;
    let profile = args.profile.load()?;
    let matched = match_requirements(&profile, &catalog);

    let synthesizer = if args.offline {
        ReportSynthesizer::disabled()
    } else {
        match GenAiConfig::from_env() {
            Ok(config) => ReportSynthesizer::new(GeminiClient::new(config)?),
            Err(e) => {
                tracing::warn!(
                    "Generative backend not configured: {e}. Using the deterministic fallback."
                );
                ReportSynthesizer::disabled()
            }
        }
    };

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let report = runtime.block_on(synthesizer.synthesize(&profile, &matched));

    match &args.output {
        Some(path) => {
            std::fs::write(path, &report.text)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            eprintln!("Report written to {}", path.display());
        }
        None => println!("{}", report.text),
    }
    eprintln!("provenance: {}", report.provenance);
    if let Some(model) = &report.model {
        eprintln!("model: {model}");
    }

    Ok(0)
}
