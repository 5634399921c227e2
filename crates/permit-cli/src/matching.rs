//! # Match Subcommand
//!
//! Offline requirement matching: load the catalog, build the profile
//! from flags or a file, and print the applicable rules. The same pure
//! matcher the API service uses, so the CLI and the service always
//! agree on a profile.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use permit_core::RuleCatalog;
use permit_engine::match_requirements;

use crate::profile::ProfileOpts;

/// Arguments for the `permit match` subcommand.
#[derive(Args, Debug)]
pub struct MatchArgs {
    #[command(flatten)]
    pub profile: ProfileOpts,

    /// Print the matched rules as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Execute the match subcommand.
pub fn run_match(args: &MatchArgs, catalog_path: &Path) -> Result<u8> {
    let catalog = RuleCatalog::load(catalog_path)
        .with_context(|| format!("failed to load catalog: {}", catalog_path.display()))?;
    let profile = args.profile.load()?;
    let matched = match_requirements(&profile, &catalog);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(0);
    }

    println!(
        "Matched {} of {} requirements for '{}':",
        matched.len(),
        catalog.len(),
        profile.display_name().unwrap_or("unnamed business")
    );
    for rule in &matched {
        println!(
            "  [{:<6}] {:<8} {} ({})",
            rule.id,
            rule.priority.as_str(),
            rule.title,
            rule.authority
        );
    }
    Ok(0)
}
