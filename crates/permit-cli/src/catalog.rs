//! # Catalog Subcommand
//!
//! Rule catalog inspection. `validate` loads the catalog the same way
//! the API service does at startup, so a catalog that passes here will
//! also boot the service. `show` lists the rules.
//!
//! ## Commands
//!
//! - `permit catalog validate` — Load and validate, report rule count
//!   or the load error.
//! - `permit catalog show` — List id, priority, authority, and title
//!   for every rule.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use permit_core::{Priority, RuleCatalog};

/// Arguments for the `permit catalog` subcommand.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

/// Catalog subcommands.
#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// Load the catalog and report whether it is well formed.
    Validate,

    /// List every rule in the catalog.
    Show,
}

/// Execute the catalog subcommand.
pub fn run_catalog(args: &CatalogArgs, catalog_path: &Path) -> Result<u8> {
    match args.command {
        CatalogCommand::Validate => cmd_validate(catalog_path),
        CatalogCommand::Show => cmd_show(catalog_path),
    }
}

/// Validate the catalog artifact.
///
/// A rejected catalog is the finding, not an execution error, so it
/// reports FAIL and exits nonzero instead of propagating.
fn cmd_validate(catalog_path: &Path) -> Result<u8> {
    match RuleCatalog::load(catalog_path) {
        Ok(catalog) => {
            let by_priority = |priority: Priority| {
                catalog
                    .rules()
                    .iter()
                    .filter(|r| r.priority == priority)
                    .count()
            };
            println!(
                "OK: catalog '{}' is valid ({} rules)",
                catalog_path.display(),
                catalog.len()
            );
            println!("  high:   {}", by_priority(Priority::High));
            println!("  medium: {}", by_priority(Priority::Medium));
            println!("  low:    {}", by_priority(Priority::Low));
            let unknown = by_priority(Priority::Unknown);
            if unknown > 0 {
                println!("  unknown: {unknown}");
            }
            Ok(0)
        }
        Err(e) => {
            println!("FAIL: {e}");
            Ok(1)
        }
    }
}

/// List the catalog rules.
fn cmd_show(catalog_path: &Path) -> Result<u8> {
    let catalog = RuleCatalog::load(catalog_path)?;

    println!("{:<8} {:<8} {:<28} TITLE", "ID", "PRIORITY", "AUTHORITY");
    for rule in catalog.rules() {
        println!(
            "{:<8} {:<8} {:<28} {}",
            rule.id,
            rule.priority.as_str(),
            rule.authority,
            rule.title
        );
    }
    println!();
    println!("{} rules", catalog.len());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_catalog(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("requirements.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn validate_accepts_well_formed_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(
            &dir,
            r#"[
                {"id": "1.1", "title": "Business license", "authority": "Licensing Authority", "priority": "high"},
                {"id": "2.1", "title": "Signage permit", "authority": "Municipality", "priority": "low"}
            ]"#,
        );

        assert_eq!(cmd_validate(&path).unwrap(), 0);
    }

    #[test]
    fn validate_flags_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(
            &dir,
            r#"[
                {"id": "1.1", "title": "A", "authority": "X"},
                {"id": "1.1", "title": "B", "authority": "Y"}
            ]"#,
        );

        assert_eq!(cmd_validate(&path).unwrap(), 1);
    }

    #[test]
    fn validate_flags_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert_eq!(cmd_validate(&path).unwrap(), 1);
    }

    #[test]
    fn show_lists_rules() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(
            &dir,
            r#"[{"id": "1.1", "title": "Business license", "authority": "Licensing Authority"}]"#,
        );

        assert_eq!(cmd_show(&path).unwrap(), 0);
    }

    #[test]
    fn show_propagates_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert!(cmd_show(&path).is_err());
    }
}
