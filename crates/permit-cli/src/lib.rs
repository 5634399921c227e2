//! # permit-cli — CLI Tool for the Permit Stack
//!
//! Provides the `permit` command-line interface: the same matching and
//! report pipeline as the API service, runnable against a local catalog
//! without standing up a server.
//!
//! ## Subcommands
//!
//! - `permit catalog validate` — Load the rule catalog and report whether
//!   it is well formed.
//! - `permit catalog show` — List the catalog rules.
//! - `permit match` — Match a business profile against the catalog.
//! - `permit report` — Generate a licensing report for a profile.
//!
//! ```bash
//! permit catalog validate --catalog catalog/requirements.json
//! permit match --seats 40 --area-m2 150 --serves-alcohol
//! permit report --profile profile.json --offline --output report.md
//! ```

pub mod catalog;
pub mod matching;
pub mod profile;
pub mod report;

use std::path::PathBuf;

/// Catalog location used when neither the flag nor the environment says
/// otherwise. Matches the API service default.
pub const DEFAULT_CATALOG_PATH: &str = "catalog/requirements.json";

/// Resolve the rule catalog path.
///
/// Precedence: the `--catalog` flag, then the `CATALOG_PATH` environment
/// variable, then [`DEFAULT_CATALOG_PATH`].
pub fn resolve_catalog_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("CATALOG_PATH").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH))
}
