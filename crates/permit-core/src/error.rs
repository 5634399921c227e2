//! # Catalog Errors
//!
//! Structured errors for catalog loading and validation, built with
//! `thiserror`. These surface at startup only: once a [`RuleCatalog`]
//! exists, matching against it is total and cannot fail.
//!
//! [`RuleCatalog`]: crate::catalog::RuleCatalog

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a rule catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog at {path}: {source}")]
    Io {
        /// Path the load was attempted from.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The artifact is not a well-formed JSON array of rules.
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two rules share an identifier.
    #[error("duplicate rule id \"{id}\" in catalog")]
    DuplicateRuleId {
        /// The identifier that appears more than once.
        id: String,
    },

    /// A rule has an empty or whitespace-only identifier.
    #[error("rule at index {index} has an empty id")]
    EmptyRuleId {
        /// Zero-based position of the offending rule in the artifact.
        index: usize,
    },
}
