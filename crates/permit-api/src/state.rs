//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! Both members are immutable after startup: the catalog is loaded once
//! and never changes, and the synthesizer holds at most a connection pool.
//! `Arc` makes per-request cloning cheap and removes any need for locks.

use std::path::PathBuf;
use std::sync::Arc;

use permit_core::RuleCatalog;
use permit_engine::ReportSynthesizer;

/// Process configuration read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the server binds to.
    pub port: u16,
    /// Path of the rule catalog artifact.
    pub catalog_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            catalog_path: PathBuf::from("catalog/requirements.json"),
        }
    }
}

impl AppConfig {
    /// Build configuration from `PORT` and `CATALOG_PATH`, falling back to
    /// the defaults (8080, `catalog/requirements.json`).
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            catalog_path: std::env::var("CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
        }
    }
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The rule catalog, loaded once at startup.
    pub catalog: Arc<RuleCatalog>,
    /// The report synthesizer, with or without a generative backend.
    pub synthesizer: Arc<ReportSynthesizer>,
}

impl AppState {
    /// Assemble state from a loaded catalog and a synthesizer.
    pub fn new(catalog: RuleCatalog, synthesizer: ReportSynthesizer) -> Self {
        Self {
            catalog: Arc::new(catalog),
            synthesizer: Arc::new(synthesizer),
        }
    }
}
