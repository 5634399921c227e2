//! # permit-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the Permit Stack API.
//! Binds to configurable port (default 8080).

use permit_api::state::{AppConfig, AppState};
use permit_core::RuleCatalog;
use permit_engine::ReportSynthesizer;
use permit_genai::{GeminiClient, GenAiConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let config = AppConfig::from_env();

    // Load the rule catalog. A service without rules is useless, so a
    // bad catalog is a startup failure rather than a degraded mode.
    let catalog = RuleCatalog::load(&config.catalog_path).map_err(|e| {
        tracing::error!("Catalog load failed: {e}");
        e
    })?;
    tracing::info!(
        rules = catalog.len(),
        path = %config.catalog_path.display(),
        "rule catalog loaded"
    );

    // Attempt to create the generative backend client from environment.
    let synthesizer = match GenAiConfig::from_env() {
        Ok(genai_config) => match GeminiClient::new(genai_config) {
            Ok(client) => {
                tracing::info!(model = client.model(), "generative backend configured");
                ReportSynthesizer::new(client)
            }
            Err(e) => {
                tracing::error!("Failed to create generative backend client: {e}");
                return Err(e.into());
            }
        },
        Err(e) => {
            tracing::warn!(
                "Generative backend not configured: {e}. Reports will use the deterministic fallback."
            );
            ReportSynthesizer::disabled()
        }
    };

    let state = AppState::new(catalog, synthesizer);
    let app = permit_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Permit API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
