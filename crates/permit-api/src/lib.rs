//! # permit-api — Axum API Service for the Permit Stack
//!
//! HTTP surface over the requirement matching and report synthesis
//! pipeline. The service loads the rule catalog once at startup,
//! matches submitted business profiles against it, and turns match
//! results into licensing reports, preferring the generative backend
//! and falling back to the deterministic template whenever that
//! backend is absent or misbehaves.
//!
//! ## API Surface
//!
//! | Method | Path                      | Module                     | Purpose                  |
//! |--------|---------------------------|----------------------------|--------------------------|
//! | GET    | `/v1/requirements`        | [`routes::requirements`]   | List the rule catalog    |
//! | POST   | `/v1/requirements/match`  | [`routes::requirements`]   | Match a profile          |
//! | POST   | `/v1/report`              | [`routes::report`]         | Generate a report        |
//! | GET    | `/health/liveness`        | (crate root)               | Liveness probe           |
//! | GET    | `/health/readiness`       | (crate root)               | Readiness probe          |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorsLayer → Handler
//! ```
//!
//! ## OpenAPI
//!
//! Auto-generated OpenAPI spec via utoipa derive macros at `/openapi.json`.

pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`) are mounted outside the API middleware
/// so orchestrators can reach them in any catalog or backend state.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::requirements::router())
        .merge(routes::report::router())
        .merge(openapi::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
