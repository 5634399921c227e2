//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec.
//! Serves at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Permit API — Requirement Matching & Report Synthesis",
        version = "0.3.1",
        description = "Axum API service for the Permit Stack: rule catalog listing, \
            business-profile matching, and licensing report generation with a \
            deterministic fallback.",
        license(name = "Apache-2.0")
    ),
    paths(
        // Requirements
        crate::routes::requirements::list_requirements,
        crate::routes::requirements::match_profile,
        // Report
        crate::routes::report::generate_report,
    ),
    components(schemas(
        // Domain types
        permit_core::BusinessProfile,
        permit_core::Rule,
        permit_core::Priority,
        permit_core::AppliesWhen,
        permit_core::NumericBound,
        // Report types
        permit_engine::Report,
        permit_engine::ReportProvenance,
        // Error types
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        // Requirements DTOs
        crate::routes::requirements::RequirementsResponse,
        crate::routes::requirements::MatchResponse,
    )),
    tags(
        (name = "requirements", description = "Rule catalog and profile matching"),
        (name = "report", description = "Licensing report generation"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
///
/// Serves the OpenAPI JSON spec at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
