//! # Report Generation API
//!
//! Single endpoint that turns a business profile into a licensing
//! report. The synthesizer behind it never fails: when the generative
//! backend is missing, slow, or broken, the response carries the
//! deterministic fallback text and says so in `provenance`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use permit_core::BusinessProfile;
use permit_engine::{match_requirements, Report};

use crate::error::{AppError, ErrorBody};
use crate::extractors::extract_validated_json;
use crate::state::AppState;

/// Build the report router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/report", post(generate_report))
}

/// POST /v1/report - Generate a licensing report for a business profile.
#[utoipa::path(
    post,
    path = "/v1/report",
    request_body = BusinessProfile,
    responses(
        (status = 200, description = "The report text plus the match results it was built from; \
            `provenance` records whether the generative backend or the deterministic template \
            produced the text", body = Report),
        (status = 400, description = "Malformed request body", body = ErrorBody),
        (status = 422, description = "Profile failed validation", body = ErrorBody),
    ),
    tag = "report"
)]
pub(crate) async fn generate_report(
    State(state): State<AppState>,
    body: Result<Json<BusinessProfile>, JsonRejection>,
) -> Result<Json<Report>, AppError> {
    let profile = extract_validated_json(body)?;
    let matched = match_requirements(&profile, &state.catalog);
    let report = state.synthesizer.synthesize(&profile, &matched).await;
    Ok(Json(report))
}
