//! # Requirement Catalog API
//!
//! Endpoints for listing the rule catalog and matching business profiles
//! against it. Matching is a pure function of the request body and the
//! catalog loaded at startup, so identical requests always yield
//! identical responses.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use permit_core::{BusinessProfile, Rule};
use permit_engine::match_requirements;

use crate::error::{AppError, ErrorBody};
use crate::extractors::extract_validated_json;
use crate::state::AppState;

/// The full rule catalog, in catalog order.
#[derive(Debug, Serialize, ToSchema)]
pub struct RequirementsResponse {
    /// Number of rules in the catalog.
    pub count: usize,
    /// Every rule in the catalog.
    pub requirements: Vec<Rule>,
}

/// Rules applicable to a submitted profile.
#[derive(Debug, Serialize, ToSchema)]
pub struct MatchResponse {
    /// Applicable rules, highest priority first.
    pub matched: Vec<Rule>,
    /// The profile the match was computed for, with defaults applied.
    pub profile: BusinessProfile,
}

/// Build the requirements router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/requirements", get(list_requirements))
        .route("/v1/requirements/match", post(match_profile))
}

/// GET /v1/requirements - List the full rule catalog.
#[utoipa::path(
    get,
    path = "/v1/requirements",
    responses(
        (status = 200, description = "The complete rule catalog", body = RequirementsResponse),
    ),
    tag = "requirements"
)]
pub(crate) async fn list_requirements(
    State(state): State<AppState>,
) -> Json<RequirementsResponse> {
    let requirements = state.catalog.rules().to_vec();
    Json(RequirementsResponse {
        count: requirements.len(),
        requirements,
    })
}

/// POST /v1/requirements/match - Match a business profile against the catalog.
#[utoipa::path(
    post,
    path = "/v1/requirements/match",
    request_body = BusinessProfile,
    responses(
        (status = 200, description = "Applicable rules, highest priority first", body = MatchResponse),
        (status = 400, description = "Malformed request body", body = ErrorBody),
        (status = 422, description = "Profile failed validation", body = ErrorBody),
    ),
    tag = "requirements"
)]
pub(crate) async fn match_profile(
    State(state): State<AppState>,
    body: Result<Json<BusinessProfile>, JsonRejection>,
) -> Result<Json<MatchResponse>, AppError> {
    let profile = extract_validated_json(body)?;
    let matched = match_requirements(&profile, &state.catalog);
    Ok(Json(MatchResponse { matched, profile }))
}
