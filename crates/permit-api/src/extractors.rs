//! # Custom Extractors & Validation
//!
//! Provides the [`Validate`] trait for request bodies and helpers to
//! extract + validate JSON in handlers. Deserialization failures map to
//! 400 with the rejection text; business-rule failures map to 422.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use permit_core::BusinessProfile;

use crate::error::AppError;

/// Trait for request types that can validate their business rules
/// beyond what serde deserialization checks.
pub trait Validate {
    /// Validate business rules. Returns an error message on failure.
    fn validate(&self) -> Result<(), String>;
}

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
///
/// Handlers should use:
/// ```ignore
/// async fn handler(body: Result<Json<T>, JsonRejection>) -> Result<..., AppError> {
///     let profile = extract_json(body)?;
///     // use profile...
/// }
/// ```
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract a JSON body and validate it using the [`Validate`] trait.
///
/// Combines deserialization error mapping with business rule validation.
pub fn extract_validated_json<T: Validate>(
    result: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let value = extract_json(result)?;
    value.validate().map_err(AppError::Validation)?;
    Ok(value)
}

/// Boundary validation for incoming profiles.
///
/// Seat counts are non-negative by type; the floor area arrives as a JSON
/// number and needs the finiteness and sign checks here. Absent fields
/// already defaulted during deserialization, so a minimal body passes.
impl Validate for BusinessProfile {
    fn validate(&self) -> Result<(), String> {
        if !self.area_m2.is_finite() {
            return Err("areaM2 must be a finite number".to_string());
        }
        if self.area_m2 < 0.0 {
            return Err("areaM2 must not be negative".to_string());
        }
        Ok(())
    }
}
