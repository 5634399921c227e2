//! # Business Profile
//!
//! The applicant-supplied snapshot of business attributes that drives
//! requirement matching and report generation. The wire format is camelCase
//! JSON, matching the catalog artifact and the public HTTP contract.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The attributes a business operator supplies when asking which
/// requirements apply to them.
///
/// Every field may be omitted on the wire: absent numerics deserialize to
/// zero and absent flags to `false`, so a partially answered questionnaire
/// still yields a well-formed profile. A profile is immutable for the
/// duration of a matching or report request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessProfile {
    /// Display name used to address the report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// Seating capacity of the establishment.
    pub seats: u32,
    /// Floor area in square metres.
    pub area_m2: f64,
    /// Whether the business serves or sells alcohol.
    pub serves_alcohol: bool,
    /// Whether the business uses gas for cooking or heating.
    pub uses_gas: bool,
    /// Whether the business offers a delivery service.
    pub deliveries: bool,
    /// Whether the business serves meat.
    pub serves_meat: bool,
}

impl BusinessProfile {
    /// The name to address a report to, when one was provided.
    ///
    /// Empty and whitespace-only names are treated as absent.
    pub fn display_name(&self) -> Option<&str> {
        self.business_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
