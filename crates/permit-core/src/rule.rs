//! # Requirement Rules and Applicability Conditions
//!
//! Defines [`Rule`], the unit of the catalog, together with its
//! applicability conditions ([`AppliesWhen`], [`NumericBound`]) and the
//! [`Priority`] ordering used to arrange matched rules in reports.
//!
//! Condition evaluation lives here, on the types themselves. The matcher in
//! `permit-engine` composes these evaluations over a whole catalog; it adds
//! no semantics of its own.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::profile::BusinessProfile;

/// Urgency class of a requirement.
///
/// Matched rules are reported highest urgency first. Catalog entries with a
/// missing or unrecognized priority deserialize to [`Priority::Unknown`]
/// and sort after every recognized class.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Must be addressed before operating.
    High,
    /// Should be addressed promptly.
    Medium,
    /// Good practice or a low-urgency obligation.
    Low,
    /// The catalog entry carried no recognized priority.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Priority {
    /// Sort rank for report ordering. Lower ranks print first.
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
            Self::Unknown => 9,
        }
    }

    /// Lowercase label as it appears in catalogs and reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inclusive numeric constraints on a single profile attribute.
///
/// Every bound that is present must hold simultaneously. An empty bound set
/// holds for any value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct NumericBound {
    /// The attribute must be greater than or equal to this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<f64>,
    /// The attribute must be less than or equal to this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<f64>,
    /// The attribute must equal this value exactly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eq: Option<f64>,
}

impl NumericBound {
    /// Evaluate the bounds against an attribute value.
    pub fn holds(&self, value: f64) -> bool {
        if let Some(min) = self.gte {
            if !(value >= min) {
                return false;
            }
        }
        if let Some(max) = self.lte {
            if !(value <= max) {
                return false;
            }
        }
        if let Some(exact) = self.eq {
            if value != exact {
                return false;
            }
        }
        true
    }
}

/// Conditions under which a rule applies to a profile.
///
/// Absent fields are unconstrained; a rule whose condition block is empty
/// applies to every profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AppliesWhen {
    /// Bounds on the floor area in square metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_m2: Option<NumericBound>,
    /// Bounds on the seating capacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<NumericBound>,
    /// Required value of the alcohol flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serves_alcohol: Option<bool>,
    /// Required value of the gas-usage flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses_gas: Option<bool>,
    /// Required value of the deliveries flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliveries: Option<bool>,
    /// Required value of the meat flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serves_meat: Option<bool>,
}

impl AppliesWhen {
    /// True when no condition is declared.
    pub fn is_unconditional(&self) -> bool {
        *self == Self::default()
    }

    /// Evaluate the declared conditions against a profile.
    ///
    /// Numeric bounds are inclusive and combine with AND across fields.
    /// Declared boolean conditions must match the profile exactly, `false`
    /// included: a rule conditioned on `servesAlcohol: false` applies only
    /// to businesses that do not serve alcohol.
    pub fn accepts(&self, profile: &BusinessProfile) -> bool {
        if let Some(bound) = &self.area_m2 {
            if !bound.holds(profile.area_m2) {
                return false;
            }
        }
        if let Some(bound) = &self.seats {
            if !bound.holds(f64::from(profile.seats)) {
                return false;
            }
        }
        if let Some(required) = self.serves_alcohol {
            if profile.serves_alcohol != required {
                return false;
            }
        }
        if let Some(required) = self.uses_gas {
            if profile.uses_gas != required {
                return false;
            }
        }
        if let Some(required) = self.deliveries {
            if profile.deliveries != required {
                return false;
            }
        }
        if let Some(required) = self.serves_meat {
            if profile.serves_meat != required {
                return false;
            }
        }
        true
    }
}

/// A single catalog requirement: what a business must do, which authority
/// demands it, and when it applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Stable identifier, unique within a catalog.
    pub id: String,
    /// Short human-readable requirement title.
    pub title: String,
    /// The authority that enforces the requirement.
    pub authority: String,
    /// Urgency class; absent in the artifact means [`Priority::Unknown`].
    #[serde(default)]
    pub priority: Priority,
    /// Ordered action steps toward satisfying the requirement.
    #[serde(default)]
    pub steps: Vec<String>,
    /// Statutory or regulatory citation, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_ref: Option<String>,
    /// Applicability conditions; an absent block applies to every profile.
    #[serde(default)]
    pub applies_when: AppliesWhen,
}

impl Rule {
    /// Evaluate this rule's conditions against a profile.
    pub fn applies_to(&self, profile: &BusinessProfile) -> bool {
        self.applies_when.accepts(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> BusinessProfile {
        BusinessProfile {
            business_name: Some("Test Kitchen".to_string()),
            seats: 60,
            area_m2: 150.0,
            serves_alcohol: true,
            uses_gas: false,
            deliveries: true,
            serves_meat: false,
        }
    }

    // ── priority ────────────────────────────────────────────────────────

    #[test]
    fn priority_ranks_order_high_before_low() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
        assert!(Priority::Low.rank() < Priority::Unknown.rank());
    }

    #[test]
    fn priority_deserializes_lowercase_labels() {
        assert_eq!(
            serde_json::from_str::<Priority>("\"high\"").unwrap(),
            Priority::High
        );
        assert_eq!(
            serde_json::from_str::<Priority>("\"medium\"").unwrap(),
            Priority::Medium
        );
        assert_eq!(
            serde_json::from_str::<Priority>("\"low\"").unwrap(),
            Priority::Low
        );
    }

    #[test]
    fn unrecognized_priority_becomes_unknown() {
        assert_eq!(
            serde_json::from_str::<Priority>("\"critical\"").unwrap(),
            Priority::Unknown
        );
    }

    #[test]
    fn priority_display_matches_wire_label() {
        assert_eq!(Priority::High.to_string(), "high");
        assert_eq!(Priority::Unknown.to_string(), "unknown");
        assert_eq!(
            serde_json::to_string(&Priority::Medium).unwrap(),
            "\"medium\""
        );
    }

    // ── numeric bounds ──────────────────────────────────────────────────

    #[test]
    fn empty_bound_holds_for_anything() {
        let bound = NumericBound::default();
        assert!(bound.holds(0.0));
        assert!(bound.holds(-17.5));
        assert!(bound.holds(1e9));
    }

    #[test]
    fn gte_is_inclusive() {
        let bound = NumericBound {
            gte: Some(50.0),
            ..Default::default()
        };
        assert!(bound.holds(50.0));
        assert!(bound.holds(50.1));
        assert!(!bound.holds(49.9));
    }

    #[test]
    fn lte_is_inclusive() {
        let bound = NumericBound {
            lte: Some(200.0),
            ..Default::default()
        };
        assert!(bound.holds(200.0));
        assert!(!bound.holds(200.5));
    }

    #[test]
    fn all_present_bounds_must_hold() {
        let bound = NumericBound {
            gte: Some(10.0),
            lte: Some(20.0),
            ..Default::default()
        };
        assert!(bound.holds(10.0));
        assert!(bound.holds(15.0));
        assert!(bound.holds(20.0));
        assert!(!bound.holds(9.0));
        assert!(!bound.holds(21.0));
    }

    #[test]
    fn eq_requires_exact_value() {
        let bound = NumericBound {
            eq: Some(3.0),
            ..Default::default()
        };
        assert!(bound.holds(3.0));
        assert!(!bound.holds(3.0001));
    }

    // ── applicability ───────────────────────────────────────────────────

    #[test]
    fn empty_conditions_accept_every_profile() {
        let conditions = AppliesWhen::default();
        assert!(conditions.is_unconditional());
        assert!(conditions.accepts(&profile()));
        assert!(conditions.accepts(&BusinessProfile::default()));
    }

    #[test]
    fn numeric_conditions_combine_with_and() {
        let conditions = AppliesWhen {
            area_m2: Some(NumericBound {
                gte: Some(100.0),
                ..Default::default()
            }),
            seats: Some(NumericBound {
                gte: Some(100.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        // Area passes, seats does not.
        assert!(!conditions.accepts(&profile()));
    }

    #[test]
    fn declared_true_flag_must_be_set() {
        let conditions = AppliesWhen {
            serves_alcohol: Some(true),
            ..Default::default()
        };
        assert!(conditions.accepts(&profile()));

        let dry = BusinessProfile::default();
        assert!(!conditions.accepts(&dry));
    }

    #[test]
    fn declared_false_flag_excludes_set_profiles() {
        let conditions = AppliesWhen {
            serves_alcohol: Some(false),
            ..Default::default()
        };
        // The profile serves alcohol, so a false condition excludes it.
        assert!(!conditions.accepts(&profile()));
        assert!(conditions.accepts(&BusinessProfile::default()));
    }

    #[test]
    fn defaulted_numeric_fields_evaluate_as_zero() {
        let conditions = AppliesWhen {
            area_m2: Some(NumericBound {
                gte: Some(1.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        // A profile that never declared an area has area zero.
        assert!(!conditions.accepts(&BusinessProfile::default()));

        let at_most = AppliesWhen {
            area_m2: Some(NumericBound {
                lte: Some(50.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(at_most.accepts(&BusinessProfile::default()));
    }

    // ── rule wire format ────────────────────────────────────────────────

    #[test]
    fn rule_deserializes_catalog_entry() {
        let rule: Rule = serde_json::from_str(
            r#"{
                "id": "4.6",
                "title": "Alcohol sale supervision",
                "authority": "Police",
                "priority": "medium",
                "steps": ["Post the required signage", "Keep the license on premises"],
                "legalRef": "Chapter 4.6",
                "appliesWhen": { "servesAlcohol": true, "seats": { "gte": 20 } }
            }"#,
        )
        .unwrap();
        assert_eq!(rule.id, "4.6");
        assert_eq!(rule.priority, Priority::Medium);
        assert_eq!(rule.steps.len(), 2);
        assert_eq!(rule.legal_ref.as_deref(), Some("Chapter 4.6"));
        assert_eq!(rule.applies_when.serves_alcohol, Some(true));
        assert_eq!(
            rule.applies_when.seats,
            Some(NumericBound {
                gte: Some(20.0),
                ..Default::default()
            })
        );
    }

    #[test]
    fn minimal_rule_defaults_optional_fields() {
        let rule: Rule = serde_json::from_str(
            r#"{ "id": "x", "title": "Generic duty", "authority": "Municipality" }"#,
        )
        .unwrap();
        assert_eq!(rule.priority, Priority::Unknown);
        assert!(rule.steps.is_empty());
        assert!(rule.legal_ref.is_none());
        assert!(rule.applies_when.is_unconditional());
        assert!(rule.applies_to(&BusinessProfile::default()));
    }

    #[test]
    fn malformed_condition_value_is_a_parse_error() {
        let result = serde_json::from_str::<Rule>(
            r#"{
                "id": "x",
                "title": "t",
                "authority": "a",
                "appliesWhen": { "seats": { "gte": "many" } }
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_condition_keys_are_ignored() {
        let rule: Rule = serde_json::from_str(
            r#"{
                "id": "x",
                "title": "t",
                "authority": "a",
                "appliesWhen": { "outdoorSeating": true }
            }"#,
        )
        .unwrap();
        assert!(rule.applies_when.is_unconditional());
    }
}
