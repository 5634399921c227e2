//! # Requirement Matcher
//!
//! Selects the catalog rules that apply to a profile and orders them for
//! presentation. Condition evaluation itself lives on the types in
//! `permit-core`; this module composes it over a whole catalog.

use permit_core::{BusinessProfile, Rule, RuleCatalog};

/// Match a profile against a catalog.
///
/// Returns the applicable rules ordered highest priority first. The sort is
/// stable, so rules of equal priority keep their catalog order. Pure and
/// total: no I/O, no clock, and identical inputs yield identical output.
pub fn match_requirements(profile: &BusinessProfile, catalog: &RuleCatalog) -> Vec<Rule> {
    let mut matched: Vec<Rule> = catalog
        .rules()
        .iter()
        .filter(|rule| rule.applies_to(profile))
        .cloned()
        .collect();
    // Vec::sort_by_key is stable; catalog order breaks priority ties.
    matched.sort_by_key(|rule| rule.priority.rank());
    matched
}
