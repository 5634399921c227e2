//! # Rule Catalog
//!
//! The immutable, ordered collection of requirement rules. A catalog is
//! loaded once at startup from a JSON array artifact and shared read-only
//! for the lifetime of the process.
//!
//! Catalog order is meaningful: rules of equal priority are reported in
//! the order the artifact lists them, so regulators can control tie-break
//! presentation by arranging the artifact.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::CatalogError;
use crate::rule::Rule;

/// A validated, ordered set of requirement rules.
///
/// Construction enforces that every rule has a non-empty identifier and
/// that identifiers are unique. The catalog is immutable after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// Build a catalog from rules, validating identifiers.
    ///
    /// Returns [`CatalogError::EmptyRuleId`] or
    /// [`CatalogError::DuplicateRuleId`] when the rule set is not
    /// well-formed. Artifact order is preserved.
    pub fn from_rules(rules: Vec<Rule>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(rules.len());
        for (index, rule) in rules.iter().enumerate() {
            if rule.id.trim().is_empty() {
                return Err(CatalogError::EmptyRuleId { index });
            }
            if !seen.insert(rule.id.as_str()) {
                return Err(CatalogError::DuplicateRuleId {
                    id: rule.id.clone(),
                });
            }
        }
        Ok(Self { rules })
    }

    /// Parse a catalog from its JSON array representation.
    ///
    /// Type-malformed entries (a string where a number is expected, a
    /// scalar where a bound object is expected) fail the whole load.
    /// Unknown condition keys are ignored and leave the rule
    /// unconstrained on that attribute.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let rules: Vec<Rule> = serde_json::from_str(json)?;
        Self::from_rules(rules)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// All rules in artifact order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Look up a rule by identifier.
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    /// Number of rules in the catalog.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the catalog holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn rule(id: &str) -> Rule {
        serde_json::from_str(&format!(
            r#"{{ "id": "{id}", "title": "Rule {id}", "authority": "Authority" }}"#
        ))
        .unwrap()
    }

    #[test]
    fn preserves_artifact_order() {
        let catalog =
            RuleCatalog::from_rules(vec![rule("b"), rule("a"), rule("c")]).unwrap();
        let ids: Vec<&str> = catalog.rules().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = RuleCatalog::from_rules(vec![rule("a"), rule("a")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateRuleId { id } if id == "a"));
    }

    #[test]
    fn rejects_empty_ids() {
        let err = RuleCatalog::from_rules(vec![rule("a"), rule("  ")]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyRuleId { index: 1 }));
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = RuleCatalog::from_rules(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = RuleCatalog::from_rules(vec![rule("3.3"), rule("4.6")]).unwrap();
        assert_eq!(catalog.get("4.6").map(|r| r.title.as_str()), Some("Rule 4.6"));
        assert!(catalog.get("9.9").is_none());
    }

    #[test]
    fn parses_json_array() {
        let catalog = RuleCatalog::from_json_str(
            r#"[
                { "id": "3.3", "title": "Sanitation", "authority": "Health Ministry",
                  "priority": "high" },
                { "id": "4.6", "title": "Alcohol", "authority": "Police",
                  "priority": "medium", "appliesWhen": { "servesAlcohol": true } }
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn rejects_non_array_artifact() {
        assert!(matches!(
            RuleCatalog::from_json_str(r#"{ "rules": [] }"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn rejects_type_malformed_entries() {
        let result = RuleCatalog::from_json_str(
            r#"[ { "id": "x", "title": "t", "authority": "a",
                  "appliesWhen": { "areaM2": { "gte": "big" } } } ]"#,
        );
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[ {{ "id": "3.3", "title": "Sanitation", "authority": "Health Ministry" }} ]"#
        )
        .unwrap();
        let catalog = RuleCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = RuleCatalog::load("/nonexistent/requirements.json").unwrap_err();
        match err {
            CatalogError::Io { path, .. } => {
                assert_eq!(path.to_str(), Some("/nonexistent/requirements.json"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
