//! # Prompt Construction
//!
//! Builds the instruction sent to the generative backend. The instruction
//! fixes the report shape; the profile and matched rules travel as
//! pretty-printed JSON context so the backend sees exactly what the
//! matcher decided, nothing more.

use permit_core::{BusinessProfile, Rule};

const INSTRUCTION: &str = "You are preparing a licensing compliance report \
for a food business, in Markdown.
Include: a short summary, the matched requirements grouped by priority and \
authority, practical action steps as bullet points, legal references where \
available, and a closing disclaimer that the report is informational only \
and not legal advice.
Keep the style concise and accessible to business owners. When a business \
name is provided, address the report to it. Do not invent requirements \
beyond the matched list.";

/// Build the full prompt for a generation attempt.
pub fn build_prompt(profile: &BusinessProfile, matched: &[Rule]) -> String {
    let profile_json =
        serde_json::to_string_pretty(profile).unwrap_or_else(|_| "{}".to_string());
    let matched_json =
        serde_json::to_string_pretty(matched).unwrap_or_else(|_| "[]".to_string());

    format!(
        "{INSTRUCTION}\n\nBusiness attributes:\n{profile_json}\n\n\
         Matched requirements:\n{matched_json}\n\n\
         Produce the Markdown report according to the guidelines."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_profile_and_rules_as_json() {
        let profile = BusinessProfile {
            business_name: Some("Cafe Luna".to_string()),
            seats: 40,
            area_m2: 120.0,
            serves_alcohol: true,
            ..Default::default()
        };
        let rules: Vec<Rule> = serde_json::from_str(
            r#"[{ "id": "4.6", "title": "Alcohol signage", "authority": "Police" }]"#,
        )
        .unwrap();

        let prompt = build_prompt(&profile, &rules);
        assert!(prompt.contains("\"businessName\": \"Cafe Luna\""));
        assert!(prompt.contains("\"areaM2\": 120.0"));
        assert!(prompt.contains("\"id\": \"4.6\""));
        assert!(prompt.contains("Business attributes:"));
        assert!(prompt.contains("Matched requirements:"));
    }

    #[test]
    fn prompt_is_deterministic() {
        let profile = BusinessProfile::default();
        assert_eq!(build_prompt(&profile, &[]), build_prompt(&profile, &[]));
    }

    #[test]
    fn empty_match_list_serializes_as_empty_array() {
        let prompt = build_prompt(&BusinessProfile::default(), &[]);
        assert!(prompt.contains("Matched requirements:\n[]"));
    }
}
