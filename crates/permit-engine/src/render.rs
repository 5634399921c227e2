//! # Deterministic Report Renderer
//!
//! The fallback path of report synthesis: a pure template that turns a
//! profile and its matched rules into a Markdown report. Byte-identical
//! output for identical inputs. No clock, no network, no I/O, so the
//! pipeline can always complete even with every external dependency down.

use permit_core::{BusinessProfile, Rule};

/// Closing disclaimer carried by every report, generated or fallback.
pub const DISCLAIMER: &str = "This report is informational only and does not \
constitute legal advice. Verify every requirement with the competent \
authorities before acting on it.";

/// Render the deterministic fallback report.
pub fn render_fallback(profile: &BusinessProfile, matched: &[Rule]) -> String {
    let mut md = String::new();

    match profile.display_name() {
        Some(name) => md.push_str(&format!("# Licensing Report: {name}\n\n")),
        None => md.push_str("# Licensing Report\n\n"),
    }

    md.push_str(&format!(
        "**Summary:** prepared from the declared business attributes: floor area {} m\u{b2}, {} seats, {}{}{}{}.\n\n",
        profile.area_m2,
        profile.seats,
        if profile.serves_alcohol {
            "serving alcohol"
        } else {
            "no alcohol service"
        },
        if profile.uses_gas { ", using gas" } else { "" },
        if profile.deliveries {
            ", offering deliveries"
        } else {
            ""
        },
        if profile.serves_meat { ", serving meat" } else { "" },
    ));

    if matched.is_empty() {
        md.push_str(
            "No specific requirements were matched for this profile. \
             General licensing obligations may still apply.\n\n",
        );
    } else {
        md.push_str("## Matched Requirements\n\n");
        for rule in matched {
            md.push_str(&format!("### {}\n", rule.title));
            md.push_str(&format!(
                "*Authority:* {} \u{2022} *Priority:* {}\n\n",
                rule.authority, rule.priority
            ));
            if !rule.steps.is_empty() {
                for step in &rule.steps {
                    md.push_str(&format!("- {step}\n"));
                }
                md.push('\n');
            }
            if let Some(legal_ref) = &rule.legal_ref {
                md.push_str(&format!("_Legal reference:_ {legal_ref}\n\n"));
            }
        }
    }

    md.push_str("---\n");
    md.push_str(&format!("> {DISCLAIMER}\n"));
    md
}
