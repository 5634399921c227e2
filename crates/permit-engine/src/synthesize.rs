//! # Report Synthesizer
//!
//! Produces the final compliance report. A configured generative backend
//! gets one bounded attempt; anything short of usable text is logged and
//! answered with the deterministic template instead. The always-succeeds
//! guarantee is structural: [`ReportSynthesizer::synthesize`] returns
//! [`Report`], not a `Result`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use permit_core::{BusinessProfile, Rule};
use permit_genai::GeminiClient;

use crate::prompt::build_prompt;
use crate::render::{render_fallback, DISCLAIMER};

/// How a report's text was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportProvenance {
    /// The generative backend produced the text.
    Generated,
    /// The deterministic template renderer produced the text.
    Fallback,
}

impl ReportProvenance {
    /// Lowercase label as it appears on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generated => "generated",
            Self::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for ReportProvenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A finished compliance report together with the inputs it was built from.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// The Markdown report text.
    #[serde(rename = "report")]
    pub text: String,
    /// Which pipeline produced the text.
    pub provenance: ReportProvenance,
    /// The profile the report was built for.
    pub profile: BusinessProfile,
    /// The matched rules the report covers, in presentation order.
    pub matched: Vec<Rule>,
    /// Model identifier, present when the generative backend produced the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
}

/// Builds compliance reports, preferring the generative backend and
/// guaranteeing the deterministic fallback.
#[derive(Debug, Clone)]
pub struct ReportSynthesizer {
    backend: Option<GeminiClient>,
}

impl ReportSynthesizer {
    /// A synthesizer that attempts the generative backend first.
    pub fn new(backend: GeminiClient) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// A synthesizer that always renders the deterministic fallback.
    pub fn disabled() -> Self {
        Self { backend: None }
    }

    /// True when a generative backend is configured.
    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Produce a report for a profile and its matched rules.
    ///
    /// This function cannot fail. A missing backend, a timeout, an API
    /// error, or an unusable response all end in the fallback report with
    /// `provenance = fallback`; the cause is recorded in the log, never
    /// surfaced to the caller.
    pub async fn synthesize(&self, profile: &BusinessProfile, matched: &[Rule]) -> Report {
        let (text, provenance, model) = match &self.backend {
            None => {
                tracing::debug!("no generative backend configured, rendering fallback report");
                (
                    render_fallback(profile, matched),
                    ReportProvenance::Fallback,
                    None,
                )
            }
            Some(client) => {
                let prompt = build_prompt(profile, matched);
                match client.generate(&prompt).await {
                    Ok(generated) => (
                        ensure_disclaimer(generated),
                        ReportProvenance::Generated,
                        Some(client.model().to_string()),
                    ),
                    Err(error) => {
                        tracing::warn!(%error, "generative backend failed, serving fallback report");
                        (
                            render_fallback(profile, matched),
                            ReportProvenance::Fallback,
                            None,
                        )
                    }
                }
            }
        };

        Report {
            text,
            provenance,
            profile: profile.clone(),
            matched: matched.to_vec(),
            model,
            generated_at: Utc::now(),
        }
    }
}

/// Append the standard disclaimer when the generated text carries none.
///
/// The backend is instructed to close with a disclaimer, but the guarantee
/// that every report carries one cannot rest on instructions alone.
fn ensure_disclaimer(text: String) -> String {
    if text.to_lowercase().contains("legal advice") {
        text
    } else {
        format!("{}\n\n---\n> {DISCLAIMER}\n", text.trim_end())
    }
}
