//! Typed client for the Gemini `generateContent` endpoint.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::{ConfigError, GenAiConfig};
use crate::error::GenAiError;

// -- Types matching the generateContent wire schema ---------------------------

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    /// Concatenate the text parts of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

// -- Client -------------------------------------------------------------------

/// Client for the Gemini text-generation API.
///
/// Holds a connection pool with the API key installed as a default header
/// and the configured timeout applied to every request. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: Url,
    model: String,
    timeout_secs: u64,
}

impl GeminiClient {
    /// Build a client from configuration.
    pub fn new(config: GenAiConfig) -> Result<Self, GenAiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    "x-goog-api-key",
                    reqwest::header::HeaderValue::from_str(&config.api_key)
                        .map_err(|_| GenAiError::Config(ConfigError::InvalidApiKey))?,
                );
                headers
            })
            .build()
            .map_err(|e| GenAiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url,
            model: config.model,
            timeout_secs: config.timeout_secs,
        })
    }

    /// The model identifier requests are sent to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text from a prompt.
    ///
    /// Calls `POST {base_url}/v1beta/models/{model}:generateContent` and
    /// returns the concatenated text of the first candidate. Makes a single
    /// attempt; callers own the fallback decision.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenAiError> {
        let endpoint = "POST :generateContent";
        let url = format!(
            "{}v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        tracing::debug!(model = %self.model, prompt_chars = prompt.len(), "requesting generation");

        let resp = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenAiError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else {
                    GenAiError::Http {
                        endpoint: endpoint.into(),
                        source: e,
                    }
                }
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(GenAiError::Api {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        let decoded: GenerateContentResponse =
            resp.json().await.map_err(|e| GenAiError::Deserialization {
                endpoint: endpoint.into(),
                source: e,
            })?;

        let text = decoded.text();
        if text.trim().is_empty() {
            return Err(GenAiError::EmptyResponse);
        }
        Ok(text)
    }
}
