//! Generative backend configuration.
//!
//! Configures the base URL, model, API key, and request timeout for the
//! Gemini client. Defaults point to the public Google endpoint. Override
//! via environment variables or explicit construction for testing.

use url::Url;

/// Default model when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default API base when `GEMINI_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Configuration for connecting to the Gemini API.
///
/// Custom `Debug` implementation redacts the `api_key` field to prevent
/// credential leakage in log output.
#[derive(Clone)]
pub struct GenAiConfig {
    /// Base URL of the Generative Language API.
    /// Default: <https://generativelanguage.googleapis.com>
    pub base_url: Url,
    /// API key sent in the `x-goog-api-key` header.
    pub api_key: String,
    /// Model identifier, e.g. `gemini-1.5-flash`.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for GenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenAiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GenAiConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `GEMINI_API_KEY` (required; an empty value counts as missing)
    /// - `GEMINI_MODEL` (default: `gemini-1.5-flash`)
    /// - `GEMINI_BASE_URL` (default: `https://generativelanguage.googleapis.com`)
    /// - `GENAI_TIMEOUT_SECS` (default: 30)
    ///
    /// A missing key is a normal condition, not a fault: callers respond by
    /// running without a generative backend and serving fallback reports.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            base_url: env_url("GEMINI_BASE_URL", DEFAULT_BASE_URL)?,
            api_key,
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            timeout_secs: std::env::var("GENAI_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Create a configuration pointing at a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `base_url` cannot be parsed.
    pub fn local_mock(base_url: &str, api_key: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: Url::parse(base_url)
                .map_err(|e| ConfigError::InvalidUrl("base_url".to_string(), e.to_string()))?,
            api_key: api_key.to_string(),
            model: "gemini-test".to_string(),
            timeout_secs: 5,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY environment variable is required")]
    MissingApiKey,
    #[error("GEMINI_API_KEY contains characters that cannot appear in a header")]
    InvalidApiKey,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
