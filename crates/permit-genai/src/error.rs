//! Error taxonomy for the Gemini client.
//!
//! Every failure mode of a generation attempt is a distinct variant, so
//! callers can log precisely what went wrong before taking their fallback
//! path. Nothing here is retried: the report pipeline treats any variant
//! as "use the deterministic renderer".

use thiserror::Error;

use crate::config::ConfigError;

/// Errors from the generative backend client.
#[derive(Debug, Error)]
pub enum GenAiError {
    /// Client-side configuration problem.
    #[error("generative backend configuration: {0}")]
    Config(#[from] ConfigError),

    /// The request did not complete within the configured timeout.
    #[error("generative backend timed out after {timeout_secs}s")]
    Timeout {
        /// The timeout that was exceeded, in seconds.
        timeout_secs: u64,
    },

    /// Transport-level failure (connection refused, TLS, DNS).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        /// The logical endpoint being called.
        endpoint: String,
        /// Underlying transport error.
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("generative backend returned {status} for {endpoint}: {body}")]
    Api {
        /// The logical endpoint being called.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body, as returned by the backend.
        body: String,
    },

    /// The response body did not match the expected schema.
    #[error("failed to decode response from {endpoint}: {source}")]
    Deserialization {
        /// The logical endpoint being called.
        endpoint: String,
        /// Underlying decode error.
        source: reqwest::Error,
    },

    /// The backend answered 200 but produced no usable text.
    #[error("generative backend returned no text candidates")]
    EmptyResponse,
}
