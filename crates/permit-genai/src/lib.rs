//! # permit-genai — Typed Rust client for the Gemini text-generation API
//!
//! Provides bounded, typed access to the `generateContent` endpoint of the
//! Google Generative Language API, the backend used to turn matched
//! requirements into a narrative compliance report.
//!
//! ## Architecture
//!
//! This crate is the only path by which the permit stack talks to a
//! generative backend. It knows nothing about profiles, rules, or reports;
//! it accepts a prompt string and returns generated text or a structured
//! [`GenAiError`]. The report pipeline in `permit-engine` decides what to
//! do with a failure (it falls back to the deterministic renderer and never
//! propagates the error).
//!
//! ## Endpoint Convention
//!
//! The full URL pattern is `{base_url}/v1beta/models/{model}:generateContent`
//! with the API key supplied via the `x-goog-api-key` header.

pub mod client;
pub mod config;
pub mod error;

pub use client::GeminiClient;
pub use config::{ConfigError, GenAiConfig};
pub use error::GenAiError;
