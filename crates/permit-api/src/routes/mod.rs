//! # API Route Modules
//!
//! Route modules for the permit stack API surface:
//!
//! - `requirements` — rule catalog listing and profile matching. Pure
//!   computation over state assembled at startup; a valid body cannot fail.
//! - `report` — compliance report generation. Prefers the generative
//!   backend, guarantees the deterministic fallback, and surfaces which
//!   path produced the text via the `provenance` field.

pub mod report;
pub mod requirements;
