#![deny(missing_docs)]

//! # permit-engine — Matching and Report Synthesis
//!
//! The decision core of the permit stack. Given a [`BusinessProfile`] and a
//! [`RuleCatalog`] it selects the applicable requirements and produces a
//! readable compliance report.
//!
//! ## Pipeline
//!
//! ```text
//! profile ──► matcher ──► matched rules ──► synthesizer ──► Report
//!                                             │
//!                                             ├─ generative backend (bounded attempt)
//!                                             └─ template renderer (always available)
//! ```
//!
//! Two guarantees shape the API:
//!
//! 1. **Matching is total.** [`match_requirements`] is a pure function of
//!    its inputs. It cannot fail, touch a clock, or perform I/O.
//! 2. **Report synthesis always succeeds.** [`ReportSynthesizer::synthesize`]
//!    returns a [`Report`], not a `Result`. Any backend trouble is logged
//!    and answered with the deterministic fallback text.
//!
//! [`BusinessProfile`]: permit_core::BusinessProfile
//! [`RuleCatalog`]: permit_core::RuleCatalog

pub mod matcher;
pub mod prompt;
pub mod render;
pub mod synthesize;

pub use matcher::match_requirements;
pub use prompt::build_prompt;
pub use render::{render_fallback, DISCLAIMER};
pub use synthesize::{Report, ReportProvenance, ReportSynthesizer};
