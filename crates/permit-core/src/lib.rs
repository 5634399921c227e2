#![deny(missing_docs)]

//! # permit-core — Foundational Types for the Permit Stack
//!
//! This crate defines the data model every other crate in the workspace
//! depends on. It has no internal crate dependencies — only `serde`,
//! `serde_json`, `thiserror`, and `utoipa` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **One definition per wire type.** [`BusinessProfile`] and [`Rule`] are
//!    the types that cross the HTTP boundary, live in the catalog artifact,
//!    and feed the matching engine. No parallel DTO hierarchies that can
//!    silently diverge.
//!
//! 2. **Validated construction for the catalog.** A [`RuleCatalog`] can only
//!    be built through constructors that reject duplicate and empty rule
//!    identifiers. Once constructed it is immutable; matching against it
//!    cannot fail.
//!
//! 3. **Absent means default.** Profile fields a caller omits deserialize to
//!    zero or `false`; rule conditions a catalog entry omits are
//!    unconstrained. Partial input is well-formed input, never an error.
//!
//! 4. **[`CatalogError`] hierarchy.** Structured errors with `thiserror` —
//!    no `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod catalog;
pub mod error;
pub mod profile;
pub mod rule;

// Re-export primary types at crate root for ergonomic imports.
pub use catalog::RuleCatalog;
pub use error::CatalogError;
pub use profile::BusinessProfile;
pub use rule::{AppliesWhen, NumericBound, Priority, Rule};
