//! Launchkit Core: form model, field registry, completion scoring
//!
//! Shared data model for the launch-kit engine. Everything here is pure and
//! synchronous; rendering, gating and remote calls live in sibling crates.

pub mod completion;
pub mod document;
pub mod error;
pub mod form;
pub mod input;
pub mod registry;
pub mod tier;

pub use completion::{completion, completion_map, CompletionReport};
pub use document::DocumentType;
pub use error::KitError;
pub use form::{fields, FormData};
pub use registry::required_fields;
pub use tier::Tier;

/// Launchkit engine version, stamped into every document footer.
pub const KIT_VERSION: &str = "1.0.0";
