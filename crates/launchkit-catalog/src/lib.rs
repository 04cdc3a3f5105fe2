//! Launchkit Catalog: static knowledge tables
//!
//! Two lookup tables feed the document template engine: third-party-service
//! privacy blurbs and jurisdiction rights prose. Both are compiled in; there
//! is no runtime loading.

pub mod jurisdictions;
pub mod services;

pub use jurisdictions::{resolve_rights, RightsBlock, RightsResolution};
pub use services::{known_services, lookup, ServiceProfile};
