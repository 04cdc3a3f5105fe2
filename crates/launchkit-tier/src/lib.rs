//! Launchkit Tier: entitlements, consent, and the client store
//!
//! Reads and writes the wizard's client-persisted records through an
//! injected [`KvStore`] capability: the tier record, cookie consent, and the
//! session banner flag.
//!
//! # Trust boundary
//!
//! Tier gating here is a UX affordance enforced purely client-side against
//! unauthenticated local storage. Nothing prevents a user from writing the
//! record themselves; it must never be presented as a security control. Real
//! access control for premium features belongs server-side, behind the
//! remote facade.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use launchkit_tier::{features, MemoryStore, TierGate};
//!
//! let gate = TierGate::new(Arc::new(MemoryStore::new()));
//! match gate.decide(features::RADAR_CHART) {
//!     launchkit_tier::GateDecision::Granted => { /* run it */ }
//!     launchkit_tier::GateDecision::UpgradeRequired { feature } => {
//!         println!("{feature} needs the edge tier");
//!     }
//! }
//! ```

pub mod consent;
pub mod gate;
pub mod record;
pub mod store;

pub use consent::{banner_dismissed, dismiss_banner, CookieConsent};
pub use gate::{features, GateDecision, TierGate};
pub use record::{complete_checkout, current_tier, debug_override, TierRecord, TIER_KEY};
pub use store::{KvStore, MemoryStore};

// The tier enum itself lives in core so the template engine can branch on it
// without depending on storage.
pub use launchkit_core::Tier;
