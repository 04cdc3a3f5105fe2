//! Gate decisions for premium features.
use serde::Serialize;
use std::sync::Arc;

use launchkit_core::Tier;

use crate::record::current_tier;
use crate::store::KvStore;

/// Premium feature identifiers, used in gate decisions and upgrade prompts.
pub mod features {
    pub const COMPETITIVE_ANALYSIS: &str = "competitive-analysis";
    pub const RADAR_CHART: &str = "radar-chart";
    pub const CLEAN_EXPORT: &str = "clean-export";
}

/// Outcome of asking the gate about a premium feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GateDecision {
    Granted,
    /// The caller should surface an upgrade prompt; nothing else changes.
    UpgradeRequired { feature: String },
}

impl GateDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, GateDecision::Granted)
    }
}

/// Tier gate over an injected store.
///
/// Every decision re-reads the record, so an upgrade completed during the
/// session takes effect on the next call. This is a UX gate, not a security
/// control: the record lives in unauthenticated client storage.
#[derive(Clone)]
pub struct TierGate {
    store: Arc<dyn KvStore>,
}

impl TierGate {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub fn current(&self) -> Tier {
        current_tier(self.store.as_ref())
    }

    pub fn is_edge(&self) -> bool {
        self.current().is_edge()
    }

    pub fn decide(&self, feature: &str) -> GateDecision {
        if self.is_edge() {
            GateDecision::Granted
        } else {
            GateDecision::UpgradeRequired {
                feature: feature.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::debug_override;
    use crate::store::MemoryStore;
    use chrono::Utc;

    #[test]
    fn free_tier_requires_upgrade() {
        let gate = TierGate::new(Arc::new(MemoryStore::new()));
        assert!(!gate.is_edge());
        assert_eq!(
            gate.decide(features::RADAR_CHART),
            GateDecision::UpgradeRequired {
                feature: features::RADAR_CHART.to_string()
            }
        );
    }

    #[test]
    fn upgrade_mid_session_is_picked_up_without_a_new_gate() {
        let store = Arc::new(MemoryStore::new());
        let gate = TierGate::new(store.clone());

        assert!(!gate.decide(features::COMPETITIVE_ANALYSIS).is_granted());

        debug_override(store.as_ref(), Tier::Edge, Utc::now());
        assert!(gate.decide(features::COMPETITIVE_ANALYSIS).is_granted());
    }
}
