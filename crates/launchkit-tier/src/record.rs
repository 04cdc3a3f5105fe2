//! Persisted tier record.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use launchkit_core::Tier;

use crate::store::KvStore;

/// Store key for the entitlement record.
pub const TIER_KEY: &str = "launchkit.tier";

/// The client-persisted entitlement record.
///
/// `expires_at` is stored but not enforced: `current_tier` never silently
/// downgrades an expired record. Callers that want expiry behavior check
/// `is_expired` and act deliberately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierRecord {
    pub tier: Tier,
    pub purchased_at: DateTime<Utc>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub transaction_id: String,
}

impl TierRecord {
    /// Load the record, if present and parseable. Corruption reads as
    /// absence; the caller falls back to Free, never errors.
    pub fn load(store: &dyn KvStore) -> Option<Self> {
        let raw = store.get(TIER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn save(&self, store: &dyn KvStore) {
        if let Ok(json) = serde_json::to_string(self) {
            store.set(TIER_KEY, &json);
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(at) if at <= now)
    }
}

/// Current tier: a fresh read on every call, Free on absence or corruption.
///
/// Never cached, so an upgrade completed elsewhere in the session is picked
/// up on the next read without a restart.
pub fn current_tier(store: &dyn KvStore) -> Tier {
    TierRecord::load(store).map(|r| r.tier).unwrap_or_default()
}

/// Record a completed checkout. The only production write path for the
/// record.
pub fn complete_checkout(
    store: &dyn KvStore,
    transaction_id: impl Into<String>,
    purchased_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
) -> TierRecord {
    let record = TierRecord {
        tier: Tier::Edge,
        purchased_at,
        expires_at,
        transaction_id: transaction_id.into(),
    };
    record.save(store);
    record
}

/// Debug-only override used by the development panel. Writes a record with a
/// marker transaction id so it is distinguishable from a real purchase.
pub fn debug_override(store: &dyn KvStore, tier: Tier, now: DateTime<Utc>) {
    match tier {
        Tier::Free => store.remove(TIER_KEY),
        Tier::Edge => {
            TierRecord {
                tier,
                purchased_at: now,
                expires_at: None,
                transaction_id: "debug-override".to_string(),
            }
            .save(store);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn absent_record_reads_as_free() {
        let store = MemoryStore::new();
        assert_eq!(current_tier(&store), Tier::Free);
    }

    #[test]
    fn corrupted_record_reads_as_free() {
        let store = MemoryStore::new();
        store.set(TIER_KEY, "{not json");
        assert_eq!(current_tier(&store), Tier::Free);

        store.set(TIER_KEY, r#"{"tier":"platinum"}"#);
        assert_eq!(current_tier(&store), Tier::Free);
    }

    #[test]
    fn checkout_round_trips_through_the_store() {
        let store = MemoryStore::new();
        let record = complete_checkout(&store, "txn_123", now(), None);

        assert_eq!(current_tier(&store), Tier::Edge);
        assert_eq!(TierRecord::load(&store), Some(record));
    }

    #[test]
    fn expiry_is_surfaced_but_not_enforced() {
        let store = MemoryStore::new();
        let expires = now() - chrono::Duration::days(1);
        let record = complete_checkout(&store, "txn_123", now() - chrono::Duration::days(30), Some(expires));

        assert!(record.is_expired(now()));
        // Deliberately still Edge: expiry is the caller's policy decision.
        assert_eq!(current_tier(&store), Tier::Edge);
    }

    #[test]
    fn debug_override_writes_and_clears() {
        let store = MemoryStore::new();
        debug_override(&store, Tier::Edge, now());
        assert_eq!(current_tier(&store), Tier::Edge);
        assert_eq!(
            TierRecord::load(&store).unwrap().transaction_id,
            "debug-override"
        );

        debug_override(&store, Tier::Free, now());
        assert_eq!(current_tier(&store), Tier::Free);
    }
}
