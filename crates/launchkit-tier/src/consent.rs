//! Cookie-consent record and the session banner flag.
use serde::{Deserialize, Serialize};

use crate::store::KvStore;

pub const CONSENT_KEY: &str = "launchkit.cookie-consent";
pub const BANNER_KEY: &str = "launchkit.banner-dismissed";

/// Cookie consent choices. Essential cookies cannot be refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieConsent {
    pub essential: bool,
    pub analytics: bool,
    pub marketing: bool,
}

impl Default for CookieConsent {
    fn default() -> Self {
        Self {
            essential: true,
            analytics: false,
            marketing: false,
        }
    }
}

impl CookieConsent {
    /// Load the record; absence or corruption reads as the default
    /// (essential only).
    pub fn load(store: &dyn KvStore) -> Self {
        store
            .get(CONSENT_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Persist the record. Essential is forced on: it is not a choice.
    pub fn save(mut self, store: &dyn KvStore) -> Self {
        self.essential = true;
        if let Ok(json) = serde_json::to_string(&self) {
            store.set(CONSENT_KEY, &json);
        }
        self
    }
}

pub fn banner_dismissed(store: &dyn KvStore) -> bool {
    store.get(BANNER_KEY).as_deref() == Some("true")
}

pub fn dismiss_banner(store: &dyn KvStore) {
    store.set(BANNER_KEY, "true");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn default_consent_is_essential_only() {
        let store = MemoryStore::new();
        let consent = CookieConsent::load(&store);
        assert!(consent.essential);
        assert!(!consent.analytics);
        assert!(!consent.marketing);
    }

    #[test]
    fn essential_cannot_be_refused() {
        let store = MemoryStore::new();
        let saved = CookieConsent {
            essential: false,
            analytics: true,
            marketing: false,
        }
        .save(&store);

        assert!(saved.essential);
        assert!(CookieConsent::load(&store).essential);
        assert!(CookieConsent::load(&store).analytics);
    }

    #[test]
    fn banner_flag_round_trips() {
        let store = MemoryStore::new();
        assert!(!banner_dismissed(&store));
        dismiss_banner(&store);
        assert!(banner_dismissed(&store));
    }
}
