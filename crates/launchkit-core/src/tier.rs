//! Entitlement tier shared across the workspace.
//!
//! The tier is a client-recorded flag, not a security control: it is read
//! from an unauthenticated local store and can be tampered with. Real access
//! control for premium features belongs server-side, behind the remote
//! facade.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Free,
    Edge,
}

impl Tier {
    pub fn is_edge(&self) -> bool {
        matches!(self, Tier::Edge)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Tier::Free => write!(f, "free"),
            Tier::Edge => write!(f, "edge"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_free() {
        assert_eq!(Tier::default(), Tier::Free);
        assert!(!Tier::default().is_edge());
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::Edge).unwrap(), r#""edge""#);
        let parsed: Tier = serde_json::from_str(r#""free""#).unwrap();
        assert_eq!(parsed, Tier::Free);
    }
}
