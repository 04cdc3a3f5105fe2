//! The four generated document types.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Privacy,
    Terms,
    About,
    Support,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Privacy,
        DocumentType::Terms,
        DocumentType::About,
        DocumentType::Support,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Privacy => "privacy",
            DocumentType::Terms => "terms",
            DocumentType::About => "about",
            DocumentType::Support => "support",
        }
    }

    /// Human-facing document title.
    pub fn title(&self) -> &'static str {
        match self {
            DocumentType::Privacy => "Privacy Policy",
            DocumentType::Terms => "Terms of Service",
            DocumentType::About => "About",
            DocumentType::Support => "Support",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "privacy" => Ok(DocumentType::Privacy),
            "terms" => Ok(DocumentType::Terms),
            "about" => Ok(DocumentType::About),
            "support" => Ok(DocumentType::Support),
            other => Err(KitError::Render(format!("unknown document type: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        for doc in DocumentType::ALL {
            assert_eq!(doc.as_str().parse::<DocumentType>().unwrap(), doc);
        }
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&DocumentType::Privacy).unwrap();
        assert_eq!(json, r#""privacy""#);
    }

    #[test]
    fn unknown_type_is_an_error() {
        assert!("invoice".parse::<DocumentType>().is_err());
    }
}
