//! Template pack loading.
//!
//! The four document templates ship inside the crate as a YAML pack and are
//! parsed once at engine construction. A caller may substitute its own pack
//! (white-labelling) as long as it defines all four document templates.
use serde::Deserialize;
use std::collections::HashMap;

use launchkit_core::DocumentType;

/// The compiled-in default pack.
const DEFAULT_PACK: &str = include_str!("../templates/documents.yaml");

/// Top-level template pack structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatePack {
    pub version: String,
    pub templates: HashMap<String, DocTemplate>,
}

/// A single document template.
#[derive(Debug, Clone, Deserialize)]
pub struct DocTemplate {
    pub description: String,
    pub template: String,
}

impl TemplatePack {
    /// Parse the compiled-in pack.
    pub fn embedded() -> Result<Self, String> {
        Self::from_yaml(DEFAULT_PACK)
    }

    /// Parse a pack from YAML content.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let pack: TemplatePack =
            serde_yaml::from_str(yaml).map_err(|e| format!("invalid template pack: {e}"))?;
        pack.require_documents()?;
        Ok(pack)
    }

    /// A pack must carry a template for every document type.
    fn require_documents(&self) -> Result<(), String> {
        for doc in DocumentType::ALL {
            if !self.templates.contains_key(doc.as_str()) {
                return Err(format!("template pack is missing '{doc}'"));
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&DocTemplate> {
        self.templates.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_pack_parses_and_is_complete() {
        let pack = TemplatePack::embedded().unwrap();
        assert_eq!(pack.version, "1.0");
        for doc in DocumentType::ALL {
            assert!(pack.get(doc.as_str()).is_some(), "{doc}");
        }
    }

    #[test]
    fn incomplete_pack_is_rejected() {
        let yaml = r##"
version: "1.0"
templates:
  privacy:
    description: only one document
    template: "# Privacy"
"##;
        let err = TemplatePack::from_yaml(yaml).unwrap_err();
        assert!(err.contains("missing"));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        assert!(TemplatePack::from_yaml("not: [valid").is_err());
    }
}
