//! Launchkit Docs: the document template engine
//!
//! Renders the four launch documents (privacy, terms, about, support) from
//! form data. Rendering never fails for missing or malformed form input:
//! every gap degrades to an italicized placeholder, so the preview always
//! has something to show, even for an empty form. The only typed errors are
//! programmer errors: a broken template pack.
//!
//! # Example
//!
//! ```ignore
//! use launchkit_core::{fields, DocumentType, FormData};
//! use launchkit_docs::{DeriveOptions, DocumentEngine};
//!
//! let engine = DocumentEngine::new().unwrap();
//! let form = FormData::new().with(fields::COMPANY_NAME, "Acme");
//!
//! let doc = engine
//!     .render(DocumentType::Privacy, &form, &DeriveOptions::default())
//!     .unwrap();
//! println!("{}", doc.markdown);
//! ```

pub mod context;
pub mod renderer;
pub mod templates;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use launchkit_core::{completion, CompletionReport, DocumentType, FormData, Tier};

use renderer::DocRenderer;
use templates::TemplatePack;

/// Inputs derived outside the form: the AI-refined introduction, the render
/// date, and the premium-branch material.
#[derive(Debug, Clone, Default)]
pub struct DeriveOptions {
    /// AI-refined introduction; blank or absent falls back to a
    /// deterministic sentence built from the form.
    pub intro_override: Option<String>,
    /// Injected render date. `None` stamps today's date, which makes
    /// repeated renders differ in the footer across days. A documented
    /// non-idempotence, not a bug. Tests inject a fixed date.
    pub render_date: Option<NaiveDate>,
    /// Entitlement tier, decided by the caller per render pass (never cached
    /// here), gating the competitive-intelligence branch.
    pub tier: Tier,
    /// Differentiator copy produced by the competitive workflow.
    pub differentiators: Vec<String>,
}

/// One rendered document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub doc_type: DocumentType,
    pub markdown: String,
    /// Content hash of the Markdown, `blake3:<hex>`.
    pub fingerprint: String,
    pub completion: CompletionReport,
}

#[derive(Debug, Error)]
pub enum DocError {
    #[error("TEMPLATE/{0}")]
    Template(String),

    #[error("RENDER/{0}")]
    Render(String),
}

/// Compiled document engine. Construct once, render per keystroke.
pub struct DocumentEngine {
    renderer: DocRenderer<'static>,
}

impl DocumentEngine {
    /// Engine over the compiled-in template pack.
    pub fn new() -> Result<Self, DocError> {
        let pack = TemplatePack::embedded().map_err(DocError::Template)?;
        Self::with_pack(&pack)
    }

    /// Engine over a caller-supplied pack (white-labelling).
    pub fn with_pack(pack: &TemplatePack) -> Result<Self, DocError> {
        let renderer = DocRenderer::new(pack).map_err(DocError::Template)?;
        Ok(DocumentEngine { renderer })
    }

    /// Render one document type from the current form state.
    pub fn render(
        &self,
        doc: DocumentType,
        form: &FormData,
        opts: &DeriveOptions,
    ) -> Result<RenderedDocument, DocError> {
        let render_date = opts.render_date.unwrap_or_else(|| Utc::now().date_naive());
        let ctx = context::build(form, opts, render_date);

        let markdown = self
            .renderer
            .render(doc.as_str(), &ctx)
            .map_err(DocError::Render)?;

        Ok(RenderedDocument {
            doc_type: doc,
            fingerprint: fingerprint(&markdown),
            completion: completion(form, doc),
            markdown,
        })
    }

    /// Render all four documents.
    pub fn render_all(
        &self,
        form: &FormData,
        opts: &DeriveOptions,
    ) -> Result<Vec<RenderedDocument>, DocError> {
        DocumentType::ALL
            .into_iter()
            .map(|doc| self.render(doc, form, opts))
            .collect()
    }
}

/// Content hash for dedup and export verification.
pub fn fingerprint(markdown: &str) -> String {
    format!("blake3:{}", blake3::hash(markdown.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_prefixed() {
        let a = fingerprint("# Privacy Policy");
        let b = fingerprint("# Privacy Policy");
        assert_eq!(a, b);
        assert!(a.starts_with("blake3:"));
        assert_ne!(a, fingerprint("# Terms"));
    }
}
