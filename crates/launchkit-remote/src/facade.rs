//! The facade trait: the only interface to backend functions.
use async_trait::async_trait;
use thiserror::Error;

use crate::types::{
    AnalysisResult, BusinessProfile, CheckoutSession, CompetitorSummary, DifferentiationStrategy,
    ExportDocument, RadarData, Refinement, RefinementKind,
};

/// Facade call failure. Both transport errors and rejected requests collapse
/// into a short user-facing message; callers surface it on the entity that
/// issued the call and never propagate it globally.
#[derive(Debug, Error)]
pub enum FacadeError {
    #[error("could not reach the service: {0}")]
    Transport(String),

    #[error("{0}")]
    Rejected(String),
}

impl FacadeError {
    /// The message shown on the owning slot, field, or modal.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Remote Service Facade.
///
/// Each method is one request/response pair against the backend; the actual
/// crawling, LLM work, PDF generation and payment handling are external
/// collaborators behind this trait. Tests substitute [`crate::FakeFacade`].
#[async_trait]
pub trait LaunchFacade: Send + Sync {
    /// Crawl and analyze one competitor site.
    async fn analyze_competitor(&self, url: &str) -> Result<AnalysisResult, FacadeError>;

    /// Differentiation strategy against a single competitor.
    async fn differentiation_strategy(
        &self,
        user_product: &BusinessProfile,
        competitor: &AnalysisResult,
        differentiation: &str,
    ) -> Result<DifferentiationStrategy, FacadeError>;

    /// Radar comparison across all analyzed competitors.
    async fn competitor_radar(
        &self,
        user_business: &BusinessProfile,
        competitors: &[CompetitorSummary],
        user_differentiators: &str,
    ) -> Result<RadarData, FacadeError>;

    /// Differentiator suggestions over all analyzed competitors.
    async fn differentiator_suggestions(
        &self,
        user_business: &BusinessProfile,
        competitors: &[CompetitorSummary],
        existing_differentiators: &str,
    ) -> Result<Vec<String>, FacadeError>;

    /// AI refinement of a single free-text field.
    async fn refine_text(
        &self,
        field_name: &str,
        current_value: &str,
        context: &str,
        kind: RefinementKind,
    ) -> Result<Refinement, FacadeError>;

    /// Create a one-time-payment checkout session.
    async fn create_checkout(
        &self,
        return_url: &str,
        business_name: &str,
        email: &str,
    ) -> Result<CheckoutSession, FacadeError>;

    /// Export rendered documents as a binary bundle (PDF or zip).
    async fn export_documents(
        &self,
        documents: &[ExportDocument],
        product_name: &str,
        with_watermark: bool,
    ) -> Result<Vec<u8>, FacadeError>;
}
