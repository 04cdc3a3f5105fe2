//! Scripted in-memory facade for tests.
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::facade::{FacadeError, LaunchFacade};
use crate::types::{
    AnalysisResult, BusinessProfile, CheckoutSession, CompetitorSummary, DifferentiationStrategy,
    ExportDocument, RadarData, Refinement, RefinementKind,
};

/// Facade double: queue responses per call, count invocations.
///
/// An empty queue yields a default success payload, so tests only script
/// what they assert on. Call counters make "no network call happened"
/// assertions possible.
#[derive(Default)]
pub struct FakeFacade {
    analyses: Mutex<VecDeque<Result<AnalysisResult, FacadeError>>>,
    strategies: Mutex<VecDeque<Result<DifferentiationStrategy, FacadeError>>>,
    radars: Mutex<VecDeque<Result<RadarData, FacadeError>>>,
    suggestions: Mutex<VecDeque<Result<Vec<String>, FacadeError>>>,
    refinements: Mutex<VecDeque<Result<Refinement, FacadeError>>>,
    analysis_barrier: Mutex<Option<Arc<Notify>>>,
    /// Watermark flag of the most recent export call, for gating assertions.
    pub last_export_watermark: Mutex<Option<bool>>,

    pub analyze_calls: AtomicU64,
    pub strategy_calls: AtomicU64,
    pub radar_calls: AtomicU64,
    pub suggestion_calls: AtomicU64,
    pub refine_calls: AtomicU64,
    pub checkout_calls: AtomicU64,
    pub export_calls: AtomicU64,
}

impl FakeFacade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_analysis(&self, result: Result<AnalysisResult, FacadeError>) {
        self.analyses.lock().expect("fake lock").push_back(result);
    }

    pub fn push_strategy(&self, result: Result<DifferentiationStrategy, FacadeError>) {
        self.strategies.lock().expect("fake lock").push_back(result);
    }

    pub fn push_radar(&self, result: Result<RadarData, FacadeError>) {
        self.radars.lock().expect("fake lock").push_back(result);
    }

    pub fn push_suggestions(&self, result: Result<Vec<String>, FacadeError>) {
        self.suggestions.lock().expect("fake lock").push_back(result);
    }

    pub fn push_refinement(&self, result: Result<Refinement, FacadeError>) {
        self.refinements.lock().expect("fake lock").push_back(result);
    }

    /// Hold every analyze call until the returned handle is notified, so
    /// tests can interleave user actions with an in-flight resolution.
    pub fn hold_analyses(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.analysis_barrier.lock().expect("fake lock") = Some(notify.clone());
        notify
    }

    fn pop<T: Default>(queue: &Mutex<VecDeque<Result<T, FacadeError>>>) -> Result<T, FacadeError> {
        queue
            .lock()
            .expect("fake lock")
            .pop_front()
            .unwrap_or_else(|| Ok(T::default()))
    }
}

#[async_trait]
impl LaunchFacade for FakeFacade {
    async fn analyze_competitor(&self, _url: &str) -> Result<AnalysisResult, FacadeError> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        let barrier = self.analysis_barrier.lock().expect("fake lock").clone();
        if let Some(barrier) = barrier {
            barrier.notified().await;
        }
        Self::pop(&self.analyses)
    }

    async fn differentiation_strategy(
        &self,
        _user_product: &BusinessProfile,
        _competitor: &AnalysisResult,
        _differentiation: &str,
    ) -> Result<DifferentiationStrategy, FacadeError> {
        self.strategy_calls.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.strategies)
    }

    async fn competitor_radar(
        &self,
        _user_business: &BusinessProfile,
        _competitors: &[CompetitorSummary],
        _user_differentiators: &str,
    ) -> Result<RadarData, FacadeError> {
        self.radar_calls.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.radars)
    }

    async fn differentiator_suggestions(
        &self,
        _user_business: &BusinessProfile,
        _competitors: &[CompetitorSummary],
        _existing_differentiators: &str,
    ) -> Result<Vec<String>, FacadeError> {
        self.suggestion_calls.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.suggestions)
    }

    async fn refine_text(
        &self,
        _field_name: &str,
        current_value: &str,
        _context: &str,
        _kind: RefinementKind,
    ) -> Result<Refinement, FacadeError> {
        self.refine_calls.fetch_add(1, Ordering::SeqCst);
        let mut queue = self.refinements.lock().expect("fake lock");
        queue.pop_front().unwrap_or_else(|| {
            Ok(Refinement {
                refined: format!("{current_value} (refined)"),
                rationale: None,
                alternatives: Vec::new(),
            })
        })
    }

    async fn create_checkout(
        &self,
        return_url: &str,
        _business_name: &str,
        _email: &str,
    ) -> Result<CheckoutSession, FacadeError> {
        self.checkout_calls.fetch_add(1, Ordering::SeqCst);
        Ok(CheckoutSession {
            checkout_url: format!("{return_url}#fake-checkout"),
        })
    }

    async fn export_documents(
        &self,
        documents: &[ExportDocument],
        _product_name: &str,
        with_watermark: bool,
    ) -> Result<Vec<u8>, FacadeError> {
        self.export_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_export_watermark.lock().expect("fake lock") = Some(with_watermark);
        let joined: String = documents
            .iter()
            .map(|d| d.markdown.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Ok(joined.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_responses_come_back_in_order() {
        let facade = FakeFacade::new();
        facade.push_analysis(Ok(AnalysisResult {
            product_name: Some("Acme".to_string()),
            ..Default::default()
        }));
        facade.push_analysis(Err(FacadeError::Rejected("timeout".to_string())));

        let first = facade.analyze_competitor("https://acme.com").await.unwrap();
        assert_eq!(first.product_name.as_deref(), Some("Acme"));

        let second = facade.analyze_competitor("https://acme.com").await;
        assert_eq!(second.unwrap_err().message(), "timeout");

        assert_eq!(facade.analyze_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn empty_queue_yields_defaults() {
        let facade = FakeFacade::new();
        let result = facade.analyze_competitor("https://acme.com").await.unwrap();
        assert_eq!(result, AnalysisResult::default());
    }

    #[tokio::test]
    async fn refine_echoes_when_unscripted() {
        let facade = FakeFacade::new();
        let refinement = facade
            .refine_text("product_description", "robots", "", RefinementKind::Clarify)
            .await
            .unwrap();
        assert_eq!(refinement.refined, "robots (refined)");
    }
}
