//! Async orchestration over the slot board.
//!
//! The orchestrator wires the pure slot reducer to the remote facade. Each
//! slot progresses independently: analyzing slot 2 never blocks slot 1, and
//! a resolution only ever touches the slot that issued it, guarded by slot
//! id and epoch rather than call order.
//!
//! Aggregate calls (differentiator suggestions, radar) snapshot the set of
//! analyzed slots at issue time. They are not debounced or sequenced: two
//! in-flight aggregates may race and the last response to resolve wins.
//! This is accepted behavior, not a guaranteed latest-result semantic.
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use launchkit_core::{fields, FormData};
use launchkit_remote::{
    BusinessProfile, CompetitorSummary, DifferentiationStrategy, LaunchFacade, RadarData,
};
use launchkit_tier::{features, GateDecision, TierGate};

use crate::board::{BoardError, SlotBoard};
use crate::slot::SlotEvent;

/// What happened when the user asked to analyze a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeOutcome {
    /// Free tier: surface the upgrade prompt; slot untouched, no call made.
    UpgradeRequired,
    /// Blank URL: silent no-op per the validation-skip policy.
    SkippedBlankUrl,
    /// The slot is already in flight.
    AlreadyAnalyzing,
    UnknownSlot,
    /// The call resolved and the slot holds data.
    Analyzed,
    /// The call resolved with a failure message stored on the slot.
    Errored,
    /// The slot was reset or removed while the call was in flight; the
    /// resolution was discarded.
    Superseded,
}

#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("GATE/UPGRADE: {feature} requires the edge tier")]
    UpgradeRequired { feature: String },

    #[error("SLOT/NONE_ANALYZED: analyze at least one competitor first")]
    NoAnalyzedCompetitors,

    #[error("SLOT/NOT_ANALYZED: slot {0} has no analysis data")]
    SlotNotAnalyzed(u32),

    #[error("REMOTE/{0}")]
    Remote(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

struct WorkState {
    board: SlotBoard,
    business: BusinessProfile,
    differentiation: String,
    suggestions: Option<Vec<String>>,
    radar: Option<RadarData>,
    strategy: Option<DifferentiationStrategy>,
}

/// Competitive workflow orchestrator for one wizard session.
///
/// Cheap to clone; clones are handles onto the same session state.
#[derive(Clone)]
pub struct Orchestrator {
    state: Arc<Mutex<WorkState>>,
    facade: Arc<dyn LaunchFacade>,
    gate: TierGate,
    session_id: Uuid,
}

impl Orchestrator {
    pub fn new(facade: Arc<dyn LaunchFacade>, gate: TierGate) -> Self {
        Self {
            state: Arc::new(Mutex::new(WorkState {
                board: SlotBoard::new(),
                business: BusinessProfile::default(),
                differentiation: String::new(),
                suggestions: None,
                radar: None,
                strategy: None,
            })),
            facade,
            gate,
            session_id: Uuid::new_v4(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Describe the user's own product for the aggregate calls.
    pub async fn set_business(&self, business: BusinessProfile) {
        self.state.lock().await.business = business;
    }

    /// Free-text differentiation input from the user.
    pub async fn set_differentiation(&self, text: impl Into<String>) {
        self.state.lock().await.differentiation = text.into();
    }

    pub async fn add_slot(&self) -> Result<u32, BoardError> {
        self.state.lock().await.board.add_slot()
    }

    pub async fn remove_slot(&self, id: u32) -> Result<(), BoardError> {
        self.state.lock().await.board.remove_slot(id)
    }

    pub async fn set_url(&self, id: u32, url: impl Into<String>) -> Result<(), BoardError> {
        self.state.lock().await.board.set_url(id, url)
    }

    pub async fn reset_slot(&self, id: u32) -> Result<(), BoardError> {
        self.state.lock().await.board.reset_slot(id)
    }

    /// Current board state, cloned for rendering.
    pub async fn board(&self) -> SlotBoard {
        self.state.lock().await.board.clone()
    }

    pub async fn suggestions(&self) -> Option<Vec<String>> {
        self.state.lock().await.suggestions.clone()
    }

    pub async fn current_radar(&self) -> Option<RadarData> {
        self.state.lock().await.radar.clone()
    }

    /// Analyze one slot.
    ///
    /// Guards, in order: tier must be edge (otherwise the upgrade prompt is
    /// the only effect), the URL must be non-blank, and the slot must not
    /// already be in flight. On success the slot stores the result and a
    /// fire-and-forget suggestions refresh is kicked off; its failure is
    /// swallowed. On failure the slot stores the message; the user can
    /// simply trigger analyze again.
    pub async fn analyze(&self, slot_id: u32) -> AnalyzeOutcome {
        if !self.gate.decide(features::COMPETITIVE_ANALYSIS).is_granted() {
            return AnalyzeOutcome::UpgradeRequired;
        }

        let (url, epoch) = {
            let mut st = self.state.lock().await;
            let Some(slot) = st.board.slot_mut(slot_id) else {
                return AnalyzeOutcome::UnknownSlot;
            };
            if slot.is_analyzing() {
                return AnalyzeOutcome::AlreadyAnalyzing;
            }
            let url = slot.url().trim().to_string();
            if url.is_empty() {
                return AnalyzeOutcome::SkippedBlankUrl;
            }
            slot.apply(SlotEvent::AnalyzeRequested);
            (url, slot.epoch())
        };

        info!(session = %self.session_id, slot = slot_id, url = %url, "analyzing competitor");
        let result = self.facade.analyze_competitor(&url).await;

        let mut st = self.state.lock().await;
        let Some(slot) = st.board.slot_mut(slot_id) else {
            return AnalyzeOutcome::Superseded;
        };
        if slot.epoch() != epoch {
            return AnalyzeOutcome::Superseded;
        }

        match result {
            Ok(data) => {
                slot.apply(SlotEvent::AnalyzeSucceeded(data));
                drop(st);
                self.spawn_suggestions_refresh();
                AnalyzeOutcome::Analyzed
            }
            Err(e) => {
                slot.apply(SlotEvent::AnalyzeFailed(e.message()));
                AnalyzeOutcome::Errored
            }
        }
    }

    /// Kick a suggestions refresh without awaiting it. Runs whenever a slot
    /// becomes analyzed, including the first.
    fn spawn_suggestions_refresh(&self) {
        let state = self.state.clone();
        let facade = self.facade.clone();
        let session = self.session_id;
        tokio::spawn(async move {
            if let Err(e) = refresh_suggestions(&state, facade.as_ref()).await {
                warn!(session = %session, error = %e, "suggestions refresh failed, keeping previous");
            }
        });
    }

    /// Refresh differentiator suggestions over all currently analyzed slots.
    ///
    /// Exposed so callers (and tests) can refresh deterministically; the
    /// post-analyze refresh uses the same path via a spawned task.
    pub async fn refresh_suggestions(&self) -> Result<Vec<String>, OrchestratorError> {
        refresh_suggestions(&self.state, self.facade.as_ref()).await
    }

    /// Multi-competitor radar over all currently analyzed slots.
    ///
    /// Premium feature; requires at least one analyzed slot. The snapshot is
    /// taken at call time; a slot analyzed afterwards needs a fresh call.
    pub async fn radar(&self) -> Result<RadarData, OrchestratorError> {
        if let GateDecision::UpgradeRequired { feature } = self.gate.decide(features::RADAR_CHART) {
            return Err(OrchestratorError::UpgradeRequired { feature });
        }

        let (business, competitors, differentiation) = {
            let st = self.state.lock().await;
            let competitors = snapshot_analyzed(&st.board);
            if competitors.is_empty() {
                return Err(OrchestratorError::NoAnalyzedCompetitors);
            }
            (st.business.clone(), competitors, st.differentiation.clone())
        };

        let radar = self
            .facade
            .competitor_radar(&business, &competitors, &differentiation)
            .await
            .map_err(|e| OrchestratorError::Remote(e.message()))?;

        // Last write wins by design; see the module docs.
        self.state.lock().await.radar = Some(radar.clone());
        Ok(radar)
    }

    /// Differentiation strategy against one analyzed competitor.
    pub async fn differentiation_strategy(
        &self,
        slot_id: u32,
    ) -> Result<DifferentiationStrategy, OrchestratorError> {
        if let GateDecision::UpgradeRequired { feature } =
            self.gate.decide(features::COMPETITIVE_ANALYSIS)
        {
            return Err(OrchestratorError::UpgradeRequired { feature });
        }

        let (business, competitor, differentiation) = {
            let st = self.state.lock().await;
            let slot = st
                .board
                .slot(slot_id)
                .ok_or(BoardError::Unknown(slot_id))?;
            let data = slot
                .data()
                .ok_or(OrchestratorError::SlotNotAnalyzed(slot_id))?
                .clone();
            (st.business.clone(), data, st.differentiation.clone())
        };

        let strategy = self
            .facade
            .differentiation_strategy(&business, &competitor, &differentiation)
            .await
            .map_err(|e| OrchestratorError::Remote(e.message()))?;

        self.state.lock().await.strategy = Some(strategy.clone());
        Ok(strategy)
    }
}

/// Describe the user's own product from the wizard form, for the aggregate
/// calls. Missing fields come through empty; the backend copes.
pub fn business_from_form(form: &FormData) -> BusinessProfile {
    BusinessProfile {
        name: form
            .trimmed(fields::COMPANY_NAME)
            .unwrap_or_default()
            .to_string(),
        description: form
            .trimmed(fields::PRODUCT_DESCRIPTION)
            .unwrap_or_default()
            .to_string(),
    }
}

/// Snapshot all analyzed slots as radar/suggestion summaries.
fn snapshot_analyzed(board: &SlotBoard) -> Vec<CompetitorSummary> {
    board
        .slots()
        .iter()
        .filter_map(|slot| {
            slot.data()
                .map(|data| CompetitorSummary::from_analysis(slot.url(), data))
        })
        .collect()
}

async fn refresh_suggestions(
    state: &Arc<Mutex<WorkState>>,
    facade: &dyn LaunchFacade,
) -> Result<Vec<String>, OrchestratorError> {
    let (business, competitors, differentiation) = {
        let st = state.lock().await;
        let competitors = snapshot_analyzed(&st.board);
        if competitors.is_empty() {
            return Err(OrchestratorError::NoAnalyzedCompetitors);
        }
        (st.business.clone(), competitors, st.differentiation.clone())
    };

    let suggestions = facade
        .differentiator_suggestions(&business, &competitors, &differentiation)
        .await
        .map_err(|e| OrchestratorError::Remote(e.message()))?;

    // Last write wins by design; see the module docs.
    state.lock().await.suggestions = Some(suggestions.clone());
    Ok(suggestions)
}
