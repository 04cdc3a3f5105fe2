//! Competitor slot: a tagged state machine driven by discrete events.
//!
//! Transition logic is a pure reducer, decoupled from the asynchronous call
//! that produces the events, so the lifecycle is testable without any
//! network machinery.
use serde::Serialize;

use launchkit_remote::AnalysisResult;

/// Slot lifecycle state. The payload lives inside the state, so "exactly one
/// of data/error/analyzing is active" holds structurally.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SlotPhase {
    Empty,
    Analyzing,
    Analyzed { data: AnalysisResult },
    Errored { message: String },
}

/// Events the orchestrator feeds into a slot.
#[derive(Debug, Clone)]
pub enum SlotEvent {
    AnalyzeRequested,
    AnalyzeSucceeded(AnalysisResult),
    AnalyzeFailed(String),
    /// User reset: back to Empty, bumping the epoch so in-flight resolutions
    /// for the old state are discarded.
    Reset,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompetitorSlot {
    id: u32,
    url: String,
    epoch: u64,
    phase: SlotPhase,
}

impl CompetitorSlot {
    pub(crate) fn new(id: u32) -> Self {
        Self {
            id,
            url: String::new(),
            epoch: 0,
            phase: SlotPhase::Empty,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Identity guard for in-flight resolutions: a resolution taken at an
    /// older epoch must be discarded.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn phase(&self) -> &SlotPhase {
        &self.phase
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.phase, SlotPhase::Analyzing)
    }

    pub fn data(&self) -> Option<&AnalysisResult> {
        match &self.phase {
            SlotPhase::Analyzed { data } => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SlotPhase::Errored { message } => Some(message),
            _ => None,
        }
    }

    /// Apply an event. Returns whether the transition was legal; illegal
    /// events are no-ops, errors are not sticky.
    pub fn apply(&mut self, event: SlotEvent) -> bool {
        match (&self.phase, event) {
            // An errored slot is re-triggerable by the same user action.
            (SlotPhase::Empty | SlotPhase::Errored { .. }, SlotEvent::AnalyzeRequested) => {
                self.phase = SlotPhase::Analyzing;
                true
            }
            (SlotPhase::Analyzing, SlotEvent::AnalyzeSucceeded(data)) => {
                self.phase = SlotPhase::Analyzed { data };
                true
            }
            (SlotPhase::Analyzing, SlotEvent::AnalyzeFailed(message)) => {
                self.phase = SlotPhase::Errored { message };
                true
            }
            (_, SlotEvent::Reset) => {
                self.phase = SlotPhase::Empty;
                self.epoch += 1;
                true
            }
            _ => false,
        }
    }
}
