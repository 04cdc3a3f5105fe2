//! Launchkit Compete: the competitive workflow
//!
//! Manages 1–3 competitor slots, each independently moving through
//! empty → analyzing → analyzed | errored, plus the aggregate calls that
//! depend on the union of analyzed slots (differentiator suggestions, the
//! multi-competitor radar). Slot transitions are a pure reducer; the
//! orchestrator layers the tier gate and the remote facade on top.

pub mod board;
pub mod orchestrator;
pub mod slot;

pub use board::{BoardError, SlotBoard, MAX_SLOTS};
pub use orchestrator::{business_from_form, AnalyzeOutcome, Orchestrator, OrchestratorError};
pub use slot::{CompetitorSlot, SlotEvent, SlotPhase};
