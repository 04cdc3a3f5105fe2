//! Slot board: holds 1..=3 competitor slots and enforces their invariants.
use serde::Serialize;
use thiserror::Error;

use crate::slot::{CompetitorSlot, SlotEvent};

pub const MAX_SLOTS: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("SLOT/CAPACITY: board already has {MAX_SLOTS} slots")]
    AtCapacity,

    #[error("SLOT/LAST: the last remaining slot cannot be removed")]
    LastSlot,

    #[error("SLOT/BUSY: slot {0} is being analyzed")]
    Busy(u32),

    #[error("SLOT/UNKNOWN: no slot with id {0}")]
    Unknown(u32),
}

/// The board always holds at least one slot; ids are 1-based and never
/// reused within a session, even after removal.
#[derive(Debug, Clone, Serialize)]
pub struct SlotBoard {
    slots: Vec<CompetitorSlot>,
    next_id: u32,
}

impl SlotBoard {
    pub fn new() -> Self {
        let mut board = Self {
            slots: Vec::new(),
            next_id: 1,
        };
        board
            .add_slot()
            .expect("fresh board accepts its first slot");
        board
    }

    pub fn add_slot(&mut self) -> Result<u32, BoardError> {
        if self.slots.len() >= MAX_SLOTS {
            return Err(BoardError::AtCapacity);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.slots.push(CompetitorSlot::new(id));
        Ok(id)
    }

    /// Removal policy: never below one slot, and a slot being analyzed must
    /// reach a terminal state first.
    pub fn remove_slot(&mut self, id: u32) -> Result<(), BoardError> {
        let slot = self.slot(id).ok_or(BoardError::Unknown(id))?;
        if slot.is_analyzing() {
            return Err(BoardError::Busy(id));
        }
        if self.slots.len() <= 1 {
            return Err(BoardError::LastSlot);
        }
        self.slots.retain(|s| s.id() != id);
        Ok(())
    }

    pub fn slot(&self, id: u32) -> Option<&CompetitorSlot> {
        self.slots.iter().find(|s| s.id() == id)
    }

    pub fn slot_mut(&mut self, id: u32) -> Option<&mut CompetitorSlot> {
        self.slots.iter_mut().find(|s| s.id() == id)
    }

    pub fn set_url(&mut self, id: u32, url: impl Into<String>) -> Result<(), BoardError> {
        let slot = self.slot_mut(id).ok_or(BoardError::Unknown(id))?;
        slot.set_url(url);
        Ok(())
    }

    pub fn reset_slot(&mut self, id: u32) -> Result<(), BoardError> {
        let slot = self.slot_mut(id).ok_or(BoardError::Unknown(id))?;
        slot.apply(SlotEvent::Reset);
        Ok(())
    }

    pub fn slots(&self) -> &[CompetitorSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots that have analysis data; only these count as analyzed.
    pub fn analyzed(&self) -> Vec<&CompetitorSlot> {
        self.slots.iter().filter(|s| s.data().is_some()).collect()
    }

    pub fn analyzed_count(&self) -> usize {
        self.analyzed().len()
    }
}

impl Default for SlotBoard {
    fn default() -> Self {
        Self::new()
    }
}
