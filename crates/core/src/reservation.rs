//! # Reservation State Machine
//!
//! A slot is `Available` until reserved, and `Reserved` is terminal. The
//! transition here is pure; each [`crate::store::AvailabilityStore`] backend
//! runs it inside its own atomic unit of work (row lock, mutex) so the
//! read-check-write is never interleaved for the same key.

use serde::{Deserialize, Serialize};

use crate::models::slot::Slot;
use crate::store::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotState {
    Available,
    Reserved,
}

impl SlotState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SlotState::Reserved)
    }
}

impl From<bool> for SlotState {
    fn from(reserved: bool) -> Self {
        if reserved {
            SlotState::Reserved
        } else {
            SlotState::Available
        }
    }
}

impl Slot {
    pub fn state(&self) -> SlotState {
        SlotState::from(self.reserved)
    }
}

/// Applies `Available --reserve()--> Reserved` to a slot the caller holds
/// exclusively.
///
/// # Errors
///
/// * `StoreError::AlreadyReserved` - the slot is already in the terminal state;
///   the slot is left untouched
pub fn reserve(slot: &mut Slot) -> Result<(), StoreError> {
    match slot.state() {
        SlotState::Available => {
            slot.reserved = true;
            Ok(())
        }
        SlotState::Reserved => Err(StoreError::AlreadyReserved),
    }
}
