//! Seat preference selection
//!
//! Staff pick up to 3 ordered sets of preferred seats for a reservation.
//! Toggling is per-slot and idempotent; seats that are not free reject
//! the toggle with a user-facing notice and never touch the selection.
//! No party-size cross-check happens here; the backend owns capacity.

use crate::core::notice::Notice;
use shared::models::Seat;

/// Maximum number of preference sets per reservation
pub const MAX_PREFERENCE_SETS: usize = 3;

/// Result of toggling one seat in the active slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Seat was not free; selection unchanged
    Rejected(Notice),
}

/// Selection state for the seat preference modal
#[derive(Debug, Clone, Default)]
pub struct SeatPreferenceSelection {
    slots: [Vec<String>; MAX_PREFERENCE_SETS],
    active: usize,
}

impl SeatPreferenceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the selection from a reservation's existing preferences
    pub fn from_existing(preferences: &[Vec<String>]) -> Self {
        let mut slots: [Vec<String>; MAX_PREFERENCE_SETS] = Default::default();
        for (slot, existing) in slots.iter_mut().zip(preferences.iter()) {
            *slot = existing.clone();
        }
        Self { slots, active: 0 }
    }

    /// Index of the slot toggles currently apply to
    pub fn active_slot(&self) -> usize {
        self.active
    }

    /// Switch the active slot; out-of-range indices are ignored
    pub fn set_active_slot(&mut self, index: usize) {
        if index < MAX_PREFERENCE_SETS {
            self.active = index;
        }
    }

    /// Labels in one slot; `None` for an out-of-range index
    pub fn slot(&self, index: usize) -> Option<&[String]> {
        self.slots.get(index).map(Vec::as_slice)
    }

    /// Toggle a seat's label in the active slot
    pub fn toggle(&mut self, seat: &Seat) -> ToggleOutcome {
        if !seat.is_free() {
            return ToggleOutcome::Rejected(Notice::error(format!(
                "Seat {} is not available",
                seat.label
            )));
        }

        let slot = &mut self.slots[self.active];
        if let Some(position) = slot.iter().position(|label| label == &seat.label) {
            slot.remove(position);
            ToggleOutcome::Removed
        } else {
            slot.push(seat.label.clone());
            ToggleOutcome::Added
        }
    }

    /// Emit the three (possibly empty) label arrays verbatim
    pub fn save(&self) -> Vec<Vec<String>> {
        self.slots.to_vec()
    }
}
