//! Status metadata
//!
//! One closed enum-to-metadata mapping per status family, shared by every
//! badge and transition check in the console. Replaces per-view string
//! switches: a new status value fails to compile until every match arm
//! here is extended.

use shared::models::{
    OccupantStatus, OrderStatus, ReservationStatus, StockStatus, WaitlistStatus,
};
use thiserror::Error;

/// Badge color palette used across all status displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Green,
    Blue,
    Amber,
    Gray,
    Red,
    Purple,
}

/// Display metadata common to every status family
pub trait StatusMeta {
    /// Human-readable label
    fn label(&self) -> &'static str;

    /// Badge color for table/card rendering
    fn badge_color(&self) -> BadgeColor;
}

impl StatusMeta for ReservationStatus {
    fn label(&self) -> &'static str {
        match self {
            Self::Booked => "Booked",
            Self::Reserved => "Reserved",
            Self::Seated => "Seated",
            Self::Finished => "Finished",
            Self::Canceled => "Canceled",
            Self::NoShow => "No show",
        }
    }

    fn badge_color(&self) -> BadgeColor {
        match self {
            Self::Booked => BadgeColor::Amber,
            Self::Reserved => BadgeColor::Blue,
            Self::Seated => BadgeColor::Green,
            Self::Finished => BadgeColor::Gray,
            Self::Canceled => BadgeColor::Red,
            Self::NoShow => BadgeColor::Purple,
        }
    }
}

impl StatusMeta for OrderStatus {
    fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Preparing => "Preparing",
            Self::Ready => "Ready",
            Self::Completed => "Completed",
            Self::Canceled => "Canceled",
            Self::Refunded => "Refunded",
        }
    }

    fn badge_color(&self) -> BadgeColor {
        match self {
            Self::Pending => BadgeColor::Amber,
            Self::Preparing => BadgeColor::Blue,
            Self::Ready => BadgeColor::Green,
            Self::Completed => BadgeColor::Gray,
            Self::Canceled => BadgeColor::Red,
            Self::Refunded => BadgeColor::Purple,
        }
    }
}

impl StatusMeta for WaitlistStatus {
    fn label(&self) -> &'static str {
        match self {
            Self::Waiting => "Waiting",
            Self::Seated => "Seated",
            Self::Removed => "Removed",
            Self::NoShow => "No show",
        }
    }

    fn badge_color(&self) -> BadgeColor {
        match self {
            Self::Waiting => BadgeColor::Amber,
            Self::Seated => BadgeColor::Green,
            Self::Removed => BadgeColor::Gray,
            Self::NoShow => BadgeColor::Purple,
        }
    }
}

impl StatusMeta for OccupantStatus {
    fn label(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Reserved => "Reserved",
            Self::Occupied => "Occupied",
        }
    }

    fn badge_color(&self) -> BadgeColor {
        match self {
            Self::Free => BadgeColor::Green,
            Self::Reserved => BadgeColor::Amber,
            Self::Occupied => BadgeColor::Red,
        }
    }
}

impl StatusMeta for StockStatus {
    fn label(&self) -> &'static str {
        match self {
            Self::InStock => "In stock",
            Self::LowStock => "Low stock",
            Self::OutOfStock => "Out of stock",
        }
    }

    fn badge_color(&self) -> BadgeColor {
        match self {
            Self::InStock => BadgeColor::Green,
            Self::LowStock => BadgeColor::Amber,
            Self::OutOfStock => BadgeColor::Red,
        }
    }
}

// ========== Reservation transitions ==========

/// Staff actions that change a reservation's status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationAction {
    /// booked -> reserved
    Approve,
    /// booked -> canceled ("rejected" exists only in the console)
    Reject,
    /// any non-terminal -> canceled
    Cancel,
}

/// Attempted transition is not allowed from the current status
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Cannot {action:?} a {from:?} reservation")]
pub struct InvalidTransition {
    pub from: ReservationStatus,
    pub action: ReservationAction,
}

/// Whether a reservation can no longer change status
pub fn is_terminal(status: ReservationStatus) -> bool {
    matches!(
        status,
        ReservationStatus::Finished | ReservationStatus::Canceled | ReservationStatus::NoShow
    )
}

/// Resolve the target status for an action, or refuse it
pub fn apply_action(
    from: ReservationStatus,
    action: ReservationAction,
) -> Result<ReservationStatus, InvalidTransition> {
    match (from, action) {
        (ReservationStatus::Booked, ReservationAction::Approve) => Ok(ReservationStatus::Reserved),
        (ReservationStatus::Booked, ReservationAction::Reject) => Ok(ReservationStatus::Canceled),
        (status, ReservationAction::Cancel) if !is_terminal(status) => {
            Ok(ReservationStatus::Canceled)
        }
        (from, action) => Err(InvalidTransition { from, action }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approve_only_from_booked() {
        assert_eq!(
            apply_action(ReservationStatus::Booked, ReservationAction::Approve),
            Ok(ReservationStatus::Reserved)
        );
        assert!(apply_action(ReservationStatus::Seated, ReservationAction::Approve).is_err());
        assert!(apply_action(ReservationStatus::Canceled, ReservationAction::Approve).is_err());
    }

    #[test]
    fn test_reject_maps_to_canceled() {
        assert_eq!(
            apply_action(ReservationStatus::Booked, ReservationAction::Reject),
            Ok(ReservationStatus::Canceled)
        );
        assert!(apply_action(ReservationStatus::Reserved, ReservationAction::Reject).is_err());
    }

    #[test]
    fn test_cancel_from_any_non_terminal() {
        for status in [
            ReservationStatus::Booked,
            ReservationStatus::Reserved,
            ReservationStatus::Seated,
        ] {
            assert_eq!(
                apply_action(status, ReservationAction::Cancel),
                Ok(ReservationStatus::Canceled)
            );
        }
        for status in [
            ReservationStatus::Finished,
            ReservationStatus::Canceled,
            ReservationStatus::NoShow,
        ] {
            assert!(apply_action(status, ReservationAction::Cancel).is_err());
        }
    }
}
