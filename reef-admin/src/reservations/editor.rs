//! Reservation detail/edit modal state
//!
//! Holds a local copy of one reservation's editable fields. Field saves
//! issue a partial update; approve/reject/cancel issue a separate
//! status-only update that carries denormalized contact fields, because
//! the backend validates them alongside the status.

use crate::core::notice::Notice;
use crate::status::{InvalidTransition, ReservationAction, apply_action};
use shared::models::{Reservation, ReservationStatusUpdate, ReservationUpdate};

/// Edit-modal state over one reservation
#[derive(Debug, Clone)]
pub struct ReservationEditor {
    original: Reservation,

    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    party_size_input: String,
    pub duration_minutes: i32,
    pub special_requests: String,
}

impl ReservationEditor {
    pub fn new(reservation: Reservation) -> Self {
        Self {
            contact_name: reservation.contact_name.clone(),
            contact_phone: reservation.contact_phone.clone(),
            contact_email: reservation.contact_email.clone().unwrap_or_default(),
            party_size_input: reservation.party_size.to_string(),
            duration_minutes: reservation.duration_minutes,
            special_requests: reservation.special_requests.clone().unwrap_or_default(),
            original: reservation,
        }
    }

    pub fn reservation(&self) -> &Reservation {
        &self.original
    }

    /// Accept raw party-size input, keeping digits only
    pub fn set_party_size(&mut self, raw: &str) {
        self.party_size_input = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    }

    /// Current party size; falls back to the original when input is empty
    pub fn party_size(&self) -> i32 {
        self.party_size_input
            .parse()
            .unwrap_or(self.original.party_size)
    }

    /// Partial update carrying only the fields that changed
    pub fn save_payload(&self) -> ReservationUpdate {
        let mut update = ReservationUpdate::default();

        let name = self.contact_name.trim();
        if name != self.original.contact_name {
            update.contact_name = Some(name.to_string());
        }
        let phone = self.contact_phone.trim();
        if phone != self.original.contact_phone {
            update.contact_phone = Some(phone.to_string());
        }
        let email = self.contact_email.trim();
        if email != self.original.contact_email.as_deref().unwrap_or("") {
            update.contact_email = Some(email.to_string());
        }
        if self.party_size() != self.original.party_size {
            update.party_size = Some(self.party_size());
        }
        if self.duration_minutes != self.original.duration_minutes {
            update.duration_minutes = Some(self.duration_minutes);
        }
        let requests = self.special_requests.trim();
        if requests != self.original.special_requests.as_deref().unwrap_or("") {
            update.special_requests = Some(requests.to_string());
        }
        update
    }

    fn status_payload(&self, action: ReservationAction) -> Result<ReservationStatusUpdate, InvalidTransition> {
        let status = apply_action(self.original.status, action)?;
        Ok(ReservationStatusUpdate {
            status,
            contact_name: self.original.contact_name.clone(),
            contact_phone: self.original.contact_phone.clone(),
            contact_email: self.original.contact_email.clone(),
            party_size: self.original.party_size,
        })
    }

    /// Approve a booked reservation
    ///
    /// The confirmation notice is distinct from the generic status-update
    /// one so the shell can toast it differently.
    pub fn approve(&self) -> Result<(ReservationStatusUpdate, Notice), InvalidTransition> {
        let payload = self.status_payload(ReservationAction::Approve)?;
        Ok((payload, Notice::success("Reservation approved")))
    }

    /// Reject a booked reservation (wires as canceled)
    pub fn reject(&self) -> Result<(ReservationStatusUpdate, Notice), InvalidTransition> {
        let payload = self.status_payload(ReservationAction::Reject)?;
        Ok((payload, Notice::success("Reservation rejected")))
    }

    /// Cancel any non-terminal reservation
    pub fn cancel(&self) -> Result<(ReservationStatusUpdate, Notice), InvalidTransition> {
        let payload = self.status_payload(ReservationAction::Cancel)?;
        Ok((payload, Notice::info("Reservation status updated")))
    }
}
