//! Reservation Model

use serde::{Deserialize, Serialize};

/// Reservation status (wire values)
///
/// Closed enum; the console's "rejected" action is mapped to `Canceled`
/// before it reaches the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    #[default]
    Booked,
    Reserved,
    Seated,
    Finished,
    Canceled,
    NoShow,
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: Option<String>,
    pub party_size: i32,
    pub status: ReservationStatus,
    /// Start time (UTC, RFC 3339)
    pub start_time: String,
    pub duration_minutes: i32,
    pub location_id: Option<i64>,
    /// Up to 3 seat-label sets in priority order
    #[serde(default)]
    pub seat_preferences: Vec<Vec<String>>,
    /// Seats actually assigned
    #[serde(default)]
    pub seat_labels: Vec<String>,
    pub special_requests: Option<String>,
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: Option<String>,
    pub party_size: i32,
    /// Start time (UTC, RFC 3339)
    pub start_time: String,
    pub duration_minutes: i32,
    pub location_id: Option<i64>,
    #[serde(default)]
    pub seat_preferences: Vec<Vec<String>>,
    pub special_requests: Option<String>,
}

/// Update reservation payload (partial; fields left `None` are untouched)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationUpdate {
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub party_size: Option<i32>,
    pub duration_minutes: Option<i32>,
    pub seat_preferences: Option<Vec<Vec<String>>>,
    pub special_requests: Option<String>,
}

impl ReservationUpdate {
    /// True when no field would change anything
    pub fn is_empty(&self) -> bool {
        self.contact_name.is_none()
            && self.contact_phone.is_none()
            && self.contact_email.is_none()
            && self.party_size.is_none()
            && self.duration_minutes.is_none()
            && self.seat_preferences.is_none()
            && self.special_requests.is_none()
    }
}

/// Status-only update payload
///
/// Carries denormalized contact fields alongside the status because the
/// backend validates them on every reservation write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationStatusUpdate {
    pub status: ReservationStatus,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: Option<String>,
    pub party_size: i32,
}
