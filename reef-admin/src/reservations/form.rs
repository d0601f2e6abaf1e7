//! Reservation booking form
//!
//! Collects date/time/party/contact fields, pulls timeslots and capacity
//! from the backend, and gates submission on a pure validation pass. The
//! payload is only built — and the network only touched — after every
//! gate passes, so an invalid form can never produce a request.

use crate::core::context::RestaurantContext;
use crate::core::notice::Notice;
use crate::error::{AdminError, AdminResult};
use crate::utils::time::{TimeError, guam_to_utc};
use reef_client::HttpClient;
use reef_client::api::{AvailabilityQuery, CapacityQuery};
use shared::models::{CapacityInfo, Reservation, ReservationCreate};
use tracing::warn;

/// Phone input placeholder: Guam country code, pre-filled by the shell
pub const PHONE_PLACEHOLDER: &str = "+1671";

/// A reason the form cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIssue {
    DateMissing,
    TimeMissing,
    PartySizeTooSmall,
    /// Party size exceeds the fetched maximum for the selected time
    PartySizeOverCapacity { max: i32 },
    NameMissing,
    /// Phone still equals the pre-filled country code
    PhonePlaceholder,
}

impl std::fmt::Display for FormIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateMissing => write!(f, "Pick a date"),
            Self::TimeMissing => write!(f, "Pick a time"),
            Self::PartySizeTooSmall => write!(f, "Party size must be at least 1"),
            Self::PartySizeOverCapacity { max } => {
                write!(f, "Party size exceeds the maximum of {} for this time", max)
            }
            Self::NameMissing => write!(f, "Contact name is required"),
            Self::PhonePlaceholder => write!(f, "Enter a phone number"),
        }
    }
}

/// Booking form state
#[derive(Debug, Clone)]
pub struct ReservationForm {
    restaurant_id: i64,
    single_slot_duration_minutes: i32,

    /// "YYYY-MM-DD", Guam-local
    pub date: String,
    /// "HH:MM", 24-hour wire format
    pub time: String,
    pub party_size: i32,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub location_id: Option<i64>,
    pub duration_minutes: i32,
    pub special_requests: String,
    pub seat_preferences: Vec<Vec<String>>,

    timeslots: Vec<String>,
    capacity: Option<CapacityInfo>,
}

impl ReservationForm {
    pub fn new(ctx: &RestaurantContext) -> Self {
        Self {
            restaurant_id: ctx.restaurant_id,
            single_slot_duration_minutes: ctx.single_slot_duration_minutes,
            date: String::new(),
            time: String::new(),
            party_size: 2,
            contact_name: String::new(),
            contact_phone: PHONE_PLACEHOLDER.to_string(),
            contact_email: String::new(),
            location_id: None,
            duration_minutes: ctx.single_slot_duration_minutes,
            special_requests: String::new(),
            seat_preferences: Vec::new(),
            timeslots: Vec::new(),
            capacity: None,
        }
    }

    /// Fetched timeslots for the selected date
    pub fn timeslots(&self) -> &[String] {
        &self.timeslots
    }

    /// Fetched capacity for the selected time
    pub fn capacity(&self) -> Option<CapacityInfo> {
        self.capacity
    }

    /// The duration selector is hidden when exactly one slot exists;
    /// the restaurant's single-slot duration is forced instead.
    pub fn hide_duration(&self) -> bool {
        self.timeslots.len() == 1
    }

    /// Fetch timeslots for the current date and party size
    ///
    /// A fetch failure degrades to "no options": the slot list is emptied
    /// and the selected time cleared, never an error surface.
    pub async fn load_timeslots(&mut self, client: &HttpClient) {
        let query = AvailabilityQuery {
            date: self.date.clone(),
            party_size: self.party_size,
            restaurant_id: self.restaurant_id,
            location_id: self.location_id,
        };
        match client.availability(&query).await {
            Ok(slots) => self.apply_timeslots(slots),
            Err(e) => {
                warn!(date = %self.date, error = %e, "Availability fetch failed");
                self.timeslots.clear();
                self.time.clear();
                self.capacity = None;
            }
        }
    }

    /// Take a fresh slot list for the selected date
    ///
    /// Clears a selected time no longer on offer. When exactly one slot
    /// remains it is auto-selected and the restaurant's single-slot
    /// duration is forced.
    pub fn apply_timeslots(&mut self, slots: Vec<String>) {
        if !slots.contains(&self.time) {
            self.time.clear();
            self.capacity = None;
        }
        if let [only] = slots.as_slice() {
            self.time = only.clone();
            self.duration_minutes = self.single_slot_duration_minutes;
        }
        self.timeslots = slots;
    }

    /// Fetch the capacity limit for the selected (date, time)
    ///
    /// A fetch failure clears the value; submission then skips the
    /// max-party check rather than blocking on stale data.
    pub async fn load_capacity(&mut self, client: &HttpClient) {
        if self.date.is_empty() || self.time.is_empty() {
            self.capacity = None;
            return;
        }
        let query = CapacityQuery {
            date: self.date.clone(),
            time: self.time.clone(),
            restaurant_id: self.restaurant_id,
            location_id: self.location_id,
        };
        match client.capacity(&query).await {
            Ok(info) => self.capacity = Some(info),
            Err(e) => {
                warn!(date = %self.date, time = %self.time, error = %e, "Capacity fetch failed");
                self.capacity = None;
            }
        }
    }

    /// Every reason the form cannot be submitted right now
    pub fn issues(&self) -> Vec<FormIssue> {
        let mut issues = Vec::new();
        if self.date.trim().is_empty() {
            issues.push(FormIssue::DateMissing);
        }
        if self.time.trim().is_empty() {
            issues.push(FormIssue::TimeMissing);
        }
        if self.party_size < 1 {
            issues.push(FormIssue::PartySizeTooSmall);
        } else if let Some(capacity) = &self.capacity {
            if self.party_size > capacity.max_party_size {
                issues.push(FormIssue::PartySizeOverCapacity {
                    max: capacity.max_party_size,
                });
            }
        }
        if self.contact_name.trim().is_empty() {
            issues.push(FormIssue::NameMissing);
        }
        if self.contact_phone.trim() == PHONE_PLACEHOLDER {
            issues.push(FormIssue::PhonePlaceholder);
        }
        issues
    }

    pub fn can_submit(&self) -> bool {
        self.issues().is_empty()
    }

    /// Build the create payload, converting Guam-local input to UTC
    ///
    /// Pure: returns the validation issues instead of touching the network
    /// when any gate fails.
    pub fn submission(&self) -> Result<ReservationCreate, Vec<FormIssue>> {
        let issues = self.issues();
        if !issues.is_empty() {
            return Err(issues);
        }

        let start_time = guam_to_utc(&self.date, &self.time).map_err(|e| {
            warn!(error = %e, "Rejecting unparseable date/time input");
            match e {
                TimeError::InvalidDate(_) => vec![FormIssue::DateMissing],
                TimeError::InvalidTime(_) => vec![FormIssue::TimeMissing],
            }
        })?;

        let email = self.contact_email.trim();
        Ok(ReservationCreate {
            contact_name: self.contact_name.trim().to_string(),
            contact_phone: self.contact_phone.trim().to_string(),
            contact_email: (!email.is_empty()).then(|| email.to_string()),
            party_size: self.party_size,
            start_time,
            duration_minutes: self.duration_minutes,
            location_id: self.location_id,
            seat_preferences: self.seat_preferences.clone(),
            special_requests: {
                let requests = self.special_requests.trim();
                (!requests.is_empty()).then(|| requests.to_string())
            },
        })
    }

    /// Validate, then create the reservation
    pub async fn submit(&self, client: &HttpClient) -> AdminResult<(Reservation, Notice)> {
        let payload = self.submission().map_err(|issues| {
            let joined = issues
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            AdminError::Validation(joined)
        })?;

        let reservation = client.create_reservation(&payload).await?;
        tracing::info!(id = reservation.id, "Reservation created");
        Ok((reservation, Notice::success("Reservation created")))
    }
}
