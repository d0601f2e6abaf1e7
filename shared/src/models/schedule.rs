//! Schedule Model (operating hours, special events, capacity)

use serde::{Deserialize, Serialize};

/// Weekly operating hours for one weekday
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatingHours {
    /// 0 = Sunday .. 6 = Saturday
    pub weekday: u8,
    /// "HH:MM", absent when closed
    pub open_time: Option<String>,
    /// "HH:MM", absent when closed
    pub close_time: Option<String>,
    pub closed: bool,
}

/// Special event (holiday closure, private booking, extended hours)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialEvent {
    pub id: i64,
    pub name: String,
    /// "YYYY-MM-DD", inclusive
    pub starts_on: String,
    /// "YYYY-MM-DD", inclusive
    pub ends_on: String,
    /// Whether the restaurant is closed for the event
    pub closed: bool,
}

/// Capacity answer for a (date, time) pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CapacityInfo {
    pub max_party_size: i32,
    pub available: i32,
    pub total_capacity: i32,
}
