//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Service location within a restaurant (e.g. dining room, patio)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
}

/// Restaurant info as served by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantInfo {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub locations: Vec<Location>,
    /// Duration forced onto a reservation when only one timeslot exists
    pub single_slot_duration_minutes: i32,
    pub inventory_tracking_enabled: bool,
}
