//! Availability and capacity API

use crate::{ClientResult, HttpClient};
use serde::Serialize;
use shared::models::CapacityInfo;

/// Query parameters for the availability endpoint
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityQuery {
    /// "YYYY-MM-DD", restaurant-local
    pub date: String,
    pub party_size: i32,
    pub restaurant_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
}

/// Query parameters for the capacity endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CapacityQuery {
    /// "YYYY-MM-DD", restaurant-local
    pub date: String,
    /// "HH:MM", 24-hour wire format
    pub time: String,
    pub restaurant_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
}

impl HttpClient {
    /// Fetch available timeslots as "HH:MM" strings
    ///
    /// The pinned schema is a bare array. Historical backends answered with
    /// `{data: [...]}` or `{timeslots: [...]}` wrappers; those now fail as
    /// `InvalidResponse` instead of being silently accepted.
    pub async fn availability(&self, query: &AvailabilityQuery) -> ClientResult<Vec<String>> {
        self.get_query("/availability", query).await
    }

    /// Fetch capacity for a (date, time) pair
    pub async fn capacity(&self, query: &CapacityQuery) -> ClientResult<CapacityInfo> {
        self.get_query("/availability/capacity", query).await
    }
}
