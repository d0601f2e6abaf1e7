//! Operating hours and special events API

use crate::{ClientResult, HttpClient};
use shared::models::{OperatingHours, RestaurantInfo, SpecialEvent};

impl HttpClient {
    /// Fetch restaurant info (locations, slot duration, feature flags)
    pub async fn restaurant_info(&self, restaurant_id: i64) -> ClientResult<RestaurantInfo> {
        self.get(&format!("/restaurants/{}", restaurant_id)).await
    }

    /// Fetch weekly operating hours
    pub async fn operating_hours(&self, restaurant_id: i64) -> ClientResult<Vec<OperatingHours>> {
        self.get_query("/operating_hours", &[("restaurant_id", restaurant_id)])
            .await
    }

    /// Fetch special events (closures, private bookings)
    pub async fn special_events(&self, restaurant_id: i64) -> ClientResult<Vec<SpecialEvent>> {
        self.get_query("/special_events", &[("restaurant_id", restaurant_id)])
            .await
    }
}
