//! Reservation and blocked period API

use crate::{ClientResult, HttpClient};
use shared::models::{
    BlockedPeriod, BlockedPeriodCreate, Reservation, ReservationCreate, ReservationStatusUpdate,
    ReservationUpdate,
};

impl HttpClient {
    // ========== Reservations ==========

    /// List reservations for a date, scoped to a restaurant
    pub async fn list_reservations(
        &self,
        restaurant_id: i64,
        date: &str,
        location_id: Option<i64>,
    ) -> ClientResult<Vec<Reservation>> {
        let mut query = vec![
            ("restaurant_id", restaurant_id.to_string()),
            ("date", date.to_string()),
        ];
        if let Some(id) = location_id {
            query.push(("location_id", id.to_string()));
        }
        self.get_query("/reservations", &query).await
    }

    /// Fetch one reservation
    pub async fn get_reservation(&self, id: i64) -> ClientResult<Reservation> {
        self.get(&format!("/reservations/{}", id)).await
    }

    /// Create a reservation
    pub async fn create_reservation(&self, data: &ReservationCreate) -> ClientResult<Reservation> {
        self.post("/reservations", data).await
    }

    /// Partially update a reservation's editable fields
    pub async fn update_reservation(
        &self,
        id: i64,
        data: &ReservationUpdate,
    ) -> ClientResult<Reservation> {
        self.patch(&format!("/reservations/{}", id), data).await
    }

    /// Update a reservation's status (approve / reject / cancel)
    pub async fn update_reservation_status(
        &self,
        id: i64,
        data: &ReservationStatusUpdate,
    ) -> ClientResult<Reservation> {
        self.patch(&format!("/reservations/{}", id), data).await
    }

    /// Delete a reservation
    pub async fn delete_reservation(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/reservations/{}", id)).await
    }

    // ========== Blocked periods ==========

    /// List blocked periods for a restaurant
    pub async fn list_blocked_periods(&self, restaurant_id: i64) -> ClientResult<Vec<BlockedPeriod>> {
        self.get_query("/blocked_periods", &[("restaurant_id", restaurant_id)])
            .await
    }

    /// Create a blocked period (payload validated by the caller)
    pub async fn create_blocked_period(
        &self,
        data: &BlockedPeriodCreate,
    ) -> ClientResult<BlockedPeriod> {
        self.post("/blocked_periods", data).await
    }

    /// Delete a blocked period
    pub async fn delete_blocked_period(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/blocked_periods/{}", id)).await
    }
}
