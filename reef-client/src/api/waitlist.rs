//! Waitlist API

use crate::{ClientResult, HttpClient};
use serde::Serialize;
use shared::models::WaitlistEntry;

/// Query parameters for waitlist entries
#[derive(Debug, Clone, Serialize)]
pub struct WaitlistQuery {
    /// "YYYY-MM-DD", restaurant-local
    pub date: String,
    pub restaurant_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
}

impl HttpClient {
    /// List waitlist entries for a date
    pub async fn waitlist_entries(&self, query: &WaitlistQuery) -> ClientResult<Vec<WaitlistEntry>> {
        self.get_query("/waitlist_entries", query).await
    }
}
