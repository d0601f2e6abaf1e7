//! Waitlist tab view state
//!
//! Read-mostly: entries come pre-computed from the backend; the console
//! only searches, sorts, and steps the date. A failed reload degrades to
//! an empty list.

use chrono::{Duration, NaiveDate};
use reef_client::HttpClient;
use reef_client::api::WaitlistQuery;
use shared::models::WaitlistEntry;
use tracing::warn;

/// Sortable waitlist columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaitlistSort {
    #[default]
    CheckInTime,
    PartySize,
    EstimatedWait,
}

/// Waitlist tab state
#[derive(Debug, Clone)]
pub struct WaitlistView {
    restaurant_id: i64,
    location_id: Option<i64>,
    date: NaiveDate,
    entries: Vec<WaitlistEntry>,

    pub search: String,
    pub sort: WaitlistSort,
    pub ascending: bool,
}

impl WaitlistView {
    pub fn new(restaurant_id: i64, location_id: Option<i64>, date: NaiveDate) -> Self {
        Self {
            restaurant_id,
            location_id,
            date,
            entries: Vec::new(),
            search: String::new(),
            sort: WaitlistSort::default(),
            ascending: true,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn next_day(&mut self) {
        self.date = self.date + Duration::days(1);
    }

    pub fn prev_day(&mut self) {
        self.date = self.date - Duration::days(1);
    }

    /// Reload entries for the current date; failure empties the list
    pub async fn reload(&mut self, client: &HttpClient) {
        let query = WaitlistQuery {
            date: self.date.format("%Y-%m-%d").to_string(),
            restaurant_id: self.restaurant_id,
            location_id: self.location_id,
        };
        match client.waitlist_entries(&query).await {
            Ok(entries) => self.entries = entries,
            Err(e) => {
                warn!(date = %self.date, error = %e, "Waitlist fetch failed");
                self.entries.clear();
            }
        }
    }

    /// Visible rows after search and sort
    pub fn rows(&self) -> Vec<&WaitlistEntry> {
        let needle = self.search.trim().to_lowercase();
        let mut rows: Vec<&WaitlistEntry> = self
            .entries
            .iter()
            .filter(|entry| {
                needle.is_empty()
                    || entry.contact_name.to_lowercase().contains(&needle)
                    || entry.contact_phone.contains(&needle)
            })
            .collect();

        rows.sort_by(|a, b| {
            let ordering = match self.sort {
                WaitlistSort::CheckInTime => a.check_in_time.cmp(&b.check_in_time),
                WaitlistSort::PartySize => a.party_size.cmp(&b.party_size),
                WaitlistSort::EstimatedWait => a
                    .estimated_wait_minutes
                    .unwrap_or(i32::MAX)
                    .cmp(&b.estimated_wait_minutes.unwrap_or(i32::MAX)),
            };
            if self.ascending { ordering } else { ordering.reverse() }
        });
        rows
    }

    #[cfg(test)]
    fn with_entries(mut self, entries: Vec<WaitlistEntry>) -> Self {
        self.entries = entries;
        self
    }
}
