//! Blocked Period Model

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Blocked period entity (availability blackout window)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockedPeriod {
    pub id: i64,
    pub restaurant_id: i64,
    pub location_id: Option<i64>,
    /// Start time (UTC, RFC 3339)
    pub start_time: String,
    /// End time (UTC, RFC 3339)
    pub end_time: String,
    pub reason: String,
    pub status: Option<String>,
}

/// Blocked period validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockedPeriodError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("End time must be after start time")]
    EndBeforeStart,

    #[error("A reason is required")]
    ReasonRequired,
}

/// Create blocked period payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockedPeriodCreate {
    pub restaurant_id: i64,
    pub location_id: Option<i64>,
    /// Start time (UTC, RFC 3339)
    pub start_time: String,
    /// End time (UTC, RFC 3339)
    pub end_time: String,
    pub reason: String,
}

impl BlockedPeriodCreate {
    /// Check the `start_time < end_time` invariant and the reason field.
    ///
    /// The backend enforces the same rules; this keeps an invalid payload
    /// from ever leaving the console.
    pub fn validate(&self) -> Result<(), BlockedPeriodError> {
        let start = DateTime::parse_from_rfc3339(&self.start_time)
            .map_err(|_| BlockedPeriodError::InvalidTimestamp(self.start_time.clone()))?;
        let end = DateTime::parse_from_rfc3339(&self.end_time)
            .map_err(|_| BlockedPeriodError::InvalidTimestamp(self.end_time.clone()))?;

        if end <= start {
            return Err(BlockedPeriodError::EndBeforeStart);
        }
        if self.reason.trim().is_empty() {
            return Err(BlockedPeriodError::ReasonRequired);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(start: &str, end: &str, reason: &str) -> BlockedPeriodCreate {
        BlockedPeriodCreate {
            restaurant_id: 1,
            location_id: None,
            start_time: start.to_string(),
            end_time: end.to_string(),
            reason: reason.to_string(),
        }
    }

    #[test]
    fn test_valid_period() {
        let p = period("2025-03-01T08:00:00Z", "2025-03-01T12:00:00Z", "Private event");
        assert_eq!(p.validate(), Ok(()));
    }

    #[test]
    fn test_end_before_start_rejected() {
        let p = period("2025-03-01T12:00:00Z", "2025-03-01T08:00:00Z", "Private event");
        assert_eq!(p.validate(), Err(BlockedPeriodError::EndBeforeStart));
    }

    #[test]
    fn test_end_equal_start_rejected() {
        let p = period("2025-03-01T08:00:00Z", "2025-03-01T08:00:00Z", "Private event");
        assert_eq!(p.validate(), Err(BlockedPeriodError::EndBeforeStart));
    }

    #[test]
    fn test_empty_reason_rejected() {
        let p = period("2025-03-01T08:00:00Z", "2025-03-01T12:00:00Z", "   ");
        assert_eq!(p.validate(), Err(BlockedPeriodError::ReasonRequired));
    }

    #[test]
    fn test_garbage_timestamp_rejected() {
        let p = period("yesterday", "2025-03-01T12:00:00Z", "Private event");
        assert!(matches!(p.validate(), Err(BlockedPeriodError::InvalidTimestamp(_))));
    }
}
