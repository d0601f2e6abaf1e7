//! Date/time helpers
//!
//! The restaurant operates in Guam (fixed UTC+10, no DST). Staff enter
//! local dates and "HH:MM" times; the wire carries UTC RFC 3339.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use thiserror::Error;

/// Guam is fixed UTC+10 year-round
pub const GUAM_UTC_OFFSET_HOURS: i64 = 10;

/// Time parsing/conversion errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),
}

/// Convert a Guam-local date + "HH:MM" time to a UTC RFC 3339 string
///
/// Subtracts exactly 10 hours; when the result crosses midnight the
/// calendar date rolls back one day.
///
/// # Examples
///
/// ```
/// use reef_admin::utils::time::guam_to_utc;
///
/// assert_eq!(guam_to_utc("2025-01-26", "05:00").unwrap(), "2025-01-25T19:00:00Z");
/// assert_eq!(guam_to_utc("2025-01-26", "12:00").unwrap(), "2025-01-26T02:00:00Z");
/// ```
pub fn guam_to_utc(date: &str, time: &str) -> Result<String, TimeError> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(date.to_string()))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| TimeError::InvalidTime(time.to_string()))?;

    let utc = NaiveDateTime::new(date, time) - Duration::hours(GUAM_UTC_OFFSET_HOURS);
    Ok(utc.format("%Y-%m-%dT%H:%M:%SZ").to_string())
}

/// Render a 24-hour "HH:MM" wire time as 12-hour display text
///
/// # Examples
///
/// ```
/// use reef_admin::utils::time::format_time_12h;
///
/// assert_eq!(format_time_12h("13:30").unwrap(), "1:30 PM");
/// assert_eq!(format_time_12h("00:15").unwrap(), "12:15 AM");
/// ```
pub fn format_time_12h(time: &str) -> Result<String, TimeError> {
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| TimeError::InvalidTime(time.to_string()))?;
    let (pm, hour) = time.hour12();
    Ok(format!(
        "{}:{:02} {}",
        hour,
        time.minute(),
        if pm { "PM" } else { "AM" }
    ))
}

/// How staff express an order's pickup ETA
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EtaChoice {
    /// Plain minutes from now
    MinutesFromNow(i64),
    /// Decimal hours (1.5 = 90 minutes), used for advance-notice orders
    HourFraction(f64),
}

/// Resolve an ETA choice to an absolute UTC pickup time
pub fn resolve_eta(choice: EtaChoice, now: DateTime<Utc>) -> DateTime<Utc> {
    let minutes = match choice {
        EtaChoice::MinutesFromNow(m) => m,
        EtaChoice::HourFraction(hours) => (hours * 60.0).round() as i64,
    };
    now + Duration::minutes(minutes)
}

/// Format a wait estimate for waitlist rows
///
/// # Examples
///
/// ```
/// use reef_admin::utils::time::format_wait_minutes;
///
/// assert_eq!(format_wait_minutes(12), "12 min");
/// assert_eq!(format_wait_minutes(65), "1 hr 5 min");
/// assert_eq!(format_wait_minutes(120), "2 hr");
/// ```
pub fn format_wait_minutes(minutes: i32) -> String {
    if minutes < 60 {
        return format!("{} min", minutes);
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("{} hr", hours)
    } else {
        format!("{} hr {} min", hours, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_guam_conversion_rolls_date_back() {
        assert_eq!(guam_to_utc("2025-01-26", "05:00").unwrap(), "2025-01-25T19:00:00Z");
    }

    #[test]
    fn test_guam_conversion_same_day() {
        assert_eq!(guam_to_utc("2025-01-26", "12:00").unwrap(), "2025-01-26T02:00:00Z");
    }

    #[test]
    fn test_guam_conversion_year_boundary() {
        assert_eq!(guam_to_utc("2025-01-01", "09:59").unwrap(), "2024-12-31T23:59:00Z");
    }

    #[test]
    fn test_guam_conversion_exact_offset() {
        assert_eq!(guam_to_utc("2025-01-26", "10:00").unwrap(), "2025-01-26T00:00:00Z");
    }

    #[test]
    fn test_bad_inputs() {
        assert!(matches!(guam_to_utc("01/26/2025", "05:00"), Err(TimeError::InvalidDate(_))));
        assert!(matches!(guam_to_utc("2025-01-26", "5pm"), Err(TimeError::InvalidTime(_))));
    }

    #[test]
    fn test_noon_and_midnight_display() {
        assert_eq!(format_time_12h("12:00").unwrap(), "12:00 PM");
        assert_eq!(format_time_12h("00:00").unwrap(), "12:00 AM");
    }

    #[test]
    fn test_resolve_eta_minutes() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
        let eta = resolve_eta(EtaChoice::MinutesFromNow(25), now);
        assert_eq!(eta, Utc.with_ymd_and_hms(2025, 3, 1, 8, 25, 0).unwrap());
    }

    #[test]
    fn test_resolve_eta_hour_fraction() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
        let eta = resolve_eta(EtaChoice::HourFraction(1.5), now);
        assert_eq!(eta, Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap());
    }
}
