//! Closed-date computation for the booking date picker
//!
//! Combines weekly operating hours with special-event closures to decide
//! which calendar dates in a month cannot take reservations.

use chrono::{Datelike, NaiveDate};
use shared::models::{OperatingHours, SpecialEvent};

fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Whether a single date is closed
///
/// A date is closed when its weekday has no open hours, or when a closing
/// special event covers it. Weekdays missing from `hours` count as closed,
/// matching the backend's definition of an unconfigured day.
pub fn is_closed(date: NaiveDate, hours: &[OperatingHours], events: &[SpecialEvent]) -> bool {
    let weekday = date.weekday().num_days_from_sunday() as u8;
    let weekly_open = hours.iter().any(|h| h.weekday == weekday && !h.closed);
    if !weekly_open {
        return true;
    }

    events.iter().any(|event| {
        if !event.closed {
            return false;
        }
        match (parse_day(&event.starts_on), parse_day(&event.ends_on)) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    })
}

/// All closed dates within a month, ascending
pub fn closed_dates(
    year: i32,
    month: u32,
    hours: &[OperatingHours],
    events: &[SpecialEvent],
) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .filter(|d| is_closed(*d, hours, events))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_every_day_but_monday() -> Vec<OperatingHours> {
        (0..7u8)
            .map(|weekday| OperatingHours {
                weekday,
                open_time: (weekday != 1).then(|| "11:00".to_string()),
                close_time: (weekday != 1).then(|| "21:00".to_string()),
                closed: weekday == 1,
            })
            .collect()
    }

    #[test]
    fn test_weekly_closure() {
        let hours = open_every_day_but_monday();
        // 2025-03-03 is a Monday
        assert!(is_closed(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(), &hours, &[]));
        assert!(!is_closed(NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(), &hours, &[]));
    }

    #[test]
    fn test_event_closure_range_inclusive() {
        let hours = open_every_day_but_monday();
        let events = vec![SpecialEvent {
            id: 1,
            name: "Liberation Day".to_string(),
            starts_on: "2025-07-21".to_string(),
            ends_on: "2025-07-22".to_string(),
            closed: true,
        }];
        assert!(is_closed(NaiveDate::from_ymd_opt(2025, 7, 21).unwrap(), &hours, &events));
        assert!(is_closed(NaiveDate::from_ymd_opt(2025, 7, 22).unwrap(), &hours, &events));
        assert!(!is_closed(NaiveDate::from_ymd_opt(2025, 7, 23).unwrap(), &hours, &events));
    }

    #[test]
    fn test_non_closing_event_ignored() {
        let hours = open_every_day_but_monday();
        let events = vec![SpecialEvent {
            id: 2,
            name: "Live music".to_string(),
            starts_on: "2025-07-25".to_string(),
            ends_on: "2025-07-25".to_string(),
            closed: false,
        }];
        assert!(!is_closed(NaiveDate::from_ymd_opt(2025, 7, 25).unwrap(), &hours, &events));
    }

    #[test]
    fn test_month_enumeration() {
        let hours = open_every_day_but_monday();
        let closed = closed_dates(2025, 3, &hours, &[]);
        // Mondays in March 2025: 3, 10, 17, 24, 31
        assert_eq!(closed.len(), 5);
        assert!(closed.iter().all(|d| d.weekday().num_days_from_sunday() == 1));
    }

    #[test]
    fn test_unconfigured_weekday_counts_as_closed() {
        let closed = closed_dates(2025, 3, &[], &[]);
        assert_eq!(closed.len(), 31);
    }
}
