//! Waitlist Model

use serde::{Deserialize, Serialize};

/// Waitlist entry status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WaitlistStatus {
    #[default]
    Waiting,
    Seated,
    Removed,
    NoShow,
}

/// Waitlist entry entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub id: i64,
    pub contact_name: String,
    pub contact_phone: String,
    pub party_size: i32,
    /// Check-in time (UTC, RFC 3339)
    pub check_in_time: String,
    pub status: WaitlistStatus,
    /// Backend estimate in minutes; the wire key is `estimated_wait_time`
    #[serde(rename = "estimated_wait_time")]
    pub estimated_wait_minutes: Option<i32>,
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_body_carries_wait_estimate() {
        let body = r#"{
            "id": 3,
            "contact_name": "Ana Flores",
            "contact_phone": "+16715550001",
            "party_size": 2,
            "check_in_time": "2025-03-01T01:00:00Z",
            "status": "waiting",
            "estimated_wait_time": 15,
            "location": null
        }"#;
        let entry: WaitlistEntry = serde_json::from_str(body).unwrap();
        assert_eq!(entry.estimated_wait_minutes, Some(15));
        assert_eq!(entry.status, WaitlistStatus::Waiting);
    }

    #[test]
    fn test_wait_estimate_round_trips_under_wire_key() {
        let entry = WaitlistEntry {
            id: 1,
            contact_name: "Ben Taitano".to_string(),
            contact_phone: "+16715550002".to_string(),
            party_size: 6,
            check_in_time: "2025-03-01T00:30:00Z".to_string(),
            status: WaitlistStatus::Waiting,
            estimated_wait_minutes: Some(45),
            location: None,
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["estimated_wait_time"], 45);
        assert!(value.get("estimated_wait_minutes").is_none());
    }
}
