//! End-to-end reservation scenarios: booking with a single available
//! slot, and the approve path through the detail editor.

use reef_admin::RestaurantContext;
use reef_admin::reservations::{ReservationEditor, ReservationForm};
use shared::models::{Reservation, ReservationStatus};

fn context() -> RestaurantContext {
    RestaurantContext {
        restaurant_id: 1,
        name: "Reef Tumon".to_string(),
        locations: Vec::new(),
        single_slot_duration_minutes: 120,
        inventory_tracking_enabled: true,
    }
}

#[test]
fn single_slot_forces_duration_and_hides_selector() {
    let mut form = ReservationForm::new(&context());
    form.date = "2025-01-26".to_string();
    form.party_size = 4;
    form.contact_name = "Maria Cruz".to_string();
    form.contact_phone = "+16715551234".to_string();
    form.duration_minutes = 90;

    form.apply_timeslots(vec!["18:00".to_string()]);

    assert!(form.hide_duration());
    assert_eq!(form.time, "18:00");
    assert_eq!(form.duration_minutes, 120);

    let payload = form.submission().expect("single-slot form should submit");
    assert_eq!(payload.duration_minutes, 120);
    assert_eq!(payload.start_time, "2025-01-26T08:00:00Z");
}

#[test]
fn multiple_slots_keep_selector_visible() {
    let mut form = ReservationForm::new(&context());
    form.apply_timeslots(vec!["18:00".to_string(), "19:30".to_string()]);
    assert!(!form.hide_duration());
    // Nothing auto-selected with more than one option
    assert!(form.time.is_empty());
}

#[test]
fn approving_a_booked_reservation_wires_reserved_once() {
    let editor = ReservationEditor::new(Reservation {
        id: 7,
        contact_name: "Maria Cruz".to_string(),
        contact_phone: "+16715551234".to_string(),
        contact_email: None,
        party_size: 4,
        status: ReservationStatus::Booked,
        start_time: "2025-01-26T08:00:00Z".to_string(),
        duration_minutes: 120,
        location_id: None,
        seat_preferences: Vec::new(),
        seat_labels: Vec::new(),
        special_requests: None,
    });

    let (payload, notice) = editor.approve().expect("booked reservations approve");

    // One payload, carrying the wire status and the denormalized fields
    // the backend validates alongside it
    let wire = serde_json::to_value(&payload).unwrap();
    assert_eq!(wire["status"], "reserved");
    assert_eq!(wire["contact_name"], "Maria Cruz");
    assert_eq!(wire["party_size"], 4);

    // Confirmation message is distinct from the generic status toast
    assert_eq!(notice.message, "Reservation approved");
    let (_, generic) = editor.cancel().unwrap();
    assert_ne!(notice.message, generic.message);
}

#[test]
fn approve_refused_once_terminal() {
    let mut reservation = Reservation {
        id: 8,
        contact_name: "Ben Taitano".to_string(),
        contact_phone: "+16715550002".to_string(),
        contact_email: None,
        party_size: 2,
        status: ReservationStatus::Canceled,
        start_time: "2025-01-26T08:00:00Z".to_string(),
        duration_minutes: 90,
        location_id: None,
        seat_preferences: Vec::new(),
        seat_labels: Vec::new(),
        special_requests: None,
    };
    assert!(ReservationEditor::new(reservation.clone()).approve().is_err());

    reservation.status = ReservationStatus::NoShow;
    assert!(ReservationEditor::new(reservation).cancel().is_err());
}
