//! Reservation workflows: booking form, detail editor, seat layout and
//! preferences, closed-date calendar, waitlist view

pub mod calendar;
pub mod editor;
pub mod form;
pub mod seat_layout;
pub mod seat_prefs;
pub mod waitlist;

pub use editor::ReservationEditor;
pub use form::{FormIssue, ReservationForm};
pub use seat_prefs::{SeatPreferenceSelection, ToggleOutcome};
pub use waitlist::WaitlistView;
