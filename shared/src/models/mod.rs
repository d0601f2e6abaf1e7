//! Data models
//!
//! Mirrored from backend API responses. Entity structs come with
//! `*Create` / `*Update` payload structs where the console mutates them.
//! Timestamps travel as RFC 3339 strings, timeslots as "HH:MM".

pub mod blocked_period;
pub mod inventory_action;
pub mod order;
pub mod reservation;
pub mod restaurant;
pub mod schedule;
pub mod seating;
pub mod waitlist;
pub mod wholesale;

// Re-exports
pub use blocked_period::*;
pub use inventory_action::*;
pub use order::*;
pub use reservation::*;
pub use restaurant::*;
pub use schedule::*;
pub use seating::*;
pub use waitlist::*;
pub use wholesale::*;
