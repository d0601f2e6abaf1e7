//! Typed endpoint wrappers, grouped per backend domain

pub mod availability;
pub mod reservations;
pub mod schedule;
pub mod waitlist;
pub mod wholesale;

pub use availability::{AvailabilityQuery, CapacityQuery};
pub use waitlist::WaitlistQuery;
