//! Shared types for the Reef platform
//!
//! Wire models and request payloads exchanged with the Reef backend.
//! Everything here is a serde DTO; persistence and invariant enforcement
//! live server-side.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
