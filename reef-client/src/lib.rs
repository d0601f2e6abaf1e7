//! Reef Client - HTTP client for the Reef backend
//!
//! Provides typed REST calls to the reservation, waitlist, and wholesale
//! admin API. One pinned response schema per endpoint; a shape mismatch is
//! a loud error, never a silent fallback.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
