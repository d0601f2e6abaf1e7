//! Console error types

use thiserror::Error;

/// Unified error type for console operations
#[derive(Debug, Error)]
pub enum AdminError {
    /// No restaurant context is active; blocks a whole view, not a field
    #[error("No restaurant context is active")]
    ContextMissing,

    /// Client-side validation failed before any network call
    #[error("{0}")]
    Validation(String),

    /// Backend call failed
    #[error(transparent)]
    Client(#[from] reef_client::ClientError),

    /// Date/time parsing or conversion failed
    #[error(transparent)]
    Time(#[from] crate::utils::time::TimeError),
}

/// Result type for console operations
pub type AdminResult<T> = Result<T, AdminError>;
