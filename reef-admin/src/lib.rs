//! Reef Admin - staff console core for the Reef restaurant platform
//!
//! Holds the state machines, validation, geometry, and formatting behind
//! the staff console: reservation booking, seat preferences, waitlists,
//! order editing with inventory/payment dispositions, and wholesale
//! fundraiser dashboards. A thin rendering shell drives these types; all
//! heavy computation (availability, capacity, ledgers, payments) stays
//! behind the REST backend reached through `reef-client`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub mod core;
pub mod error;
pub mod orders;
pub mod reservations;
pub mod status;
pub mod utils;
pub mod wholesale;

pub use crate::core::context::{ContextState, RestaurantContext};
pub use crate::core::notice::{Notice, NoticeLevel, NoticeLog};
pub use error::{AdminError, AdminResult};

/// Initialize tracing with an environment-driven filter
///
/// Honors `RUST_LOG` when set; otherwise defaults to `info` globally with
/// debug output for this crate. Safe to call more than once.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reef_admin=debug"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .try_init();
}
