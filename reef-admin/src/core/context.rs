//! Restaurant context
//!
//! The currently active restaurant scoping all API calls. It is an
//! explicit, injected value with a distinct "not yet initialized" state;
//! views that need it call `require()` and render a blocking error panel
//! on `ContextMissing` instead of a toast.

use crate::error::AdminError;
use shared::models::{Location, RestaurantInfo};

/// Active restaurant scope for the console
#[derive(Debug, Clone)]
pub struct RestaurantContext {
    pub restaurant_id: i64,
    pub name: String,
    pub locations: Vec<Location>,
    /// Duration forced onto a reservation when only one timeslot exists
    pub single_slot_duration_minutes: i32,
    pub inventory_tracking_enabled: bool,
}

impl From<RestaurantInfo> for RestaurantContext {
    fn from(info: RestaurantInfo) -> Self {
        Self {
            restaurant_id: info.id,
            name: info.name,
            locations: info.locations,
            single_slot_duration_minutes: info.single_slot_duration_minutes,
            inventory_tracking_enabled: info.inventory_tracking_enabled,
        }
    }
}

impl RestaurantContext {
    /// Look up a location by id within this restaurant
    pub fn location(&self, id: i64) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }
}

/// Context lifecycle state
///
/// `Uninitialized` (bootstrap has not resolved a restaurant yet) is
/// distinct from a ready context whose `locations` happen to be empty.
#[derive(Debug, Clone, Default)]
pub enum ContextState {
    #[default]
    Uninitialized,
    Ready(RestaurantContext),
}

impl ContextState {
    /// Borrow the context, or fail with the blocking `ContextMissing` error
    pub fn require(&self) -> Result<&RestaurantContext, AdminError> {
        match self {
            Self::Ready(ctx) => Ok(ctx),
            Self::Uninitialized => Err(AdminError::ContextMissing),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}
