//! Wholesale fundraiser dashboards: analytics, item manager, inventory

pub mod analytics;
pub mod inventory;
pub mod items;

pub use analytics::AnalyticsView;
pub use inventory::InventoryManager;
pub use items::{ItemManager, ItemScope};
