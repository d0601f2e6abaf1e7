//! Admin Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status (wire values)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Completed,
    Canceled,
    Refunded,
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub item_id: i64,
    /// Distinguishes repeated items within one order
    pub unique_id: String,
    pub name: String,
    pub quantity: i32,
    /// Unit price in dollars
    pub price: Decimal,
    pub notes: Option<String>,
    /// Whether the backend keeps an inventory ledger for this item
    pub inventory_tracked: bool,
}

/// Admin-facing order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOrder {
    pub id: i64,
    pub customer_name: String,
    pub status: OrderStatus,
    pub line_items: Vec<OrderLineItem>,
    pub special_instructions: Option<String>,
    /// Pickup time (UTC, RFC 3339), set when the order enters `preparing`
    pub pickup_time: Option<String>,
    /// Total in dollars (server-computed)
    pub total: Decimal,
    /// Orders that need an advance-notice ETA instead of minutes-from-now
    pub requires_advance_notice: bool,
}

/// Update order payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub line_items: Option<Vec<OrderLineItem>>,
    pub status: Option<OrderStatus>,
    pub special_instructions: Option<String>,
    /// Pickup time (UTC, RFC 3339)
    pub pickup_time: Option<String>,
}
