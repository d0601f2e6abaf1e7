//! Wholesale Fundraiser Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stock classification, derived server-side from quantity vs. threshold
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    #[default]
    InStock,
    LowStock,
    OutOfStock,
}

/// Option axes for a wholesale item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemOptions {
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
}

/// Wholesale item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WholesaleItem {
    pub id: i64,
    pub name: String,
    /// Unit price in dollars
    pub price: Decimal,
    pub stock_quantity: i32,
    pub low_stock_threshold: i32,
    /// Never recomputed client-side; the backend owns the classification
    pub stock_status: StockStatus,
    #[serde(default)]
    pub options: ItemOptions,
    pub fundraiser_id: Option<i64>,
}

/// Create wholesale item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WholesaleItemCreate {
    pub name: String,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub low_stock_threshold: i32,
    #[serde(default)]
    pub options: ItemOptions,
    pub fundraiser_id: Option<i64>,
}

/// Update wholesale item payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WholesaleItemUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub low_stock_threshold: Option<i32>,
    pub options: Option<ItemOptions>,
    pub fundraiser_id: Option<i64>,
}

/// Fundraiser entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fundraiser {
    pub id: i64,
    pub name: String,
    /// "YYYY-MM-DD"
    pub starts_on: String,
    /// "YYYY-MM-DD"
    pub ends_on: String,
    pub active: bool,
}

/// Fundraiser participant entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundraiserParticipant {
    pub id: i64,
    pub fundraiser_id: i64,
    pub name: String,
    pub orders_count: i64,
    /// Dollars raised by this participant (server-computed)
    pub total_raised: Decimal,
}

/// Inventory audit trail entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryAuditEntry {
    pub id: i64,
    pub item_id: i64,
    pub item_name: String,
    /// Signed stock delta
    pub change: i32,
    /// "restock", "damage", "adjust", "sale", "return"
    pub action: String,
    pub reason: Option<String>,
    /// Recorded time (UTC, RFC 3339)
    pub recorded_at: String,
}

/// Restock payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestockRequest {
    pub quantity: i32,
    pub reason: Option<String>,
}

/// Mark-damaged payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageRequest {
    pub quantity: i32,
    pub reason: String,
}

/// Absolute quantity adjustment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustRequest {
    pub new_quantity: i32,
    pub reason: String,
}

/// Pre-aggregated analytics headline numbers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_revenue: Decimal,
    pub total_orders: i64,
    pub items_sold: i64,
    pub average_order_value: Decimal,
}

/// Pre-aggregated per-item sales row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSales {
    pub item_id: i64,
    pub name: String,
    pub units_sold: i64,
    pub revenue: Decimal,
}

/// Analytics response shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub summary: AnalyticsSummary,
    #[serde(default)]
    pub item_sales: Vec<ItemSales>,
}
