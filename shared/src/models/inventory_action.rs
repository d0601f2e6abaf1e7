//! Inventory Action Model (cancel/refund batch elements)

use serde::{Deserialize, Serialize};

/// What happens to stock for one line item on cancel/refund
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InventoryDisposition {
    ReturnToInventory,
    MarkAsDamaged,
}

/// Payment action applied to the whole cancel/refund batch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentAction {
    Refund,
    StoreCredit,
    AdjustTotal,
    #[default]
    NoAction,
}

/// One element of a cancel/refund batch
///
/// Ephemeral: assembled by the inventory dialog and handed to the backend,
/// which owns the actual ledger and payment gateway calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryAction {
    pub item_id: i64,
    pub unique_id: String,
    pub quantity: i32,
    pub action: InventoryDisposition,
    /// Required when `action` is `MarkAsDamaged` and tracking is enabled
    pub reason: Option<String>,
    pub payment_action: PaymentAction,
    /// Required for any payment action other than `no_action`
    pub payment_reason: Option<String>,
}
