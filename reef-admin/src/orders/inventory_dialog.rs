//! Inventory/payment action dialog for cancellations and refunds
//!
//! Staff decide, per tracked line item, whether stock returns to
//! inventory or is marked damaged, and pick one payment action for the
//! whole batch. `confirm()` assembles the `InventoryAction` batch only
//! when every per-item and payment-level gate passes; the caller performs
//! the actual ledger and payment gateway calls.

use shared::models::{AdminOrder, InventoryAction, InventoryDisposition, PaymentAction};
use thiserror::Error;

/// What the dialog was opened for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    /// Full cancellation: tracked items only, quantities fixed
    Cancellation,
    /// Partial refund: all items, per-item selection, adjustable quantity
    Refund,
}

/// Reasons confirmation is blocked
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialogError {
    #[error("Select at least one item to refund")]
    NoItemsSelected,

    #[error("Choose what happens to stock for \"{0}\"")]
    MissingDisposition(String),

    #[error("A reason is required to mark \"{0}\" as damaged")]
    MissingDamageReason(String),

    #[error("A reason is required for this payment action")]
    MissingPaymentReason,
}

/// One line item as shown in the dialog
#[derive(Debug, Clone)]
pub struct DialogItem {
    pub item_id: i64,
    pub unique_id: String,
    pub name: String,
    pub original_quantity: i32,
    pub quantity: i32,
    pub tracked: bool,
    pub selected: bool,
    pub disposition: Option<InventoryDisposition>,
    pub damage_reason: String,
}

/// How the batch payment reason is being supplied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PaymentReason {
    #[default]
    Unset,
    /// One of the action-specific presets
    Preset(String),
    /// Free-text "Other" fallback
    Other(String),
}

/// Preset reasons offered for each payment action
pub fn payment_reason_presets(action: PaymentAction) -> &'static [&'static str] {
    match action {
        PaymentAction::Refund => &[
            "Order canceled by customer",
            "Item unavailable",
            "Quality issue",
        ],
        PaymentAction::StoreCredit => &["Customer preference", "Goodwill gesture"],
        PaymentAction::AdjustTotal => &["Pricing correction", "Partial fulfillment"],
        PaymentAction::NoAction => &[],
    }
}

/// Dialog state for one cancel/refund batch
#[derive(Debug, Clone)]
pub struct InventoryActionDialog {
    mode: DialogMode,
    items: Vec<DialogItem>,
    inventory_tracking_enabled: bool,

    pub payment_action: PaymentAction,
    pub payment_reason: PaymentReason,
}

impl InventoryActionDialog {
    /// Open the dialog over one or more orders' line items
    ///
    /// Cancellation mode lists only inventory-tracked items at their full
    /// quantities; refund mode lists everything, unselected.
    pub fn new(mode: DialogMode, orders: &[AdminOrder], inventory_tracking_enabled: bool) -> Self {
        let items = orders
            .iter()
            .flat_map(|order| order.line_items.iter())
            .filter(|item| mode == DialogMode::Refund || item.inventory_tracked)
            .map(|item| DialogItem {
                item_id: item.item_id,
                unique_id: item.unique_id.clone(),
                name: item.name.clone(),
                original_quantity: item.quantity,
                quantity: item.quantity,
                tracked: item.inventory_tracked,
                selected: mode == DialogMode::Cancellation,
                disposition: None,
                damage_reason: String::new(),
            })
            .collect();

        Self {
            mode,
            items,
            inventory_tracking_enabled,
            payment_action: PaymentAction::default(),
            payment_reason: PaymentReason::default(),
        }
    }

    pub fn mode(&self) -> DialogMode {
        self.mode
    }

    pub fn items(&self) -> &[DialogItem] {
        &self.items
    }

    /// Select or deselect an item (refund mode; cancellation items are
    /// always included)
    pub fn set_selected(&mut self, index: usize, selected: bool) {
        if self.mode == DialogMode::Refund {
            if let Some(item) = self.items.get_mut(index) {
                item.selected = selected;
            }
        }
    }

    /// Adjust a refund quantity, clamped to 1..=original
    pub fn set_quantity(&mut self, index: usize, quantity: i32) {
        if self.mode != DialogMode::Refund {
            return;
        }
        if let Some(item) = self.items.get_mut(index) {
            item.quantity = quantity.clamp(1, item.original_quantity);
        }
    }

    pub fn set_disposition(&mut self, index: usize, disposition: InventoryDisposition) {
        if let Some(item) = self.items.get_mut(index) {
            item.disposition = Some(disposition);
        }
    }

    pub fn set_damage_reason(&mut self, index: usize, reason: &str) {
        if let Some(item) = self.items.get_mut(index) {
            item.damage_reason = reason.to_string();
        }
    }

    /// The batch payment reason, if one is resolved
    fn resolved_payment_reason(&self) -> Option<String> {
        match &self.payment_reason {
            PaymentReason::Preset(reason) if !reason.trim().is_empty() => {
                Some(reason.trim().to_string())
            }
            PaymentReason::Other(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
            _ => None,
        }
    }

    fn included(&self) -> impl Iterator<Item = &DialogItem> {
        self.items.iter().filter(|item| item.selected)
    }

    /// Check every gate without assembling the batch
    pub fn validate(&self) -> Result<(), DialogError> {
        if self.mode == DialogMode::Refund && self.included().next().is_none() {
            return Err(DialogError::NoItemsSelected);
        }

        for item in self.included().filter(|i| i.tracked) {
            match item.disposition {
                None => return Err(DialogError::MissingDisposition(item.name.clone())),
                Some(InventoryDisposition::MarkAsDamaged)
                    if self.inventory_tracking_enabled && item.damage_reason.trim().is_empty() =>
                {
                    return Err(DialogError::MissingDamageReason(item.name.clone()));
                }
                Some(_) => {}
            }
        }

        if self.payment_action != PaymentAction::NoAction
            && self.resolved_payment_reason().is_none()
        {
            return Err(DialogError::MissingPaymentReason);
        }
        Ok(())
    }

    /// Assemble the batch, or refuse with the first blocking gate
    ///
    /// Never produces output on a validation failure, so a caller wiring
    /// this straight into its confirm handler cannot dispatch early.
    pub fn confirm(&self) -> Result<Vec<InventoryAction>, DialogError> {
        self.validate()?;

        let payment_reason = self.resolved_payment_reason();
        Ok(self
            .included()
            .map(|item| InventoryAction {
                item_id: item.item_id,
                unique_id: item.unique_id.clone(),
                quantity: item.quantity,
                // Untracked refund items have no ledger effect; the backend
                // ignores the disposition for them
                action: item
                    .disposition
                    .unwrap_or(InventoryDisposition::ReturnToInventory),
                reason: {
                    let reason = item.damage_reason.trim();
                    (!reason.is_empty()).then(|| reason.to_string())
                },
                payment_action: self.payment_action,
                payment_reason: payment_reason.clone(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::{OrderLineItem, OrderStatus};

    fn order_with(items: Vec<OrderLineItem>) -> AdminOrder {
        AdminOrder {
            id: 1,
            customer_name: "Jo Santos".to_string(),
            status: OrderStatus::Pending,
            line_items: items,
            special_instructions: None,
            pickup_time: None,
            total: Decimal::new(0, 0),
            requires_advance_notice: false,
        }
    }

    fn item(name: &str, tracked: bool, quantity: i32) -> OrderLineItem {
        OrderLineItem {
            item_id: 1,
            unique_id: format!("{}-u", name),
            name: name.to_string(),
            quantity,
            price: Decimal::new(500, 2),
            notes: None,
            inventory_tracked: tracked,
        }
    }

    #[test]
    fn test_cancellation_lists_only_tracked_items() {
        let orders = vec![order_with(vec![item("Shirt", true, 2), item("Sticker", false, 5)])];
        let dialog = InventoryActionDialog::new(DialogMode::Cancellation, &orders, true);
        assert_eq!(dialog.items().len(), 1);
        assert!(dialog.items()[0].selected);
    }

    #[test]
    fn test_refund_requires_selection() {
        let orders = vec![order_with(vec![item("Shirt", true, 2)])];
        let dialog = InventoryActionDialog::new(DialogMode::Refund, &orders, true);
        assert_eq!(dialog.confirm(), Err(DialogError::NoItemsSelected));
    }

    #[test]
    fn test_damaged_without_reason_blocks() {
        let orders = vec![order_with(vec![item("Shirt", true, 2), item("Mug", true, 1)])];
        let mut dialog = InventoryActionDialog::new(DialogMode::Cancellation, &orders, true);
        dialog.set_disposition(0, InventoryDisposition::ReturnToInventory);
        dialog.set_disposition(1, InventoryDisposition::MarkAsDamaged);

        assert_eq!(
            dialog.confirm(),
            Err(DialogError::MissingDamageReason("Mug".to_string()))
        );

        dialog.set_damage_reason(1, "Cracked in storage");
        assert!(dialog.confirm().is_ok());
    }

    #[test]
    fn test_damage_reason_optional_when_tracking_disabled() {
        let orders = vec![order_with(vec![item("Shirt", true, 2)])];
        let mut dialog = InventoryActionDialog::new(DialogMode::Cancellation, &orders, false);
        dialog.set_disposition(0, InventoryDisposition::MarkAsDamaged);
        assert!(dialog.confirm().is_ok());
    }

    #[test]
    fn test_payment_action_needs_resolved_reason() {
        let orders = vec![order_with(vec![item("Shirt", true, 1)])];
        let mut dialog = InventoryActionDialog::new(DialogMode::Cancellation, &orders, true);
        dialog.set_disposition(0, InventoryDisposition::ReturnToInventory);

        dialog.payment_action = PaymentAction::Refund;
        assert_eq!(dialog.confirm(), Err(DialogError::MissingPaymentReason));

        dialog.payment_reason = PaymentReason::Other("   ".to_string());
        assert_eq!(dialog.confirm(), Err(DialogError::MissingPaymentReason));

        dialog.payment_reason = PaymentReason::Preset("Quality issue".to_string());
        let batch = dialog.confirm().unwrap();
        assert_eq!(batch[0].payment_reason.as_deref(), Some("Quality issue"));
    }

    #[test]
    fn test_no_action_needs_no_reason() {
        let orders = vec![order_with(vec![item("Shirt", true, 1)])];
        let mut dialog = InventoryActionDialog::new(DialogMode::Cancellation, &orders, true);
        dialog.set_disposition(0, InventoryDisposition::ReturnToInventory);
        assert!(dialog.confirm().is_ok());
    }

    #[test]
    fn test_refund_quantity_clamped() {
        let orders = vec![order_with(vec![item("Shirt", true, 3)])];
        let mut dialog = InventoryActionDialog::new(DialogMode::Refund, &orders, true);
        dialog.set_selected(0, true);
        dialog.set_quantity(0, 10);
        assert_eq!(dialog.items()[0].quantity, 3);
        dialog.set_quantity(0, 0);
        assert_eq!(dialog.items()[0].quantity, 1);
    }

    #[test]
    fn test_batch_carries_payment_action_per_item() {
        let orders = vec![order_with(vec![item("Shirt", true, 2), item("Sticker", false, 5)])];
        let mut dialog = InventoryActionDialog::new(DialogMode::Refund, &orders, true);
        dialog.set_selected(0, true);
        dialog.set_selected(1, true);
        dialog.set_disposition(0, InventoryDisposition::ReturnToInventory);
        dialog.payment_action = PaymentAction::StoreCredit;
        dialog.payment_reason = PaymentReason::Preset("Goodwill gesture".to_string());

        let batch = dialog.confirm().unwrap();
        assert_eq!(batch.len(), 2);
        assert!(batch.iter().all(|a| a.payment_action == PaymentAction::StoreCredit));
        // Untracked item defaults to return-to-inventory on the wire
        assert_eq!(batch[1].action, InventoryDisposition::ReturnToInventory);
    }
}
