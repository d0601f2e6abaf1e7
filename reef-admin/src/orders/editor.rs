//! Admin order edit modal state
//!
//! Local copy of an order's line items plus a status selector. Moving the
//! status into `preparing` inserts an ETA step: the save refuses to build
//! until staff pick minutes-from-now (or decimal hours for advance-notice
//! orders), and the resolved absolute pickup time is merged into the
//! update payload.

use crate::utils::time::{EtaChoice, resolve_eta};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::models::{AdminOrder, OrderLineItem, OrderStatus, OrderUpdate};
use thiserror::Error;

/// Reasons the editor refuses to produce a save payload
#[derive(Debug, Error, PartialEq)]
pub enum OrderEditError {
    #[error("Choose an estimated pickup time before saving")]
    EtaRequired,

    #[error("No line item at index {0}")]
    NoSuchItem(usize),

    #[error("Quantity must be at least 1")]
    QuantityTooSmall,
}

/// Edit-modal state over one order
#[derive(Debug, Clone)]
pub struct OrderEditor {
    original: AdminOrder,

    pub items: Vec<OrderLineItem>,
    pub status: OrderStatus,
    pub special_instructions: String,
    eta: Option<EtaChoice>,
}

impl OrderEditor {
    pub fn new(order: AdminOrder) -> Self {
        Self {
            items: order.line_items.clone(),
            status: order.status,
            special_instructions: order.special_instructions.clone().unwrap_or_default(),
            eta: None,
            original: order,
        }
    }

    pub fn order(&self) -> &AdminOrder {
        &self.original
    }

    // ========== Line item edits ==========

    pub fn add_item(&mut self, item: OrderLineItem) {
        self.items.push(item);
    }

    pub fn remove_item(&mut self, index: usize) -> Result<OrderLineItem, OrderEditError> {
        if index >= self.items.len() {
            return Err(OrderEditError::NoSuchItem(index));
        }
        Ok(self.items.remove(index))
    }

    pub fn set_quantity(&mut self, index: usize, quantity: i32) -> Result<(), OrderEditError> {
        if quantity < 1 {
            return Err(OrderEditError::QuantityTooSmall);
        }
        let item = self
            .items
            .get_mut(index)
            .ok_or(OrderEditError::NoSuchItem(index))?;
        item.quantity = quantity;
        Ok(())
    }

    pub fn set_price(&mut self, index: usize, price: Decimal) -> Result<(), OrderEditError> {
        let item = self
            .items
            .get_mut(index)
            .ok_or(OrderEditError::NoSuchItem(index))?;
        item.price = price;
        Ok(())
    }

    pub fn set_note(&mut self, index: usize, note: &str) -> Result<(), OrderEditError> {
        let item = self
            .items
            .get_mut(index)
            .ok_or(OrderEditError::NoSuchItem(index))?;
        let note = note.trim();
        item.notes = (!note.is_empty()).then(|| note.to_string());
        Ok(())
    }

    // ========== ETA step ==========

    /// Whether the save is currently held up waiting for an ETA choice
    pub fn needs_eta(&self) -> bool {
        self.status == OrderStatus::Preparing
            && self.original.status != OrderStatus::Preparing
            && self.eta.is_none()
    }

    /// Whether this order wants the advance-notice (decimal hours) picker
    pub fn uses_advance_notice(&self) -> bool {
        self.original.requires_advance_notice
    }

    pub fn set_eta(&mut self, choice: EtaChoice) {
        self.eta = Some(choice);
    }

    // ========== Save ==========

    /// Build the update payload, resolving the ETA against `now`
    pub fn save_payload(&self, now: DateTime<Utc>) -> Result<OrderUpdate, OrderEditError> {
        if self.needs_eta() {
            return Err(OrderEditError::EtaRequired);
        }

        let pickup_time = match (self.status, self.original.status, self.eta) {
            (OrderStatus::Preparing, from, Some(choice)) if from != OrderStatus::Preparing => {
                Some(resolve_eta(choice, now).format("%Y-%m-%dT%H:%M:%SZ").to_string())
            }
            _ => None,
        };

        let instructions = self.special_instructions.trim();
        Ok(OrderUpdate {
            line_items: Some(self.items.clone()),
            status: (self.status != self.original.status).then_some(self.status),
            special_instructions: (!instructions.is_empty()).then(|| instructions.to_string()),
            pickup_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn line_item(name: &str, quantity: i32) -> OrderLineItem {
        OrderLineItem {
            item_id: 1,
            unique_id: format!("{}-1", name),
            name: name.to_string(),
            quantity,
            price: Decimal::new(995, 2),
            notes: None,
            inventory_tracked: true,
        }
    }

    fn order(status: OrderStatus, advance_notice: bool) -> AdminOrder {
        AdminOrder {
            id: 10,
            customer_name: "Jo Santos".to_string(),
            status,
            line_items: vec![line_item("Sea grapes", 2)],
            special_instructions: None,
            pickup_time: None,
            total: Decimal::new(1990, 2),
            requires_advance_notice: advance_notice,
        }
    }

    #[test]
    fn test_preparing_requires_eta() {
        let mut editor = OrderEditor::new(order(OrderStatus::Pending, false));
        editor.status = OrderStatus::Preparing;
        assert!(editor.needs_eta());

        let now = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
        assert!(matches!(editor.save_payload(now), Err(OrderEditError::EtaRequired)));
    }

    #[test]
    fn test_eta_merged_into_payload() {
        let mut editor = OrderEditor::new(order(OrderStatus::Pending, false));
        editor.status = OrderStatus::Preparing;
        editor.set_eta(EtaChoice::MinutesFromNow(20));

        let now = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
        let payload = editor.save_payload(now).unwrap();
        assert_eq!(payload.status, Some(OrderStatus::Preparing));
        assert_eq!(payload.pickup_time.as_deref(), Some("2025-03-01T08:20:00Z"));
    }

    #[test]
    fn test_advance_notice_hour_fraction() {
        let mut editor = OrderEditor::new(order(OrderStatus::Pending, true));
        assert!(editor.uses_advance_notice());
        editor.status = OrderStatus::Preparing;
        editor.set_eta(EtaChoice::HourFraction(2.5));

        let now = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
        let payload = editor.save_payload(now).unwrap();
        assert_eq!(payload.pickup_time.as_deref(), Some("2025-03-01T10:30:00Z"));
    }

    #[test]
    fn test_no_eta_needed_when_already_preparing() {
        let mut editor = OrderEditor::new(order(OrderStatus::Preparing, false));
        editor.status = OrderStatus::Preparing;
        assert!(!editor.needs_eta());

        let now = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
        let payload = editor.save_payload(now).unwrap();
        assert!(payload.pickup_time.is_none());
        assert!(payload.status.is_none());
    }

    #[test]
    fn test_item_edits() {
        let mut editor = OrderEditor::new(order(OrderStatus::Pending, false));
        editor.add_item(line_item("Latte stone cake", 1));
        editor.set_quantity(1, 3).unwrap();
        editor.set_note(0, " extra sauce ").unwrap();

        assert_eq!(editor.items[1].quantity, 3);
        assert_eq!(editor.items[0].notes.as_deref(), Some("extra sauce"));
        assert_eq!(editor.set_quantity(0, 0), Err(OrderEditError::QuantityTooSmall));
        assert!(matches!(editor.remove_item(5), Err(OrderEditError::NoSuchItem(5))));
    }
}
