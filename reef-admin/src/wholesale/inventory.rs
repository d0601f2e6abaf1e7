//! Wholesale inventory manager state
//!
//! Stock mutations (restock, mark damaged, adjust) are dispatched to the
//! backend, then both the item list and the audit-trail feed are reloaded
//! in full. There is no optimistic local update; the backend's ledger is
//! the only source of truth.

use crate::core::notice::Notice;
use crate::error::{AdminError, AdminResult};
use reef_client::HttpClient;
use shared::models::{AdjustRequest, DamageRequest, InventoryAuditEntry, RestockRequest, WholesaleItem};
use tracing::{info, warn};

/// Inventory manager state
#[derive(Debug, Clone, Default)]
pub struct InventoryManager {
    items: Vec<WholesaleItem>,
    audit: Vec<InventoryAuditEntry>,
}

impl InventoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[WholesaleItem] {
        &self.items
    }

    pub fn audit(&self) -> &[InventoryAuditEntry] {
        &self.audit
    }

    /// Reload both the item list and the audit feed
    ///
    /// Each fetch degrades independently to an empty list on failure.
    pub async fn reload(&mut self, client: &HttpClient) {
        match client.list_wholesale_items(None).await {
            Ok(items) => self.items = items,
            Err(e) => {
                warn!(error = %e, "Inventory item fetch failed");
                self.items.clear();
            }
        }
        match client.inventory_audit(None).await {
            Ok(entries) => self.audit = entries,
            Err(e) => {
                warn!(error = %e, "Audit trail fetch failed");
                self.audit.clear();
            }
        }
    }

    /// Restock an item, then reload
    pub async fn restock(
        &mut self,
        client: &HttpClient,
        item_id: i64,
        quantity: i32,
        reason: Option<String>,
    ) -> AdminResult<Notice> {
        if quantity < 1 {
            return Err(AdminError::Validation("Restock quantity must be at least 1".to_string()));
        }
        client
            .restock_item(item_id, &RestockRequest { quantity, reason })
            .await?;
        info!(item_id, quantity, "Item restocked");
        self.reload(client).await;
        Ok(Notice::success("Stock updated"))
    }

    /// Mark stock damaged, then reload; a reason is mandatory
    pub async fn mark_damaged(
        &mut self,
        client: &HttpClient,
        item_id: i64,
        quantity: i32,
        reason: &str,
    ) -> AdminResult<Notice> {
        if quantity < 1 {
            return Err(AdminError::Validation("Damaged quantity must be at least 1".to_string()));
        }
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(AdminError::Validation(
                "A reason is required to mark stock as damaged".to_string(),
            ));
        }
        client
            .damage_item(item_id, &DamageRequest { quantity, reason: reason.to_string() })
            .await?;
        info!(item_id, quantity, "Stock marked damaged");
        self.reload(client).await;
        Ok(Notice::success("Stock updated"))
    }

    /// Adjust stock to an absolute quantity, then reload
    pub async fn adjust(
        &mut self,
        client: &HttpClient,
        item_id: i64,
        new_quantity: i32,
        reason: &str,
    ) -> AdminResult<Notice> {
        if new_quantity < 0 {
            return Err(AdminError::Validation("Quantity cannot be negative".to_string()));
        }
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(AdminError::Validation("A reason is required for adjustments".to_string()));
        }
        client
            .adjust_item(item_id, &AdjustRequest { new_quantity, reason: reason.to_string() })
            .await?;
        info!(item_id, new_quantity, "Stock adjusted");
        self.reload(client).await;
        Ok(Notice::success("Stock updated"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reef_client::ClientConfig;

    // Mutation gating is client-side and must fail before any request is
    // built; a client pointed at an unroutable address proves no call is
    // attempted when validation fails.
    fn offline_client() -> HttpClient {
        ClientConfig::new("http://127.0.0.1:1").with_timeout(1).build_http_client()
    }

    #[tokio::test]
    async fn test_damage_requires_reason() {
        let mut manager = InventoryManager::new();
        let result = manager.mark_damaged(&offline_client(), 1, 2, "  ").await;
        assert!(matches!(result, Err(AdminError::Validation(_))));
    }

    #[tokio::test]
    async fn test_restock_rejects_zero_quantity() {
        let mut manager = InventoryManager::new();
        let result = manager.restock(&offline_client(), 1, 0, None).await;
        assert!(matches!(result, Err(AdminError::Validation(_))));
    }

    #[tokio::test]
    async fn test_adjust_rejects_negative() {
        let mut manager = InventoryManager::new();
        let result = manager.adjust(&offline_client(), 1, -5, "recount").await;
        assert!(matches!(result, Err(AdminError::Validation(_))));
    }
}
