//! Wholesale admin API (items, inventory, analytics, fundraisers)

use crate::{ClientResult, HttpClient};
use shared::models::{
    AdjustRequest, AdminOrder, AnalyticsReport, DamageRequest, Fundraiser, FundraiserParticipant,
    InventoryAuditEntry, OrderUpdate, RestockRequest, WholesaleItem, WholesaleItemCreate,
    WholesaleItemUpdate,
};

impl HttpClient {
    // ========== Items ==========

    /// List wholesale items, optionally scoped to a fundraiser
    pub async fn list_wholesale_items(
        &self,
        fundraiser_id: Option<i64>,
    ) -> ClientResult<Vec<WholesaleItem>> {
        match fundraiser_id {
            Some(id) => {
                self.get_query("/wholesale/admin/items", &[("fundraiser_id", id)])
                    .await
            }
            None => self.get("/wholesale/admin/items").await,
        }
    }

    /// Create a wholesale item
    pub async fn create_wholesale_item(
        &self,
        data: &WholesaleItemCreate,
    ) -> ClientResult<WholesaleItem> {
        self.post("/wholesale/admin/items", data).await
    }

    /// Update a wholesale item
    pub async fn update_wholesale_item(
        &self,
        id: i64,
        data: &WholesaleItemUpdate,
    ) -> ClientResult<WholesaleItem> {
        self.patch(&format!("/wholesale/admin/items/{}", id), data)
            .await
    }

    /// Delete a wholesale item
    pub async fn delete_wholesale_item(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/wholesale/admin/items/{}", id)).await
    }

    // ========== Inventory ==========

    /// Restock an item
    pub async fn restock_item(
        &self,
        item_id: i64,
        data: &RestockRequest,
    ) -> ClientResult<WholesaleItem> {
        self.post(&format!("/wholesale/admin/inventory/{}/restock", item_id), data)
            .await
    }

    /// Mark item stock as damaged
    pub async fn damage_item(
        &self,
        item_id: i64,
        data: &DamageRequest,
    ) -> ClientResult<WholesaleItem> {
        self.post(&format!("/wholesale/admin/inventory/{}/damage", item_id), data)
            .await
    }

    /// Adjust item stock to an absolute quantity
    pub async fn adjust_item(
        &self,
        item_id: i64,
        data: &AdjustRequest,
    ) -> ClientResult<WholesaleItem> {
        self.post(&format!("/wholesale/admin/inventory/{}/adjust", item_id), data)
            .await
    }

    /// Fetch the inventory audit trail, newest first
    pub async fn inventory_audit(
        &self,
        item_id: Option<i64>,
    ) -> ClientResult<Vec<InventoryAuditEntry>> {
        match item_id {
            Some(id) => {
                self.get_query("/wholesale/admin/inventory/audit", &[("item_id", id)])
                    .await
            }
            None => self.get("/wholesale/admin/inventory/audit").await,
        }
    }

    // ========== Analytics ==========

    /// Fetch pre-aggregated analytics, optionally scoped to a fundraiser
    pub async fn wholesale_analytics(
        &self,
        fundraiser_id: Option<i64>,
    ) -> ClientResult<AnalyticsReport> {
        match fundraiser_id {
            Some(id) => {
                self.get_query("/wholesale/admin/analytics", &[("fundraiser_id", id)])
                    .await
            }
            None => self.get("/wholesale/admin/analytics").await,
        }
    }

    // ========== Fundraisers ==========

    /// List fundraisers
    pub async fn list_fundraisers(&self) -> ClientResult<Vec<Fundraiser>> {
        self.get("/wholesale/admin/fundraisers").await
    }

    /// List participants for a fundraiser
    pub async fn fundraiser_participants(
        &self,
        fundraiser_id: i64,
    ) -> ClientResult<Vec<FundraiserParticipant>> {
        self.get(&format!(
            "/wholesale/admin/fundraisers/{}/participants",
            fundraiser_id
        ))
        .await
    }

    /// List orders for a fundraiser
    pub async fn fundraiser_orders(&self, fundraiser_id: i64) -> ClientResult<Vec<AdminOrder>> {
        self.get(&format!("/wholesale/admin/fundraisers/{}/orders", fundraiser_id))
            .await
    }

    /// Fetch one admin order
    pub async fn get_order(&self, id: i64) -> ClientResult<AdminOrder> {
        self.get(&format!("/wholesale/admin/orders/{}", id)).await
    }

    /// Update an admin order (items, status, instructions, pickup time)
    pub async fn update_order(&self, id: i64, data: &OrderUpdate) -> ClientResult<AdminOrder> {
        self.patch(&format!("/wholesale/admin/orders/{}", id), data)
            .await
    }
}
