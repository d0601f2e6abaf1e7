//! Wholesale analytics dashboard state
//!
//! Numbers arrive pre-aggregated; the console only searches, sorts, and
//! formats them for display.

use crate::utils::format::format_currency;
use reef_client::HttpClient;
use shared::models::{AnalyticsReport, AnalyticsSummary, ItemSales};
use tracing::warn;

/// Sortable per-item sales columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemSalesSort {
    #[default]
    Revenue,
    UnitsSold,
    Name,
}

/// Analytics dashboard state
#[derive(Debug, Clone, Default)]
pub struct AnalyticsView {
    fundraiser_id: Option<i64>,
    summary: Option<AnalyticsSummary>,
    rows: Vec<ItemSales>,

    pub search: String,
    pub sort: ItemSalesSort,
    pub ascending: bool,
}

impl AnalyticsView {
    pub fn new(fundraiser_id: Option<i64>) -> Self {
        Self {
            fundraiser_id,
            ascending: true,
            ..Self::default()
        }
    }

    pub fn summary(&self) -> Option<&AnalyticsSummary> {
        self.summary.as_ref()
    }

    /// Headline strings for the summary cards
    pub fn headline(&self) -> Option<(String, String, String)> {
        self.summary.as_ref().map(|s| {
            (
                format_currency(s.total_revenue),
                s.total_orders.to_string(),
                format_currency(s.average_order_value),
            )
        })
    }

    /// Reload from the backend; failure degrades to an empty dashboard
    pub async fn reload(&mut self, client: &HttpClient) {
        match client.wholesale_analytics(self.fundraiser_id).await {
            Ok(AnalyticsReport { summary, item_sales }) => {
                self.summary = Some(summary);
                self.rows = item_sales;
            }
            Err(e) => {
                warn!(fundraiser_id = ?self.fundraiser_id, error = %e, "Analytics fetch failed");
                self.summary = None;
                self.rows.clear();
            }
        }
    }

    /// Visible rows after search and sort
    pub fn rows(&self) -> Vec<&ItemSales> {
        let needle = self.search.trim().to_lowercase();
        let mut rows: Vec<&ItemSales> = self
            .rows
            .iter()
            .filter(|row| needle.is_empty() || row.name.to_lowercase().contains(&needle))
            .collect();

        rows.sort_by(|a, b| {
            let ordering = match self.sort {
                ItemSalesSort::Revenue => a.revenue.cmp(&b.revenue),
                ItemSalesSort::UnitsSold => a.units_sold.cmp(&b.units_sold),
                ItemSalesSort::Name => a.name.cmp(&b.name),
            };
            if self.ascending { ordering } else { ordering.reverse() }
        });
        rows
    }
}
