//! Wholesale item manager state
//!
//! Lists items with server-derived stock status. In scoped mode the
//! fundraiser list and selection are explicit constructor inputs supplied
//! by the caller; the manager never looks them up on its own.

use reef_client::HttpClient;
use shared::models::{Fundraiser, WholesaleItem};
use thiserror::Error;
use tracing::warn;

/// Which items the manager shows
#[derive(Debug, Clone)]
pub enum ItemScope {
    /// Every wholesale item
    All,
    /// Items of one fundraiser, chosen from a caller-supplied list
    Fundraiser {
        fundraisers: Vec<Fundraiser>,
        selected: Option<i64>,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemScopeError {
    #[error("Fundraiser {0} is not in the provided list")]
    UnknownFundraiser(i64),

    #[error("This view is not fundraiser-scoped")]
    NotScoped,
}

/// Item manager state
#[derive(Debug, Clone)]
pub struct ItemManager {
    scope: ItemScope,
    items: Vec<WholesaleItem>,

    pub search: String,
}

impl ItemManager {
    pub fn new(scope: ItemScope) -> Self {
        Self {
            scope,
            items: Vec::new(),
            search: String::new(),
        }
    }

    pub fn scope(&self) -> &ItemScope {
        &self.scope
    }

    /// Currently selected fundraiser, if scoped
    pub fn selected_fundraiser(&self) -> Option<i64> {
        match &self.scope {
            ItemScope::All => None,
            ItemScope::Fundraiser { selected, .. } => *selected,
        }
    }

    /// Switch the scoped fundraiser; only ids from the supplied list count
    pub fn select_fundraiser(&mut self, id: i64) -> Result<(), ItemScopeError> {
        match &mut self.scope {
            ItemScope::All => Err(ItemScopeError::NotScoped),
            ItemScope::Fundraiser { fundraisers, selected } => {
                if fundraisers.iter().any(|f| f.id == id) {
                    *selected = Some(id);
                    Ok(())
                } else {
                    Err(ItemScopeError::UnknownFundraiser(id))
                }
            }
        }
    }

    /// Reload items for the current scope; failure empties the list
    pub async fn reload(&mut self, client: &HttpClient) {
        match client.list_wholesale_items(self.selected_fundraiser()).await {
            Ok(items) => self.items = items,
            Err(e) => {
                warn!(error = %e, "Wholesale item fetch failed");
                self.items.clear();
            }
        }
    }

    /// Visible items after search, name-sorted
    pub fn rows(&self) -> Vec<&WholesaleItem> {
        let needle = self.search.trim().to_lowercase();
        let mut rows: Vec<&WholesaleItem> = self
            .items
            .iter()
            .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        rows
    }

    #[cfg(test)]
    fn with_items(mut self, items: Vec<WholesaleItem>) -> Self {
        self.items = items;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::{ItemOptions, StockStatus};

    fn fundraiser(id: i64) -> Fundraiser {
        Fundraiser {
            id,
            name: format!("Drive {}", id),
            starts_on: "2025-02-01".to_string(),
            ends_on: "2025-03-01".to_string(),
            active: true,
        }
    }

    fn item(name: &str) -> WholesaleItem {
        WholesaleItem {
            id: 1,
            name: name.to_string(),
            price: Decimal::new(1500, 2),
            stock_quantity: 20,
            low_stock_threshold: 5,
            stock_status: StockStatus::InStock,
            options: ItemOptions::default(),
            fundraiser_id: None,
        }
    }

    #[test]
    fn test_scoped_selection_only_from_supplied_list() {
        let mut manager = ItemManager::new(ItemScope::Fundraiser {
            fundraisers: vec![fundraiser(1), fundraiser(2)],
            selected: None,
        });
        assert_eq!(manager.select_fundraiser(2), Ok(()));
        assert_eq!(manager.selected_fundraiser(), Some(2));
        assert_eq!(
            manager.select_fundraiser(9),
            Err(ItemScopeError::UnknownFundraiser(9))
        );
        assert_eq!(manager.selected_fundraiser(), Some(2));
    }

    #[test]
    fn test_unscoped_selection_refused() {
        let mut manager = ItemManager::new(ItemScope::All);
        assert_eq!(manager.select_fundraiser(1), Err(ItemScopeError::NotScoped));
    }

    #[test]
    fn test_rows_search_and_sort() {
        let mut manager = ItemManager::new(ItemScope::All)
            .with_items(vec![item("Tote bag"), item("Cap"), item("Team shirt")]);
        assert_eq!(manager.rows()[0].name, "Cap");

        manager.search = "t".to_string();
        let names: Vec<&str> = manager.rows().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Team shirt", "Tote bag"]);
    }
}
