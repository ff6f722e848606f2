//! Items, drafts and derived statistics

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single inventory record in its canonical client-side form
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    /// ISO-8601 timestamp of the last price change
    pub last_updated_dt: String,
}

/// User input for a new item
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub price: f64,
}

/// Aggregate values derived from an item list
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_items: usize,
    pub total_value: f64,
}

impl Stats {
    /// Derive stats locally: count and sum of prices
    pub fn from_items(items: &[Item]) -> Self {
        Self {
            total_items: items.len(),
            total_value: items.iter().map(|item| item.price).sum(),
        }
    }

    /// Derive stats, preferring a server-supplied total value when present
    pub fn with_server_total(items: &[Item], server_total: Option<f64>) -> Self {
        let local = Self::from_items(items);
        match server_total {
            Some(total) if total.is_finite() => Self {
                total_items: local.total_items,
                total_value: total,
            },
            _ => local,
        }
    }
}

/// Items plus the stats that go with them
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemListing {
    pub items: Vec<Item>,
    pub stats: Stats,
}

impl ItemListing {
    /// Listing with stats derived from the items alone
    pub fn from_items(items: Vec<Item>) -> Self {
        let stats = Stats::from_items(&items);
        Self { items, stats }
    }

    /// The fail-soft result: no items, zeroed stats
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Distinct categories across the given items
///
/// Empty categories are skipped; they come from records the server sent
/// without a category and are not selectable as a filter.
pub fn categories_of(items: &[Item]) -> BTreeSet<String> {
    items
        .iter()
        .filter(|item| !item.category.is_empty())
        .map(|item| item.category.clone())
        .collect()
}
