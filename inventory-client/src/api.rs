//! The inventory service contract

use std::collections::BTreeSet;

use async_trait::async_trait;
use inventory_core::{categories_of, Item, ItemDraft, ItemListing, QueryParams};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ApiResult;

/// Outcome of a successful delete
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    pub status: String,
    pub deleted_id: String,
}

/// Operations the UI performs against the inventory service
///
/// Implementors provide the fallible operations; the fail-soft read
/// variants are derived from them.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// List items, optionally filtered, surfacing any failure
    async fn try_list_items(&self, filter: Option<&QueryParams>) -> ApiResult<ItemListing>;

    /// Create an item from a validated draft
    async fn create_item(&self, draft: &ItemDraft) -> ApiResult<Item>;

    /// Set an item's price; the server also bumps its timestamp
    async fn update_item_price(&self, id: &str, price: f64) -> ApiResult<Item>;

    async fn delete_item(&self, id: &str) -> ApiResult<Deleted>;

    /// Distinct categories across a full, unfiltered listing
    async fn try_list_categories(&self) -> ApiResult<BTreeSet<String>> {
        let listing = self.try_list_items(None).await?;
        Ok(categories_of(&listing.items))
    }

    /// Fail-soft listing: an empty inventory with zeroed stats on failure
    async fn list_items(&self, filter: Option<&QueryParams>) -> ItemListing {
        match self.try_list_items(filter).await {
            Ok(listing) => listing,
            Err(e) => {
                warn!(error = %e, "Listing items failed, using empty inventory");
                ItemListing::empty()
            }
        }
    }

    /// Fail-soft category listing: empty on failure
    async fn list_categories(&self) -> BTreeSet<String> {
        match self.try_list_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                warn!(error = %e, "Listing categories failed, using no categories");
                BTreeSet::new()
            }
        }
    }
}
