//! Effects declared by the reducer and carried out as async tasks
//!
//! The reducer never touches the network. It returns an [`Effect`];
//! [`handle_effect`] spawns a keyed task that runs it against the
//! [`InventoryApi`] and sends the outcome back as an [`Action`].

use std::sync::Arc;

use inventory_client::InventoryApi;
use inventory_core::{ItemDraft, QueryParams};
use inventory_dispatch::{EffectContext, TaskKey};
use tracing::{error, info, warn};

use crate::action::Action;

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// List items; `token` identifies the request so stale responses can be dropped
    FetchItems {
        token: u64,
        filter: Option<QueryParams>,
    },
    FetchCategories,
    CreateItem(ItemDraft),
    UpdatePrice {
        id: String,
        price: f64,
    },
    DeleteItem {
        id: String,
    },
}

impl Effect {
    /// Task key; a new task with the same key replaces a running one
    ///
    /// Fetches share one key each so the newest replaces the previous. Writes
    /// are keyed per item and never collide with reads.
    pub fn task_key(&self) -> TaskKey {
        match self {
            Effect::FetchItems { .. } => TaskKey::new("items"),
            Effect::FetchCategories => TaskKey::new("categories"),
            Effect::CreateItem(_) => TaskKey::new("create"),
            Effect::UpdatePrice { id, .. } => TaskKey::from(format!("update:{id}")),
            Effect::DeleteItem { id } => TaskKey::from(format!("delete:{id}")),
        }
    }
}

/// Run one effect to completion and turn its outcome into an action
pub async fn run_effect(api: &dyn InventoryApi, effect: Effect) -> Action {
    match effect {
        Effect::FetchItems { token, filter } => {
            info!(token, ?filter, "Fetching items");
            match api.try_list_items(filter.as_ref()).await {
                Ok(listing) => Action::ItemsDidLoad { token, listing },
                Err(e) => {
                    warn!(token, error = %e, "Fetching items failed");
                    Action::ItemsDidError {
                        token,
                        error: e.to_string(),
                    }
                }
            }
        }
        Effect::FetchCategories => match api.try_list_categories().await {
            Ok(categories) => Action::CategoriesDidLoad(categories),
            Err(e) => {
                warn!(error = %e, "Fetching categories failed");
                Action::CategoriesDidError(e.to_string())
            }
        },
        Effect::CreateItem(draft) => {
            info!(name = %draft.name, category = %draft.category, price = draft.price, "Creating item");
            match api.create_item(&draft).await {
                Ok(item) => Action::ItemDidCreate(item),
                Err(e) => {
                    error!(error = %e, "Creating item failed");
                    Action::ItemCreateDidError(e.to_string())
                }
            }
        }
        Effect::UpdatePrice { id, price } => {
            info!(%id, price, "Updating price");
            match api.update_item_price(&id, price).await {
                Ok(item) => Action::PriceDidUpdate(item),
                Err(e) => {
                    error!(%id, error = %e, "Updating price failed");
                    Action::PriceUpdateDidError {
                        id,
                        error: e.to_string(),
                    }
                }
            }
        }
        Effect::DeleteItem { id } => {
            info!(%id, "Deleting item");
            match api.delete_item(&id).await {
                Ok(deleted) => Action::ItemDidDelete(deleted),
                Err(e) => {
                    error!(%id, error = %e, "Deleting item failed");
                    Action::ItemDeleteDidError {
                        id,
                        error: e.to_string(),
                    }
                }
            }
        }
    }
}

/// Spawn a task for the effect
pub fn handle_effect(api: &Arc<dyn InventoryApi>, effect: Effect, ctx: &mut EffectContext<Action>) {
    let api = Arc::clone(api);
    let key = effect.task_key();
    ctx.tasks()
        .spawn(key, async move { run_effect(api.as_ref(), effect).await });
}
