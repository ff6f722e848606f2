//! Inventory store: items, stats and categories mirrored from the service
//!
//! The workflow controller starts requests through the operation functions
//! (`fetch_items`, `create_item`, ...); [`reduce`] applies their results.
//! Failures leave the data as it was; the controller turns them into
//! notifications.

use inventory_core::{Item, ItemDraft, QueryParams};
use inventory_dispatch::DispatchResult;
use tracing::debug;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::InventoryState;

/// Start an item fetch; any earlier fetch still in flight becomes stale
pub fn fetch_items(state: &mut InventoryState, filter: Option<QueryParams>) -> DispatchResult<Effect> {
    state.fetch_pending = true;
    state.fetch_token += 1;
    state.filter.clone_from(&filter);
    DispatchResult::changed_with(Effect::FetchItems {
        token: state.fetch_token,
        filter,
    })
}

pub fn fetch_categories() -> DispatchResult<Effect> {
    DispatchResult::effect(Effect::FetchCategories)
}

pub fn create_item(state: &mut InventoryState, draft: ItemDraft) -> DispatchResult<Effect> {
    state.create_pending = true;
    DispatchResult::changed_with(Effect::CreateItem(draft))
}

pub fn update_item_price(id: String, price: f64) -> DispatchResult<Effect> {
    DispatchResult::effect(Effect::UpdatePrice { id, price })
}

/// Request a delete; the list is refreshed afterwards instead of spliced
pub fn delete_item(id: String) -> DispatchResult<Effect> {
    DispatchResult::effect(Effect::DeleteItem { id })
}

/// Replace an item by id, keeping name and category the response left out
fn merge_updated(state: &mut InventoryState, mut updated: Item) -> bool {
    let Some(existing) = state.items.iter_mut().find(|item| item.id == updated.id) else {
        debug!(id = %updated.id, "Updated item is not in the current list");
        return false;
    };
    if updated.name.is_empty() {
        updated.name.clone_from(&existing.name);
    }
    if updated.category.is_empty() {
        updated.category.clone_from(&existing.category);
    }
    state.stats.total_value += updated.price - existing.price;
    *existing = updated;
    true
}

pub fn reduce(state: &mut InventoryState, action: &Action) -> DispatchResult<Effect> {
    match action {
        Action::ItemsDidLoad { token, listing } => {
            if !state.is_current(*token) {
                debug!(token, current = state.fetch_token, "Dropping stale item listing");
                return DispatchResult::unchanged();
            }
            state.items.clone_from(&listing.items);
            state.stats = listing.stats;
            state.fetch_pending = false;
            state.load_failed = false;
            DispatchResult::changed()
        }

        Action::ItemsDidError { token, .. } => {
            if !state.is_current(*token) {
                debug!(token, current = state.fetch_token, "Dropping stale item error");
                return DispatchResult::unchanged();
            }
            state.fetch_pending = false;
            state.load_failed = true;
            DispatchResult::changed()
        }

        Action::CategoriesDidLoad(categories) => {
            state.categories.clone_from(categories);
            DispatchResult::changed()
        }

        Action::ItemDidCreate(item) => {
            state.items.push(item.clone());
            state.stats.total_items += 1;
            state.stats.total_value += item.price;
            state.create_pending = false;
            DispatchResult::changed_with(Effect::FetchCategories)
        }

        Action::ItemCreateDidError(_) => {
            state.create_pending = false;
            DispatchResult::changed()
        }

        Action::PriceDidUpdate(item) => {
            if merge_updated(state, item.clone()) {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        _ => DispatchResult::unchanged(),
    }
}
