//! Reducers
//!
//! The app reducer is two parts run in order for every action:
//!
//! - [`inventory`]: the data store (items, stats, categories, fetch tokens)
//! - [`workflow`]: the controller (dialogs, search, selection, notifications)
//!
//! The store sees each action first, so by the time the controller reacts
//! to a result such as `ItemDidCreate` the data is already updated.

pub mod inventory;
pub mod workflow;

use inventory_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

pub const LOAD_ITEMS_FAILED: &str = "Failed to load items. Please try again.";
pub const LOAD_CATEGORIES_FAILED: &str = "Failed to load categories.";
pub const CREATE_FAILED: &str = "Failed to create item.";
pub const UPDATE_FAILED: &str = "Failed to update price.";
pub const DELETE_FAILED: &str = "Failed to delete item.";

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    let store = inventory::reduce(&mut state.inventory, &action);
    store.merge(workflow::reduce(state, action))
}
