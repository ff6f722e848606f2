//! Inventory TUI
//!
//! An interactive terminal client for an inventory REST service, built on
//! the store/effect loop from `inventory-dispatch`:
//!
//! 1. Event (keyboard) -> `InventoryUi::map_event` -> actions
//! 2. Actions run through the reducer (inventory store, then workflow)
//! 3. The reducer returns effects; `handle_effect` spawns API tasks
//! 4. Task results come back as `*Did*` actions
//! 5. If state changed, re-render
//!
//! The binary also has non-interactive `list` and `categories` commands.

pub mod action;
pub mod cli;
pub mod components;
pub mod effect;
pub mod logging;
pub mod reducer;
pub mod state;
pub mod ui;

pub use action::Action;
pub use effect::{handle_effect, run_effect, Effect};
pub use reducer::reducer;
pub use state::AppState;
pub use ui::InventoryUi;
