//! Centralized state management for the inventory TUI
//!
//! A small Redux/Elm-style core:
//!
//! - **Action**: a value describing something that happened
//! - **Store**: owns the state and runs a reducer for each action
//! - **Effects**: reducers return declarative side effects alongside the
//!   change flag; the runtime hands them to an effect handler
//! - **TaskManager**: keyed async tasks whose results come back as actions
//! - **Component**: pure render + event-mapping units driven by props
//!
//! # Async handler pattern
//!
//! Async work uses two-phase actions. An *intent* (`Refresh`) makes the
//! reducer emit an effect; the effect handler spawns a task; the task's
//! outcome returns as a *result* action (`ItemsDidLoad`, `ItemsDidError`).
//!
//! ```ignore
//! fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
//!     match action {
//!         Action::Refresh => {
//!             state.loading = true;
//!             DispatchResult::changed_with(Effect::FetchItems)
//!         }
//!         Action::ItemsDidLoad(items) => {
//!             state.loading = false;
//!             state.items = items;
//!             DispatchResult::changed()
//!         }
//!         _ => DispatchResult::unchanged(),
//!     }
//! }
//! ```

pub mod action;
pub mod component;
pub mod event;
pub mod runtime;
pub mod store;
pub mod tasks;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
pub use runtime::{EffectContext, EffectRuntime, EventOutcome};
pub use store::{
    DispatchResult, EffectReducer, Middleware, NoopMiddleware, Store, StoreWithMiddleware,
    TracingMiddleware,
};
pub use tasks::{TaskKey, TaskManager};
