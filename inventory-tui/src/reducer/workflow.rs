//! Root controller
//!
//! Owns everything between a key press and a store operation: the search
//! bar, row selection, the create / edit / delete dialogs and notifications.
//!
//! Each write follows the same state machine:
//!
//! ```text
//! idle -> dialog open -> submitting -> success -> idle (search reset, full refetch)
//!                                   -> failure -> dialog open (error shown)
//! ```
//!
//! A failed delete is the exception: the confirmation closes either way.

use inventory_core::{parse_price, ItemDraft, QueryParams};
use inventory_dispatch::DispatchResult;
use tracing::debug;

use super::inventory;
use super::{CREATE_FAILED, DELETE_FAILED, LOAD_CATEGORIES_FAILED, LOAD_ITEMS_FAILED, UPDATE_FAILED};
use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, CreateForm, DeleteConfirm, Dialog, Focus, Notification, PriceForm};

pub fn reduce(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Lifecycle =====
        Action::AppStarted => {
            if state.ui.started {
                debug!("Already started, ignoring");
                return DispatchResult::unchanged();
            }
            state.ui.started = true;
            inventory::fetch_items(&mut state.inventory, None).merge(inventory::fetch_categories())
        }

        Action::Tick => tick(state),

        // ===== Read results =====
        Action::ItemsDidLoad { token, .. } if state.inventory.is_current(token) => {
            state.clamp_selection();
            DispatchResult::changed()
        }

        Action::ItemsDidError { token, .. } if state.inventory.is_current(token) => {
            notify(state, Notification::error(LOAD_ITEMS_FAILED))
        }

        Action::CategoriesDidError(_) => notify(state, Notification::error(LOAD_CATEGORIES_FAILED)),

        // ===== Write results =====
        Action::ItemDidCreate(item) => {
            if matches!(state.ui.dialog, Some(Dialog::Create(_))) {
                state.ui.dialog = None;
            }
            state.ui.notification = Some(Notification::success(format!("Created {}", item.name)));
            finish_write(state)
        }

        Action::ItemCreateDidError(_) => {
            if let Some(Dialog::Create(form)) = &mut state.ui.dialog {
                form.submitting = false;
                form.error = Some(CREATE_FAILED.to_string());
            }
            notify(state, Notification::error(CREATE_FAILED))
        }

        Action::PriceDidUpdate(item) => {
            if matches!(&state.ui.dialog, Some(Dialog::EditPrice(form)) if form.item.id == item.id) {
                state.ui.dialog = None;
            }
            state.ui.notification = Some(Notification::success("Price updated"));
            finish_write(state)
        }

        Action::PriceUpdateDidError { id, .. } => {
            if let Some(Dialog::EditPrice(form)) = &mut state.ui.dialog {
                if form.item.id == id {
                    form.submitting = false;
                    form.error = Some(UPDATE_FAILED.to_string());
                }
            }
            notify(state, Notification::error(UPDATE_FAILED))
        }

        Action::ItemDidDelete(deleted) => {
            close_delete(state, &deleted.deleted_id);
            state.ui.notification = Some(Notification::success("Item deleted"));
            finish_write(state).merge(inventory::fetch_categories())
        }

        Action::ItemDeleteDidError { id, .. } => {
            close_delete(state, &id);
            notify(state, Notification::error(DELETE_FAILED))
        }

        // ===== Table =====
        Action::SelectionMove(delta) => {
            let len = state.inventory.items.len();
            if len == 0 {
                return DispatchResult::unchanged();
            }
            let last = len as isize - 1;
            let next = (state.ui.selected as isize + delta).clamp(0, last) as usize;
            select(state, next)
        }

        Action::SelectionFirst => select(state, 0),

        Action::SelectionLast => {
            let last = state.inventory.items.len().saturating_sub(1);
            select(state, last)
        }

        Action::SortCycle => {
            state.ui.sort = state.ui.sort.next();
            DispatchResult::changed()
        }

        Action::Refresh => {
            let filter = state.inventory.filter.clone();
            inventory::fetch_items(&mut state.inventory, filter)
        }

        // ===== Search bar =====
        Action::SearchFocus => set_focus(state, Focus::Search),

        Action::SearchBlur => set_focus(state, Focus::Table),

        Action::SearchFieldNext => {
            state.ui.search.field = state.ui.search.field.next();
            DispatchResult::changed()
        }

        Action::SearchCategorySelect(index) => {
            state.ui.search.category = index
                .checked_sub(1)
                .and_then(|i| state.inventory.categories.iter().nth(i))
                .cloned();
            state.ui.search.error = None;
            DispatchResult::changed()
        }

        Action::SearchFromChange(value) => {
            state.ui.search.dt_from = value;
            state.ui.search.error = None;
            DispatchResult::changed()
        }

        Action::SearchToChange(value) => {
            state.ui.search.dt_to = value;
            state.ui.search.error = None;
            DispatchResult::changed()
        }

        Action::SearchSubmit => submit_search(state),

        Action::SearchReset => {
            state.ui.search.reset();
            state.ui.selected = 0;
            inventory::fetch_items(&mut state.inventory, None)
        }

        // ===== Dialogs =====
        Action::CreateOpen => {
            if state.ui.dialog.is_some() {
                return DispatchResult::unchanged();
            }
            state.ui.dialog = Some(Dialog::Create(CreateForm::default()));
            DispatchResult::changed()
        }

        Action::EditOpen => match selected_item(state) {
            Some(item) if state.ui.dialog.is_none() => {
                state.ui.dialog = Some(Dialog::EditPrice(PriceForm::new(item)));
                DispatchResult::changed()
            }
            _ => DispatchResult::unchanged(),
        },

        Action::DeleteOpen => match selected_item(state) {
            Some(item) if state.ui.dialog.is_none() => {
                state.ui.dialog = Some(Dialog::Delete(DeleteConfirm {
                    item,
                    submitting: false,
                }));
                DispatchResult::changed()
            }
            _ => DispatchResult::unchanged(),
        },

        Action::DialogCancel => {
            if state.ui.dialog.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::FormFieldNext => match &mut state.ui.dialog {
            Some(Dialog::Create(form)) => {
                form.field = form.field.next();
                DispatchResult::changed()
            }
            _ => DispatchResult::unchanged(),
        },

        Action::FormNameChange(value) => match &mut state.ui.dialog {
            Some(Dialog::Create(form)) => {
                form.name = value;
                form.error = None;
                DispatchResult::changed()
            }
            _ => DispatchResult::unchanged(),
        },

        Action::FormCategoryChange(value) => match &mut state.ui.dialog {
            Some(Dialog::Create(form)) => {
                form.category = value;
                form.error = None;
                DispatchResult::changed()
            }
            _ => DispatchResult::unchanged(),
        },

        Action::FormPriceChange(value) => match &mut state.ui.dialog {
            Some(Dialog::Create(form)) => {
                form.price = value;
                form.error = None;
                DispatchResult::changed()
            }
            Some(Dialog::EditPrice(form)) => {
                form.price = value;
                form.error = None;
                DispatchResult::changed()
            }
            _ => DispatchResult::unchanged(),
        },

        Action::FormSubmit => submit_form(state),

        Action::DeleteConfirm => match &mut state.ui.dialog {
            Some(Dialog::Delete(confirm)) if !confirm.submitting => {
                confirm.submitting = true;
                inventory::delete_item(confirm.item.id.clone()).merge(DispatchResult::changed())
            }
            _ => DispatchResult::unchanged(),
        },

        Action::NotificationDismiss => {
            if state.ui.notification.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        _ => DispatchResult::unchanged(),
    }
}

fn tick(state: &mut AppState) -> DispatchResult<Effect> {
    let animating = state.needs_tick();
    state.ui.tick = state.ui.tick.wrapping_add(1);

    let expired = match &mut state.ui.notification {
        Some(notification) => {
            notification.ticks_left = notification.ticks_left.saturating_sub(1);
            notification.ticks_left == 0
        }
        None => false,
    };
    if expired {
        state.ui.notification = None;
    }

    if animating {
        DispatchResult::changed()
    } else {
        DispatchResult::unchanged()
    }
}

fn selected_item(state: &AppState) -> Option<inventory_core::Item> {
    state.selected_item().cloned()
}

fn notify(state: &mut AppState, notification: Notification) -> DispatchResult<Effect> {
    state.ui.notification = Some(notification);
    DispatchResult::changed()
}

fn select(state: &mut AppState, index: usize) -> DispatchResult<Effect> {
    if state.ui.selected == index {
        return DispatchResult::unchanged();
    }
    state.ui.selected = index;
    DispatchResult::changed()
}

fn set_focus(state: &mut AppState, focus: Focus) -> DispatchResult<Effect> {
    if state.ui.focus == focus {
        return DispatchResult::unchanged();
    }
    state.ui.focus = focus;
    DispatchResult::changed()
}

/// After a successful write: clear the search and reload everything
fn finish_write(state: &mut AppState) -> DispatchResult<Effect> {
    state.ui.search.reset();
    inventory::fetch_items(&mut state.inventory, None)
}

/// The delete candidate is dropped whatever the outcome
fn close_delete(state: &mut AppState, id: &str) {
    if matches!(&state.ui.dialog, Some(Dialog::Delete(confirm)) if confirm.item.id == id) {
        state.ui.dialog = None;
    }
}

fn submit_search(state: &mut AppState) -> DispatchResult<Effect> {
    let search = &state.ui.search;
    match QueryParams::from_search(search.category.as_deref(), &search.dt_from, &search.dt_to) {
        Ok(params) => {
            state.ui.search.error = None;
            state.ui.selected = 0;
            let filter = (!params.is_empty()).then_some(params);
            inventory::fetch_items(&mut state.inventory, filter)
        }
        Err(e) => {
            debug!(error = %e, "Search rejected");
            state.ui.search.error = Some(e.to_string());
            DispatchResult::changed()
        }
    }
}

fn submit_form(state: &mut AppState) -> DispatchResult<Effect> {
    match &mut state.ui.dialog {
        Some(Dialog::Create(form)) if !form.submitting => {
            match ItemDraft::parse(&form.name, &form.category, &form.price) {
                Ok(draft) => {
                    form.submitting = true;
                    form.error = None;
                    inventory::create_item(&mut state.inventory, draft)
                }
                Err(e) => {
                    form.error = Some(e.to_string());
                    DispatchResult::changed()
                }
            }
        }
        Some(Dialog::EditPrice(form)) if !form.submitting => match parse_price(&form.price) {
            Ok(price) => {
                form.submitting = true;
                form.error = None;
                inventory::update_item_price(form.item.id.clone(), price)
                    .merge(DispatchResult::changed())
            }
            Err(e) => {
                form.error = Some(e.to_string());
                DispatchResult::changed()
            }
        },
        _ => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::reducer;
    use crate::state::{NotificationKind, SearchField, NOTIFICATION_TICKS};
    use inventory_client::Deleted;
    use inventory_core::{Item, ItemListing};

    fn item(id: &str, name: &str, price: f64) -> Item {
        Item {
            id: id.into(),
            name: name.into(),
            category: "Tools".into(),
            price,
            last_updated_dt: "2025-01-01T00:00:00+08:00".into(),
        }
    }

    /// A started app showing the given items
    fn started(items: Vec<Item>) -> AppState {
        let mut state = AppState::default();
        reducer(&mut state, Action::AppStarted);
        let token = state.inventory.fetch_token;
        reducer(
            &mut state,
            Action::ItemsDidLoad {
                token,
                listing: ItemListing::from_items(items),
            },
        );
        state
    }

    fn fetch_filter(effects: &[Effect]) -> Option<Option<QueryParams>> {
        effects.iter().find_map(|effect| match effect {
            Effect::FetchItems { filter, .. } => Some(filter.clone()),
            _ => None,
        })
    }

    #[test]
    fn test_app_started_fetches_once() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::AppStarted);
        assert_eq!(
            result.effects,
            vec![
                Effect::FetchItems {
                    token: 1,
                    filter: None
                },
                Effect::FetchCategories
            ]
        );

        let result = reducer(&mut state, Action::AppStarted);
        assert!(!result.changed);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_search_with_only_end_bound() {
        let mut state = started(vec![]);
        reducer(&mut state, Action::SearchToChange("2025-02-01 00:00:00".into()));

        let result = reducer(&mut state, Action::SearchSubmit);

        let filter = fetch_filter(&result.effects).flatten().expect("filtered fetch");
        assert_eq!(filter.dt_from, None);
        assert_eq!(filter.dt_to.as_deref(), Some("2025-02-01 00:00:00"));
        assert_eq!(filter.category, None);
    }

    #[test]
    fn test_search_with_no_input_is_unfiltered() {
        let mut state = started(vec![]);

        let result = reducer(&mut state, Action::SearchSubmit);

        assert_eq!(fetch_filter(&result.effects), Some(None));
    }

    #[test]
    fn test_invalid_date_blocks_search() {
        let mut state = started(vec![]);
        let token = state.inventory.fetch_token;
        reducer(&mut state, Action::SearchFromChange("yesterday".into()));

        let result = reducer(&mut state, Action::SearchSubmit);

        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(state.inventory.fetch_token, token);
        assert!(state.ui.search.error.is_some());
    }

    #[test]
    fn test_category_select_maps_index_to_name() {
        let mut state = started(vec![]);
        reducer(
            &mut state,
            Action::CategoriesDidLoad(["Safety", "Tools"].into_iter().map(String::from).collect()),
        );

        reducer(&mut state, Action::SearchCategorySelect(2));
        assert_eq!(state.ui.search.category.as_deref(), Some("Tools"));

        let result = reducer(&mut state, Action::SearchSubmit);
        let filter = fetch_filter(&result.effects).flatten().expect("filtered fetch");
        assert_eq!(filter.category.as_deref(), Some("Tools"));

        reducer(&mut state, Action::SearchCategorySelect(0));
        assert_eq!(state.ui.search.category, None);
    }

    #[test]
    fn test_search_field_cycles() {
        let mut state = started(vec![]);
        reducer(&mut state, Action::SearchFieldNext);
        assert_eq!(state.ui.search.field, SearchField::From);
    }

    #[test]
    fn test_create_workflow_success() {
        let mut state = started(vec![item("a", "Anvil", 50.0)]);
        reducer(&mut state, Action::SearchToChange("2025-02-01".into()));

        reducer(&mut state, Action::CreateOpen);
        reducer(&mut state, Action::FormNameChange("Widget".into()));
        reducer(&mut state, Action::FormCategoryChange("Tools".into()));
        reducer(&mut state, Action::FormPriceChange("9.99".into()));
        let result = reducer(&mut state, Action::FormSubmit);

        assert_eq!(
            result.effects,
            vec![Effect::CreateItem(ItemDraft {
                name: "Widget".into(),
                category: "Tools".into(),
                price: 9.99,
            })]
        );
        assert!(matches!(&state.ui.dialog, Some(Dialog::Create(form)) if form.submitting));

        let result = reducer(&mut state, Action::ItemDidCreate(item("new", "Widget", 9.99)));

        assert!(state.ui.dialog.is_none());
        assert_eq!(state.ui.search.dt_to, "");
        assert_eq!(fetch_filter(&result.effects), Some(None));
        assert!(result.effects.contains(&Effect::FetchCategories));
        assert_eq!(
            state.ui.notification.as_ref().map(|n| n.kind),
            Some(NotificationKind::Success)
        );
    }

    #[test]
    fn test_create_validation_error_keeps_dialog() {
        let mut state = started(vec![]);
        reducer(&mut state, Action::CreateOpen);
        reducer(&mut state, Action::FormNameChange("Widget".into()));

        let result = reducer(&mut state, Action::FormSubmit);

        assert!(result.effects.is_empty());
        match &state.ui.dialog {
            Some(Dialog::Create(form)) => {
                assert_eq!(form.error.as_deref(), Some("Please enter category"));
                assert!(!form.submitting);
            }
            other => panic!("unexpected dialog: {other:?}"),
        }
    }

    #[test]
    fn test_create_failure_reopens_form() {
        let mut state = started(vec![]);
        reducer(&mut state, Action::CreateOpen);
        reducer(&mut state, Action::FormNameChange("Widget".into()));
        reducer(&mut state, Action::FormCategoryChange("Tools".into()));
        reducer(&mut state, Action::FormPriceChange("9.99".into()));
        reducer(&mut state, Action::FormSubmit);

        let result = reducer(&mut state, Action::ItemCreateDidError("500".into()));

        assert!(result.effects.is_empty());
        match &state.ui.dialog {
            Some(Dialog::Create(form)) => {
                assert!(!form.submitting);
                assert_eq!(form.error.as_deref(), Some(CREATE_FAILED));
                assert_eq!(form.name, "Widget");
            }
            other => panic!("unexpected dialog: {other:?}"),
        }
        assert_eq!(
            state.ui.notification.as_ref().map(|n| n.message.as_str()),
            Some(CREATE_FAILED)
        );
    }

    #[test]
    fn test_failed_create_during_refresh_keeps_spinner() {
        let mut state = started(vec![]);
        reducer(&mut state, Action::Refresh);
        reducer(&mut state, Action::CreateOpen);
        reducer(&mut state, Action::FormNameChange("Widget".into()));
        reducer(&mut state, Action::FormCategoryChange("Tools".into()));
        reducer(&mut state, Action::FormPriceChange("9.99".into()));
        reducer(&mut state, Action::FormSubmit);

        reducer(&mut state, Action::ItemCreateDidError("500".into()));
        assert!(state.inventory.loading());
        assert!(state.needs_tick());

        let token = state.inventory.fetch_token;
        reducer(
            &mut state,
            Action::ItemsDidLoad {
                token,
                listing: ItemListing::from_items(vec![]),
            },
        );
        assert!(!state.inventory.loading());
    }

    #[test]
    fn test_edit_prefills_and_rejects_zero() {
        let mut state = started(vec![item("a", "Anvil", 50.0)]);
        reducer(&mut state, Action::EditOpen);

        match &state.ui.dialog {
            Some(Dialog::EditPrice(form)) => assert_eq!(form.price, "50.00"),
            other => panic!("unexpected dialog: {other:?}"),
        }

        reducer(&mut state, Action::FormPriceChange("0".into()));
        let result = reducer(&mut state, Action::FormSubmit);
        assert!(result.effects.is_empty());

        reducer(&mut state, Action::FormPriceChange("0.01".into()));
        let result = reducer(&mut state, Action::FormSubmit);
        assert_eq!(
            result.effects,
            vec![Effect::UpdatePrice {
                id: "a".into(),
                price: 0.01
            }]
        );
    }

    #[test]
    fn test_edit_success_closes_and_refetches() {
        let mut state = started(vec![item("a", "Anvil", 50.0)]);
        reducer(&mut state, Action::EditOpen);
        reducer(&mut state, Action::FormPriceChange("60".into()));
        reducer(&mut state, Action::FormSubmit);

        let result = reducer(&mut state, Action::PriceDidUpdate(item("a", "Anvil", 60.0)));

        assert!(state.ui.dialog.is_none());
        assert_eq!(state.inventory.items[0].price, 60.0);
        assert_eq!(fetch_filter(&result.effects), Some(None));
    }

    #[test]
    fn test_edit_failure_keeps_dialog_open() {
        let mut state = started(vec![item("a", "Anvil", 50.0)]);
        reducer(&mut state, Action::EditOpen);
        reducer(&mut state, Action::FormSubmit);

        reducer(
            &mut state,
            Action::PriceUpdateDidError {
                id: "a".into(),
                error: "timeout".into(),
            },
        );

        assert!(matches!(
            &state.ui.dialog,
            Some(Dialog::EditPrice(form)) if !form.submitting && form.error.as_deref() == Some(UPDATE_FAILED)
        ));
    }

    #[test]
    fn test_edit_without_items_does_nothing() {
        let mut state = started(vec![]);
        let result = reducer(&mut state, Action::EditOpen);
        assert!(!result.changed);
        assert!(state.ui.dialog.is_none());
    }

    #[test]
    fn test_delete_success_clears_candidate_and_refetches() {
        let mut state = started(vec![item("abc", "Anvil", 50.0)]);
        reducer(&mut state, Action::DeleteOpen);
        let result = reducer(&mut state, Action::DeleteConfirm);
        assert_eq!(result.effects, vec![Effect::DeleteItem { id: "abc".into() }]);

        let result = reducer(
            &mut state,
            Action::ItemDidDelete(Deleted {
                status: "success".into(),
                deleted_id: "abc".into(),
            }),
        );

        assert!(state.ui.dialog.is_none());
        assert_eq!(fetch_filter(&result.effects), Some(None));
    }

    #[test]
    fn test_delete_failure_also_clears_candidate() {
        let mut state = started(vec![item("abc", "Anvil", 50.0)]);
        reducer(&mut state, Action::DeleteOpen);
        reducer(&mut state, Action::DeleteConfirm);

        let result = reducer(
            &mut state,
            Action::ItemDeleteDidError {
                id: "abc".into(),
                error: "404".into(),
            },
        );

        assert!(state.ui.dialog.is_none());
        assert!(result.effects.is_empty());
        assert_eq!(state.inventory.items.len(), 1);
        assert_eq!(
            state.ui.notification.as_ref().map(|n| n.message.as_str()),
            Some(DELETE_FAILED)
        );
    }

    #[test]
    fn test_double_confirm_sends_one_delete() {
        let mut state = started(vec![item("abc", "Anvil", 50.0)]);
        reducer(&mut state, Action::DeleteOpen);
        reducer(&mut state, Action::DeleteConfirm);

        let result = reducer(&mut state, Action::DeleteConfirm);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_stale_error_does_not_notify() {
        let mut state = started(vec![]);
        reducer(&mut state, Action::Refresh);
        reducer(&mut state, Action::Refresh);

        reducer(
            &mut state,
            Action::ItemsDidError {
                token: 2,
                error: "slow".into(),
            },
        );
        assert!(state.ui.notification.is_none());

        let token = state.inventory.fetch_token;
        reducer(
            &mut state,
            Action::ItemsDidError {
                token,
                error: "down".into(),
            },
        );
        assert_eq!(
            state.ui.notification.as_ref().map(|n| n.message.as_str()),
            Some(LOAD_ITEMS_FAILED)
        );
    }

    #[test]
    fn test_refresh_reuses_current_filter() {
        let mut state = started(vec![]);
        reducer(&mut state, Action::SearchFromChange("2025-01-01".into()));
        reducer(&mut state, Action::SearchSubmit);

        let result = reducer(&mut state, Action::Refresh);

        let filter = fetch_filter(&result.effects).flatten().expect("filtered fetch");
        assert_eq!(filter.dt_from.as_deref(), Some("2025-01-01 00:00:00"));
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut state = started(vec![item("a", "A", 1.0), item("b", "B", 2.0)]);

        reducer(&mut state, Action::SelectionMove(5));
        assert_eq!(state.ui.selected, 1);

        reducer(&mut state, Action::SelectionMove(-9));
        assert_eq!(state.ui.selected, 0);

        let result = reducer(&mut state, Action::SelectionMove(-1));
        assert!(!result.changed);
    }

    #[test]
    fn test_selection_clamped_after_shorter_listing() {
        let mut state = started(vec![item("a", "A", 1.0), item("b", "B", 2.0)]);
        reducer(&mut state, Action::SelectionLast);

        reducer(&mut state, Action::Refresh);
        let token = state.inventory.fetch_token;
        reducer(
            &mut state,
            Action::ItemsDidLoad {
                token,
                listing: ItemListing::from_items(vec![item("a", "A", 1.0)]),
            },
        );

        assert_eq!(state.ui.selected, 0);
    }

    #[test]
    fn test_notification_expires() {
        let mut state = started(vec![]);
        state.ui.notification = Some(Notification::error("x"));

        for _ in 0..NOTIFICATION_TICKS {
            reducer(&mut state, Action::Tick);
        }

        assert!(state.ui.notification.is_none());
    }

    #[test]
    fn test_tick_only_rerenders_when_animating() {
        let mut state = started(vec![]);
        assert!(!state.inventory.loading());
        assert!(!reducer(&mut state, Action::Tick).changed);

        state.inventory.fetch_pending = true;
        assert!(reducer(&mut state, Action::Tick).changed);
    }

    #[test]
    fn test_cancel_closes_dialog() {
        let mut state = started(vec![]);
        reducer(&mut state, Action::CreateOpen);

        assert!(reducer(&mut state, Action::DialogCancel).changed);
        assert!(state.ui.dialog.is_none());
        assert!(!reducer(&mut state, Action::DialogCancel).changed);
    }
}
