//! Application state, the single source of truth
//!
//! Components receive `&AppState` (or pieces of it) as props. Only the
//! reducer mutates it.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use inventory_core::{Item, QueryParams, Stats};

/// Interval between ticks (spinner frames, notification expiry)
pub const TICK_RATE_MS: u64 = 100;

/// How long a notification stays on screen, in ticks
pub const NOTIFICATION_TICKS: u32 = 40;

/// Label of the "no category filter" choice
pub const ALL_CATEGORIES: &str = "All categories";

/// Everything the UI needs to render
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub inventory: InventoryState,
    pub ui: UiState,
}

/// Data mirrored from the inventory service
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InventoryState {
    pub items: Vec<Item>,
    pub stats: Stats,
    pub categories: BTreeSet<String>,
    /// An item fetch is in flight; cleared only by the newest fetch's result
    pub fetch_pending: bool,
    /// A create is in flight
    pub create_pending: bool,
    /// Filter used by the most recent item fetch
    pub filter: Option<QueryParams>,
    /// Token of the most recent item fetch; responses with an older one are dropped
    pub fetch_token: u64,
    /// The most recent item fetch failed; `items` is from an earlier one
    pub load_failed: bool,
}

impl InventoryState {
    /// Whether a fetch result belongs to the newest request
    pub fn is_current(&self, token: u64) -> bool {
        token == self.fetch_token
    }

    /// A request that affects the item list is in flight
    pub fn loading(&self) -> bool {
        self.fetch_pending || self.create_pending
    }

    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// Which part of the main screen receives keys
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Table,
    Search,
}

/// Table sort order, cycled with `s`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Server order
    #[default]
    Unsorted,
    Name,
    Category,
    Price,
}

impl SortKey {
    pub fn next(self) -> Self {
        match self {
            SortKey::Unsorted => SortKey::Name,
            SortKey::Name => SortKey::Category,
            SortKey::Category => SortKey::Price,
            SortKey::Price => SortKey::Unsorted,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Unsorted => "none",
            SortKey::Name => "name",
            SortKey::Category => "category",
            SortKey::Price => "price",
        }
    }

    fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            SortKey::Unsorted => Ordering::Equal,
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
            SortKey::Price => a.price.total_cmp(&b.price),
        }
    }
}

/// Search bar field order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchField {
    #[default]
    Category,
    From,
    To,
}

impl SearchField {
    pub fn next(self) -> Self {
        match self {
            SearchField::Category => SearchField::From,
            SearchField::From => SearchField::To,
            SearchField::To => SearchField::Category,
        }
    }
}

/// Raw search bar input
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchForm {
    pub field: SearchField,
    /// `None` is "all categories"
    pub category: Option<String>,
    pub dt_from: String,
    pub dt_to: String,
    /// Validation message from the last submit
    pub error: Option<String>,
}

impl SearchForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Create form field order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CreateField {
    #[default]
    Name,
    Category,
    Price,
}

impl CreateField {
    pub fn next(self) -> Self {
        match self {
            CreateField::Name => CreateField::Category,
            CreateField::Category => CreateField::Price,
            CreateField::Price => CreateField::Name,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub field: CreateField,
    pub error: Option<String>,
    pub submitting: bool,
}

/// Price edit for one item; name and category are shown read-only
#[derive(Clone, Debug, PartialEq)]
pub struct PriceForm {
    pub item: Item,
    pub price: String,
    pub error: Option<String>,
    pub submitting: bool,
}

impl PriceForm {
    /// Pre-filled with the item's current price
    pub fn new(item: Item) -> Self {
        let price = format!("{:.2}", item.price);
        Self {
            item,
            price,
            error: None,
            submitting: false,
        }
    }
}

/// The delete candidate awaiting confirmation
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteConfirm {
    pub item: Item,
    pub submitting: bool,
}

/// At most one dialog is open at a time
#[derive(Clone, Debug, PartialEq)]
pub enum Dialog {
    Create(CreateForm),
    EditPrice(PriceForm),
    Delete(DeleteConfirm),
}

impl Dialog {
    pub fn is_submitting(&self) -> bool {
        match self {
            Dialog::Create(form) => form.submitting,
            Dialog::EditPrice(form) => form.submitting,
            Dialog::Delete(confirm) => confirm.submitting,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message, dismissed automatically after a few seconds
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub ticks_left: u32,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            ticks_left: NOTIFICATION_TICKS,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            ticks_left: NOTIFICATION_TICKS,
        }
    }
}

/// View state owned by the controller
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    /// Initial fetches have been issued
    pub started: bool,
    pub focus: Focus,
    /// Row index into the sorted view
    pub selected: usize,
    pub sort: SortKey,
    pub search: SearchForm,
    pub dialog: Option<Dialog>,
    pub notification: Option<Notification>,
    /// Animation frame counter
    pub tick: u32,
}

impl AppState {
    /// Items in display order
    pub fn visible_items(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.inventory.items.iter().collect();
        let sort = self.ui.sort;
        if sort != SortKey::Unsorted {
            items.sort_by(|a, b| sort.compare(a, b));
        }
        items
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.visible_items().get(self.ui.selected).copied()
    }

    /// Category choices for the search bar, "all" first
    pub fn category_options(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(self.inventory.categories.iter().cloned())
            .collect()
    }

    /// Index of the chosen category in [`Self::category_options`]
    ///
    /// A category that disappeared from the set falls back to "all".
    pub fn category_index(&self) -> usize {
        self.ui
            .search
            .category
            .as_ref()
            .and_then(|chosen| self.inventory.categories.iter().position(|c| c == chosen))
            .map_or(0, |i| i + 1)
    }

    /// Keep the selection inside the item list
    pub fn clamp_selection(&mut self) {
        let len = self.inventory.items.len();
        self.ui.selected = self.ui.selected.min(len.saturating_sub(1));
    }

    /// Whether ticks currently animate anything
    pub fn needs_tick(&self) -> bool {
        self.inventory.loading()
            || self.ui.notification.is_some()
            || self.ui.dialog.as_ref().is_some_and(Dialog::is_submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, category: &str, price: f64) -> Item {
        Item {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            last_updated_dt: "2025-01-01T00:00:00+08:00".into(),
        }
    }

    fn state() -> AppState {
        let mut state = AppState::default();
        state.inventory.items = vec![
            item("1", "wrench", "Tools", 12.0),
            item("2", "Anchor", "Marine", 80.0),
            item("3", "bolt", "Fasteners", 0.5),
        ];
        state.inventory.categories = ["Fasteners", "Marine", "Tools"]
            .into_iter()
            .map(String::from)
            .collect();
        state
    }

    #[test]
    fn test_sort_cycle() {
        assert_eq!(SortKey::Unsorted.next(), SortKey::Name);
        assert_eq!(SortKey::Price.next(), SortKey::Unsorted);
    }

    #[test]
    fn test_visible_items_sorted() {
        let mut state = state();
        let ids = |s: &AppState| s.visible_items().iter().map(|i| i.id.clone()).collect::<Vec<_>>();

        assert_eq!(ids(&state), ["1", "2", "3"]);

        state.ui.sort = SortKey::Name;
        assert_eq!(ids(&state), ["2", "3", "1"]);

        state.ui.sort = SortKey::Price;
        assert_eq!(ids(&state), ["3", "1", "2"]);
    }

    #[test]
    fn test_selected_item_follows_sort() {
        let mut state = state();
        state.ui.sort = SortKey::Name;
        state.ui.selected = 0;
        assert_eq!(state.selected_item().map(|i| i.id.as_str()), Some("2"));
    }

    #[test]
    fn test_category_index() {
        let mut state = state();
        assert_eq!(state.category_index(), 0);

        state.ui.search.category = Some("Marine".into());
        assert_eq!(state.category_index(), 2);
        assert_eq!(state.category_options()[2], "Marine");

        state.ui.search.category = Some("Gone".into());
        assert_eq!(state.category_index(), 0);
    }

    #[test]
    fn test_clamp_selection() {
        let mut state = state();
        state.ui.selected = 10;
        state.clamp_selection();
        assert_eq!(state.ui.selected, 2);

        state.inventory.items.clear();
        state.clamp_selection();
        assert_eq!(state.ui.selected, 0);
    }

    #[test]
    fn test_price_form_prefilled() {
        let form = PriceForm::new(item("1", "wrench", "Tools", 12.5));
        assert_eq!(form.price, "12.50");
    }
}
