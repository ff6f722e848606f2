//! Actions
//!
//! Naming follows the intent/result convention: `SearchSubmit` or `FormSubmit`
//! is an intent that makes the reducer emit an effect, `ItemsDidLoad` /
//! `ItemsDidError` are the results that come back from the spawned task.

use std::collections::BTreeSet;

use inventory_client::Deleted;
use inventory_core::{Item, ItemListing};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Lifecycle =====
    /// First action after the runtime starts; loads items and categories
    AppStarted,
    /// Periodic tick for the spinner and notification expiry
    Tick,
    Quit,

    // ===== Inventory results =====
    ItemsDidLoad { token: u64, listing: ItemListing },
    ItemsDidError { token: u64, error: String },

    CategoriesDidLoad(BTreeSet<String>),
    CategoriesDidError(String),

    ItemDidCreate(Item),
    ItemCreateDidError(String),

    PriceDidUpdate(Item),
    PriceUpdateDidError { id: String, error: String },

    ItemDidDelete(Deleted),
    ItemDeleteDidError { id: String, error: String },

    // ===== Table =====
    SelectionMove(isize),
    SelectionFirst,
    SelectionLast,
    SortCycle,
    /// Re-run the current item fetch
    Refresh,

    // ===== Search bar =====
    SearchFocus,
    SearchBlur,
    SearchFieldNext,
    SearchCategorySelect(usize),
    SearchFromChange(String),
    SearchToChange(String),
    SearchSubmit,
    SearchReset,

    // ===== Dialogs =====
    CreateOpen,
    EditOpen,
    DeleteOpen,
    DialogCancel,
    FormFieldNext,
    FormNameChange(String),
    FormCategoryChange(String),
    FormPriceChange(String),
    FormSubmit,
    DeleteConfirm,

    NotificationDismiss,
}

impl inventory_dispatch::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::AppStarted => "AppStarted",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
            Action::ItemsDidLoad { .. } => "ItemsDidLoad",
            Action::ItemsDidError { .. } => "ItemsDidError",
            Action::CategoriesDidLoad(_) => "CategoriesDidLoad",
            Action::CategoriesDidError(_) => "CategoriesDidError",
            Action::ItemDidCreate(_) => "ItemDidCreate",
            Action::ItemCreateDidError(_) => "ItemCreateDidError",
            Action::PriceDidUpdate(_) => "PriceDidUpdate",
            Action::PriceUpdateDidError { .. } => "PriceUpdateDidError",
            Action::ItemDidDelete(_) => "ItemDidDelete",
            Action::ItemDeleteDidError { .. } => "ItemDeleteDidError",
            Action::SelectionMove(_) => "SelectionMove",
            Action::SelectionFirst => "SelectionFirst",
            Action::SelectionLast => "SelectionLast",
            Action::SortCycle => "SortCycle",
            Action::Refresh => "Refresh",
            Action::SearchFocus => "SearchFocus",
            Action::SearchBlur => "SearchBlur",
            Action::SearchFieldNext => "SearchFieldNext",
            Action::SearchCategorySelect(_) => "SearchCategorySelect",
            Action::SearchFromChange(_) => "SearchFromChange",
            Action::SearchToChange(_) => "SearchToChange",
            Action::SearchSubmit => "SearchSubmit",
            Action::SearchReset => "SearchReset",
            Action::CreateOpen => "CreateOpen",
            Action::EditOpen => "EditOpen",
            Action::DeleteOpen => "DeleteOpen",
            Action::DialogCancel => "DialogCancel",
            Action::FormFieldNext => "FormFieldNext",
            Action::FormNameChange(_) => "FormNameChange",
            Action::FormCategoryChange(_) => "FormCategoryChange",
            Action::FormPriceChange(_) => "FormPriceChange",
            Action::FormSubmit => "FormSubmit",
            Action::DeleteConfirm => "DeleteConfirm",
            Action::NotificationDismiss => "NotificationDismiss",
        }
    }

    /// Concise form for the action log; listings are summarized
    fn summary(&self) -> String {
        match self {
            Action::ItemsDidLoad { token, listing } => format!(
                "ItemsDidLoad {{ token: {}, items: {}, total_value: {:.2} }}",
                token,
                listing.items.len(),
                listing.stats.total_value
            ),
            Action::CategoriesDidLoad(categories) => {
                format!("CategoriesDidLoad({} categories)", categories.len())
            }
            _ => format!("{:?}", self),
        }
    }
}
