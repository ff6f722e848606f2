pub mod delete_confirm;
pub mod help_bar;
pub mod inventory_screen;
pub mod item_form;
pub mod item_table;
pub mod notification;
pub mod search_bar;
pub mod stats_cards;

pub use inventory_dispatch::Component;

pub use delete_confirm::{DeleteConfirmDialog, DeleteConfirmProps};
pub use help_bar::{HelpBar, HelpBarProps, HelpContext};
pub use inventory_screen::{InventoryScreen, InventoryScreenProps};
pub use item_form::{CreateFormProps, CreateItemForm, EditPriceForm, PriceFormProps};
pub use item_table::{ItemTable, ItemTableProps};
pub use notification::{NotificationToast, NotificationToastProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use stats_cards::{StatsCards, StatsCardsProps};

/// Braille spinner frames, advanced once per tick
pub const SPINNERS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(tick: u32) -> &'static str {
    SPINNERS[tick as usize % SPINNERS.len()]
}
