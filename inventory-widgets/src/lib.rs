//! Reusable widgets for the inventory TUI
//!
//! Widgets implement [`Component<A>`](inventory_dispatch::Component) and emit
//! actions through plain `fn` callbacks passed in their props, so the same
//! widget serves every form field.
//!
//! - [`TextInput`]: single-line text input with cursor
//! - [`Choice`]: left/right cycle selector over a list of options
//! - [`render_modal`]: dimmed-background overlay for dialogs
//!
//! ```ignore
//! let mut input = TextInput::new();
//! input.render(frame, area, TextInputProps {
//!     label: "Price",
//!     value: &form.price,
//!     placeholder: "0.00",
//!     is_focused: form.focus == FormField::Price,
//!     on_change: Action::FormPriceChange,
//!     on_submit: |_| Action::FormSubmit,
//! });
//! ```

mod choice;
mod modal;
mod text_input;

pub use choice::{Choice, ChoiceProps};
pub use modal::{centered_rect, render_modal, ModalStyle};
pub use text_input::{TextInput, TextInputProps};
