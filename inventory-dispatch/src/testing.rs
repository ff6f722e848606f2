//! Test utilities
//!
//! - [`key`]: build a `KeyEvent` from a string such as `"ctrl+r"`
//! - [`RenderHarness`]: render into an in-memory terminal and read it back
//! - [`ActionAssertions`]: assertions over a list of emitted actions
//! - [`assert_emitted!`](crate::assert_emitted) and friends for pattern checks
//!
//! ```ignore
//! use inventory_dispatch::testing::*;
//!
//! let mut render = RenderHarness::new(60, 10);
//! let output = render.render_to_string_plain(|frame| {
//!     stats.render(frame, frame.area(), &state.inventory.stats);
//! });
//! assert!(output.contains("Total Items"));
//! ```

use std::fmt::Debug;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

use crate::event::EventKind;

/// Parse a key description like `"q"`, `"ctrl+r"`, `"shift+tab"` or `"enter"`
///
/// Returns `None` for empty or unknown names. Single characters keep their
/// case, so `"N"` is a capital N.
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim();
    if key_str.is_empty() {
        return None;
    }

    let lower = key_str.to_lowercase();
    if lower == "shift+tab" || lower == "backtab" {
        return Some(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
    }

    let parts: Vec<&str> = key_str.split('+').collect();
    let (key_part, modifier_parts) = match parts.as_slice() {
        // A lone "+" is the plus key, not a separator
        [.., "", ""] => ("+", &parts[..parts.len() - 2]),
        [rest @ .., last] => (*last, rest),
        [] => return None,
    };

    let mut modifiers = KeyModifiers::empty();
    for part in modifier_parts {
        match part.trim().to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => {}
        }
    }

    let code = match key_part.trim().to_lowercase().as_str() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "delete" | "del" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = key_part.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => {
                    let n = key_part.trim().to_lowercase();
                    let f = n.strip_prefix('f')?.parse::<u8>().ok()?;
                    KeyCode::F(f)
                }
            }
        }
    };

    Some(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// Create a `KeyEvent` from a key string
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// A key event wrapped as [`EventKind::Key`]
pub fn key_event(s: &str) -> EventKind {
    EventKind::Key(key(s))
}

/// One [`EventKind::Key`] per character, for typing text into inputs
pub fn type_text(text: &str) -> Vec<EventKind> {
    text.chars().map(|c| EventKind::Key(char_key(c))).collect()
}

pub fn char_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty())
}

pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Renders into a ratatui `TestBackend` for assertions on screen content
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test terminal is infallible");
        Self { terminal }
    }

    /// Draw one frame and return the resulting buffer
    pub fn render<F>(&mut self, draw: F) -> &Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(draw)
            .expect("drawing to a test backend cannot fail");
        self.terminal.backend().buffer()
    }

    /// Draw one frame and return its text, one line per row, trailing
    /// spaces trimmed
    pub fn render_to_string_plain<F>(&mut self, draw: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        buffer_to_string_plain(self.render(draw))
    }
}

/// The text content of a buffer, rows joined by newlines
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Assertions over the actions a component or reducer produced
pub trait ActionAssertions<A> {
    fn assert_empty(&self);
    fn assert_count(&self, expected: usize);
    fn assert_first(&self, expected: A);
    fn assert_contains(&self, expected: A);
}

impl<A: PartialEq + Debug> ActionAssertions<A> for [A] {
    fn assert_empty(&self) {
        assert!(self.is_empty(), "Expected no actions, got: {:?}", self);
    }

    fn assert_count(&self, expected: usize) {
        assert_eq!(
            self.len(),
            expected,
            "Expected {} actions, got: {:?}",
            expected,
            self
        );
    }

    fn assert_first(&self, expected: A) {
        assert_eq!(
            self.first(),
            Some(&expected),
            "Unexpected first action in {:?}",
            self
        );
    }

    fn assert_contains(&self, expected: A) {
        assert!(
            self.contains(&expected),
            "Expected {:?} among {:?}",
            expected,
            self
        );
    }
}

impl<A: PartialEq + Debug> ActionAssertions<A> for Vec<A> {
    fn assert_empty(&self) {
        self.as_slice().assert_empty();
    }

    fn assert_count(&self, expected: usize) {
        self.as_slice().assert_count(expected);
    }

    fn assert_first(&self, expected: A) {
        self.as_slice().assert_first(expected);
    }

    fn assert_contains(&self, expected: A) {
        self.as_slice().assert_contains(expected);
    }
}

/// Assert that an action matching a pattern was emitted
///
/// ```ignore
/// assert_emitted!(actions, Action::SelectionMove(_));
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that no action matching a pattern was emitted
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Find the first action matching a pattern
#[macro_export]
macro_rules! find_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().find(|a| matches!(a, $pattern $(if $guard)?))
    };
}

pub use crate::{assert_emitted, assert_not_emitted, find_emitted};
