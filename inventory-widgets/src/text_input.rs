//! Single-line text input component

use crossterm::event::{KeyCode, KeyModifiers};
use inventory_dispatch::{Component, EventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Props for [`TextInput`]
pub struct TextInputProps<'a, A> {
    /// Border title
    pub label: &'a str,
    pub value: &'a str,
    /// Shown dimmed while the value is empty
    pub placeholder: &'a str,
    pub is_focused: bool,
    /// Called with the new value after each edit
    pub on_change: fn(String) -> A,
    /// Called with the current value on Enter
    pub on_submit: fn(String) -> A,
}

/// A bordered single-line input with a cursor
///
/// Handles typing, Backspace, Delete, cursor movement and the Ctrl+A / Ctrl+E
/// / Ctrl+U line shortcuts. The value lives in app state; only the cursor is
/// kept here. When the value is replaced from outside (a form reset, a
/// pre-filled edit form) the cursor jumps to its end.
#[derive(Default)]
pub struct TextInput {
    /// Cursor position (byte index)
    cursor: usize,
    /// Value as of the last event or render, to detect outside changes
    seen: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn sync(&mut self, value: &str) {
        if self.seen != value {
            self.seen = value.to_string();
            self.cursor = value.len();
        }
        self.cursor = self.cursor.min(value.len());
    }

    /// Record a value this input produced itself so `sync` keeps the cursor
    fn emit<A>(&mut self, value: String, on_change: fn(String) -> A) -> A {
        self.seen.clone_from(&value);
        on_change(value)
    }

    fn move_cursor_left(&mut self, value: &str) {
        if let Some((i, _)) = value[..self.cursor].char_indices().next_back() {
            self.cursor = i;
        }
    }

    fn move_cursor_right(&mut self, value: &str) {
        if let Some(c) = value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        new_value
    }

    /// Backspace
    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        let (char_start, _) = value[..self.cursor].char_indices().next_back()?;
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..char_start]);
        new_value.push_str(&value[self.cursor..]);
        self.cursor = char_start;
        Some(new_value)
    }

    /// Delete
    fn delete_char_at(&self, value: &str) -> Option<String> {
        let c = value[self.cursor..].chars().next()?;
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..self.cursor]);
        new_value.push_str(&value[self.cursor + c.len_utf8()..]);
        Some(new_value)
    }
}

impl<A> Component<A> for TextInput {
    type Props<'a> = TextInputProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };

        self.sync(props.value);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = props.value.len();
                    None
                }
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some(self.emit(String::new(), props.on_change))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let new_value = self.insert_char(props.value, c);
                Some(self.emit(new_value, props.on_change))
            }
            KeyCode::Backspace => self
                .delete_char_before(props.value)
                .map(|v| self.emit(v, props.on_change)),
            KeyCode::Delete => self
                .delete_char_at(props.value)
                .map(|v| self.emit(v, props.on_change)),
            KeyCode::Left => {
                self.move_cursor_left(props.value);
                None
            }
            KeyCode::Right => {
                self.move_cursor_right(props.value);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                None
            }
            KeyCode::Enter => Some((props.on_submit)(props.value.to_string())),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.sync(props.value);

        let (text, style) = if props.value.is_empty() {
            (props.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (props.value, Style::default())
        };

        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(props.label);

        frame.render_widget(Paragraph::new(text).style(style).block(block), area);

        if props.is_focused && area.width > 2 && area.height > 2 {
            let column = props.value[..self.cursor].chars().count() as u16;
            let cursor_x = area.x + 1 + column;
            if cursor_x < area.x + area.width - 1 {
                frame.set_cursor_position((cursor_x, area.y + 1));
            }
        }
    }
}
