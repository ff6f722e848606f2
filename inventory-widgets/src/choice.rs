//! Cycle selector: one visible option, Left/Right to change it

use crossterm::event::KeyCode;
use inventory_dispatch::{Component, EventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct ChoiceProps<'a, A> {
    pub label: &'a str,
    pub options: &'a [String],
    pub selected: usize,
    pub is_focused: bool,
    /// Called with the newly selected index
    pub on_change: fn(usize) -> A,
}

/// Stateless; the selected index lives in app state
#[derive(Default)]
pub struct Choice;

impl Choice {
    pub fn new() -> Self {
        Self
    }
}

fn step(selected: usize, len: usize, forward: bool) -> usize {
    if forward {
        (selected + 1) % len
    } else {
        (selected + len - 1) % len
    }
}

impl<A> Component<A> for Choice {
    type Props<'a> = ChoiceProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        let len = props.options.len();
        if !props.is_focused || len < 2 {
            return None;
        }
        let Some(key) = event.as_key() else {
            return None;
        };
        let selected = props.selected.min(len - 1);

        match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                Some((props.on_change)(step(selected, len, true)))
            }
            KeyCode::Left | KeyCode::Char('h') => {
                Some((props.on_change)(step(selected, len, false)))
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let current = props
            .options
            .get(props.selected)
            .map(String::as_str)
            .unwrap_or("");

        let accent = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let line = Line::from(vec![
            Span::styled("◀ ", accent),
            Span::styled(current, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" ▶", accent),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(accent)
            .title(props.label);

        frame.render_widget(
            Paragraph::new(line).alignment(Alignment::Center).block(block),
            area,
        );
    }
}
