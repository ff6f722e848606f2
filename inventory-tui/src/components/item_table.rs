//! The item list

use crossterm::event::KeyCode;
use inventory_core::{format_price, format_timestamp, Item};
use inventory_dispatch::EventKind;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::reducer::LOAD_ITEMS_FAILED;
use crate::state::SortKey;

const PAGE: isize = 10;

pub struct ItemTableProps<'a> {
    /// Items in display order
    pub items: &'a [&'a Item],
    pub selected: usize,
    pub sort: SortKey,
    pub is_focused: bool,
    pub loading: bool,
    pub load_failed: bool,
}

/// Keeps the scroll offset between frames
#[derive(Default)]
pub struct ItemTable {
    table_state: TableState,
}

impl ItemTable {
    pub fn new() -> Self {
        Self::default()
    }
}

fn header_cell(title: &str, key: SortKey, sort: SortKey) -> Cell<'static> {
    let title = if key == sort {
        format!("{title} ▼")
    } else {
        title.to_string()
    };
    Cell::from(title)
}

impl Component<Action> for ItemTable {
    type Props<'a> = ItemTableProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused || props.items.is_empty() {
            return None;
        }

        match event {
            EventKind::Scroll { delta, .. } => Some(Action::SelectionMove(*delta)),
            EventKind::Key(key) => match key.code {
                KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectionMove(1)),
                KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectionMove(-1)),
                KeyCode::PageDown => Some(Action::SelectionMove(PAGE)),
                KeyCode::PageUp => Some(Action::SelectionMove(-PAGE)),
                KeyCode::Char('g') | KeyCode::Home => Some(Action::SelectionFirst),
                KeyCode::Char('G') | KeyCode::End => Some(Action::SelectionLast),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" Items ({}) ", props.items.len()))
            .title_bottom(Line::from(format!(" sort: {} ", props.sort.label())).right_aligned());

        if props.items.is_empty() {
            let (message, color) = if props.loading {
                ("Loading items…", Color::DarkGray)
            } else if props.load_failed {
                (LOAD_ITEMS_FAILED, Color::Red)
            } else {
                ("No items found", Color::DarkGray)
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(color))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(vec![
            header_cell("Name", SortKey::Name, props.sort),
            header_cell("Category", SortKey::Category, props.sort),
            header_cell("Price", SortKey::Price, props.sort),
            Cell::from("Last Updated"),
        ])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

        let rows = props.items.iter().map(|item| {
            Row::new(vec![
                Cell::from(item.name.clone()),
                Cell::from(item.category.clone()),
                Cell::from(Line::from(format_price(item.price)).right_aligned()),
                Cell::from(format_timestamp(&item.last_updated_dt)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Fill(3),
                Constraint::Fill(2),
                Constraint::Length(14),
                Constraint::Length(20),
            ],
        )
        .header(header)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

        self.table_state
            .select(Some(props.selected.min(props.items.len() - 1)));
        frame.render_stateful_widget(table, area, &mut self.table_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_dispatch::testing::{key_event, ActionAssertions, RenderHarness};

    fn items() -> Vec<Item> {
        vec![
            Item {
                id: "1".into(),
                name: "Claw Hammer".into(),
                category: "Tools".into(),
                price: 24.9,
                last_updated_dt: "2025-01-03T09:15:00+08:00".into(),
            },
            Item {
                id: "2".into(),
                name: "Work Gloves".into(),
                category: "Safety".into(),
                price: 6.2,
                last_updated_dt: "2025-02-14T16:30:00+08:00".into(),
            },
        ]
    }

    fn props<'a>(items: &'a [&'a Item]) -> ItemTableProps<'a> {
        ItemTableProps {
            items,
            selected: 0,
            sort: SortKey::Unsorted,
            is_focused: true,
            loading: false,
            load_failed: false,
        }
    }

    fn send(items: &[&Item], event: &EventKind) -> Vec<Action> {
        ItemTable::new()
            .handle_event(event, props(items))
            .into_iter()
            .collect()
    }

    #[test]
    fn test_navigation_keys() {
        let items = items();
        let refs: Vec<&Item> = items.iter().collect();

        send(&refs, &key_event("j")).assert_first(Action::SelectionMove(1));
        send(&refs, &key_event("up")).assert_first(Action::SelectionMove(-1));
        send(&refs, &key_event("G")).assert_first(Action::SelectionLast);
        send(&refs, &key_event("home")).assert_first(Action::SelectionFirst);
    }

    #[test]
    fn test_scroll_moves_selection() {
        let items = items();
        let refs: Vec<&Item> = items.iter().collect();
        let scroll = EventKind::Scroll {
            column: 0,
            row: 0,
            delta: 3,
        };

        send(&refs, &scroll).assert_first(Action::SelectionMove(3));
    }

    #[test]
    fn test_empty_table_ignores_keys() {
        send(&[], &key_event("j")).assert_empty();
    }

    #[test]
    fn test_render_rows() {
        let items = items();
        let refs: Vec<&Item> = items.iter().collect();
        let mut render = RenderHarness::new(90, 8);

        let output = render.render_to_string_plain(|frame| {
            ItemTable::new().render(frame, frame.area(), props(&refs));
        });

        assert!(output.contains("Items (2)"));
        assert!(output.contains("Last Updated"));
        assert!(output.contains("Claw Hammer"));
        assert!(output.contains("SGD 24.90"));
        assert!(output.contains("2025-02-14 16:30:00"));
    }

    #[test]
    fn test_render_sort_marker() {
        let items = items();
        let refs: Vec<&Item> = items.iter().collect();
        let mut p = props(&refs);
        p.sort = SortKey::Price;
        let mut render = RenderHarness::new(90, 8);

        let output = render.render_to_string_plain(|frame| {
            ItemTable::new().render(frame, frame.area(), p);
        });

        assert!(output.contains("Price ▼"));
        assert!(output.contains("sort: price"));
    }

    #[test]
    fn test_render_failed_empty_state() {
        let mut p = props(&[]);
        p.load_failed = true;
        let mut render = RenderHarness::new(60, 5);

        let output = render.render_to_string_plain(|frame| {
            ItemTable::new().render(frame, frame.area(), p);
        });

        assert!(output.contains("Failed to load items. Please try again."));
    }
}
