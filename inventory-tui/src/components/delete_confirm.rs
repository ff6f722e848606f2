//! Delete confirmation dialog body

use crossterm::event::KeyCode;
use inventory_core::format_price;
use inventory_dispatch::EventKind;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{spinner, Component};
use crate::action::Action;
use crate::state::DeleteConfirm;

pub struct DeleteConfirmProps<'a> {
    pub confirm: &'a DeleteConfirm,
    pub tick: u32,
}

pub struct DeleteConfirmDialog;

impl Component<Action> for DeleteConfirmDialog {
    type Props<'a> = DeleteConfirmProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if props.confirm.submitting {
            return None;
        }
        let Some(key) = event.as_key() else {
            return None;
        };
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::DeleteConfirm),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::DialogCancel),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let item = &props.confirm.item;
        let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let hint = Style::default().fg(Color::DarkGray);

        let footer = if props.confirm.submitting {
            Line::from(vec![
                Span::styled(spinner(props.tick), Style::default().fg(Color::Red)),
                Span::styled(" Deleting…", hint),
            ])
        } else {
            Line::from(vec![
                Span::styled("y", key),
                Span::styled(" delete  ", hint),
                Span::styled("n", key),
                Span::styled(" cancel", hint),
            ])
        };

        let text = vec![
            Line::from(vec![
                Span::raw("Delete "),
                Span::styled(item.name.as_str(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("?"),
            ]),
            Line::from(Span::styled(
                format!("{} · {}", item.category, format_price(item.price)),
                hint,
            )),
            Line::from(""),
            Line::from(Span::styled("This cannot be undone.", Style::default().fg(Color::Red))),
            Line::from(""),
            footer,
        ];

        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}
