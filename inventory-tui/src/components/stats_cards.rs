//! Summary cards above the table

use inventory_core::{format_price, Stats};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;

pub struct StatsCards;

pub struct StatsCardsProps<'a> {
    pub stats: &'a Stats,
}

impl Component<Action> for StatsCards {
    type Props<'a> = StatsCardsProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [items_area, value_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

        render_card(
            frame,
            items_area,
            "Total Items",
            props.stats.total_items.to_string(),
            Color::Cyan,
        );
        render_card(
            frame,
            value_area,
            "Total Inventory Value",
            format_price(props.stats.total_value),
            Color::Green,
        );
    }
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Line::from(format!(" {title} ")).style(Style::default().fg(Color::Gray)));

    let value = Paragraph::new(value)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(value, area);
}
