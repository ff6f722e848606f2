use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;

/// Which key set to advertise
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HelpContext {
    Table,
    Search,
    Form,
    Confirm,
}

impl HelpContext {
    fn keys(self) -> &'static [(&'static str, &'static str)] {
        match self {
            HelpContext::Table => &[
                ("j/k", "move"),
                ("n", "new"),
                ("e", "edit price"),
                ("d", "delete"),
                ("/", "search"),
                ("s", "sort"),
                ("r", "refresh"),
                ("q", "quit"),
            ],
            HelpContext::Search => &[
                ("tab", "next field"),
                ("←/→", "category"),
                ("enter", "search"),
                ("ctrl+r", "reset"),
                ("esc", "back"),
            ],
            HelpContext::Form => &[("tab", "next field"), ("enter", "save"), ("esc", "cancel")],
            HelpContext::Confirm => &[("y", "delete"), ("n", "cancel")],
        }
    }
}

pub struct HelpBar;

pub struct HelpBarProps {
    pub context: HelpContext,
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut spans = vec![Span::raw(" ")];
        for (key, description) in props.context.keys() {
            spans.push(Span::styled(*key, Style::default().fg(Color::Cyan).bold()));
            spans.push(Span::styled(
                format!(" {description}  "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_dispatch::testing::RenderHarness;

    #[test]
    fn test_table_keys() {
        let mut render = RenderHarness::new(120, 1);
        let output = render.render_to_string_plain(|frame| {
            let props = HelpBarProps {
                context: HelpContext::Table,
            };
            HelpBar.render(frame, frame.area(), props);
        });

        assert!(output.contains("n new"));
        assert!(output.contains("q quit"));
    }

    #[test]
    fn test_search_keys() {
        let mut render = RenderHarness::new(120, 1);
        let output = render.render_to_string_plain(|frame| {
            let props = HelpBarProps {
                context: HelpContext::Search,
            };
            HelpBar.render(frame, frame.area(), props);
        });

        assert!(output.contains("ctrl+r reset"));
        assert!(!output.contains("q quit"));
    }
}
