//! Category and last-updated range filter

use crossterm::event::{KeyCode, KeyModifiers};
use inventory_dispatch::EventKind;
use inventory_widgets::{Choice, ChoiceProps, TextInput, TextInputProps};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{spinner, Component};
use crate::action::Action;
use crate::state::{SearchField, SearchForm};

const DATE_PLACEHOLDER: &str = "YYYY-MM-DD HH:mm:ss";

pub struct SearchBarProps<'a> {
    pub form: &'a SearchForm,
    /// Category options, "all" first
    pub categories: &'a [String],
    pub category_index: usize,
    pub is_focused: bool,
    pub loading: bool,
    pub tick: u32,
}

/// Owns the cursor state of its inputs; values live in [`SearchForm`]
#[derive(Default)]
pub struct SearchBar {
    category: Choice,
    from: TextInput,
    to: TextInput,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn category_props<'a>(&self, props: &SearchBarProps<'a>) -> ChoiceProps<'a, Action> {
        ChoiceProps {
            label: " Category ",
            options: props.categories,
            selected: props.category_index,
            is_focused: props.is_focused && props.form.field == SearchField::Category,
            on_change: Action::SearchCategorySelect,
        }
    }

    fn from_props<'a>(&self, props: &SearchBarProps<'a>) -> TextInputProps<'a, Action> {
        TextInputProps {
            label: " Updated from ",
            value: &props.form.dt_from,
            placeholder: DATE_PLACEHOLDER,
            is_focused: props.is_focused && props.form.field == SearchField::From,
            on_change: Action::SearchFromChange,
            on_submit: |_| Action::SearchSubmit,
        }
    }

    fn to_props<'a>(&self, props: &SearchBarProps<'a>) -> TextInputProps<'a, Action> {
        TextInputProps {
            label: " Updated to ",
            value: &props.form.dt_to,
            placeholder: DATE_PLACEHOLDER,
            is_focused: props.is_focused && props.form.field == SearchField::To,
            on_change: Action::SearchToChange,
            on_submit: |_| Action::SearchSubmit,
        }
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }
        let Some(key) = event.as_key() else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Tab => return vec![Action::SearchFieldNext],
            KeyCode::Esc => return vec![Action::SearchBlur],
            KeyCode::Enter => return vec![Action::SearchSubmit],
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return vec![Action::SearchReset]
            }
            _ => {}
        }

        match props.form.field {
            SearchField::Category => {
                let choice_props = self.category_props(&props);
                self.category.handle_event(event, choice_props).into_iter().collect()
            }
            SearchField::From => {
                let input_props = self.from_props(&props);
                self.from.handle_event(event, input_props).into_iter().collect()
            }
            SearchField::To => {
                let input_props = self.to_props(&props);
                self.to.handle_event(event, input_props).into_iter().collect()
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [fields_area, message_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);
        let [category_area, from_area, to_area, status_area] = Layout::horizontal([
            Constraint::Length(28),
            Constraint::Length(24),
            Constraint::Length(24),
            Constraint::Min(0),
        ])
        .areas(fields_area);

        let choice_props = self.category_props(&props);
        self.category.render(frame, category_area, choice_props);
        let input_props = self.from_props(&props);
        self.from.render(frame, from_area, input_props);
        let input_props = self.to_props(&props);
        self.to.render(frame, to_area, input_props);

        if props.loading {
            let status = Line::from(vec![
                Span::styled(spinner(props.tick), Style::default().fg(Color::Cyan)),
                Span::styled(" Loading…", Style::default().fg(Color::DarkGray)),
            ]);
            frame.render_widget(Paragraph::new(status), status_area.inner(Margin::new(1, 1)));
        }

        let message = match &props.form.error {
            Some(error) => Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            None => Line::from(Span::styled(
                " Dates as YYYY-MM-DD or YYYY-MM-DD HH:mm:ss; blank for no bound",
                Style::default().fg(Color::DarkGray),
            )),
        };
        frame.render_widget(Paragraph::new(message), message_area);
    }
}
