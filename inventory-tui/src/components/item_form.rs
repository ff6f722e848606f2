//! Create and price-edit dialog bodies
//!
//! Both render inside the area returned by
//! [`render_modal`](inventory_widgets::render_modal). While a submit is in
//! flight only `Esc` is handled.

use crossterm::event::KeyCode;
use inventory_core::{format_price, CURRENCY};
use inventory_dispatch::EventKind;
use inventory_widgets::{TextInput, TextInputProps};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{spinner, Component};
use crate::action::Action;
use crate::state::{CreateField, CreateForm, PriceForm};

/// Error, progress or hint line under the inputs
fn status_line(error: Option<&str>, submitting: bool, tick: u32) -> Line<'static> {
    if submitting {
        return Line::from(vec![
            Span::styled(spinner(tick), Style::default().fg(Color::Cyan)),
            Span::styled(" Saving…", Style::default().fg(Color::DarkGray)),
        ]);
    }
    match error {
        Some(error) => Line::from(Span::styled(error.to_string(), Style::default().fg(Color::Red))),
        None => Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(" save  ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
        ]),
    }
}

pub struct CreateFormProps<'a> {
    pub form: &'a CreateForm,
    pub tick: u32,
}

#[derive(Default)]
pub struct CreateItemForm {
    name: TextInput,
    category: TextInput,
    price: TextInput,
}

impl CreateItemForm {
    pub fn new() -> Self {
        Self::default()
    }
}

fn name_props(form: &CreateForm) -> TextInputProps<'_, Action> {
    TextInputProps {
        label: " Name ",
        value: &form.name,
        placeholder: "e.g. Claw Hammer",
        is_focused: form.field == CreateField::Name,
        on_change: Action::FormNameChange,
        on_submit: |_| Action::FormSubmit,
    }
}

fn category_props(form: &CreateForm) -> TextInputProps<'_, Action> {
    TextInputProps {
        label: " Category ",
        value: &form.category,
        placeholder: "e.g. Tools",
        is_focused: form.field == CreateField::Category,
        on_change: Action::FormCategoryChange,
        on_submit: |_| Action::FormSubmit,
    }
}

fn price_props<'a>(label: &'a str, value: &'a str, is_focused: bool) -> TextInputProps<'a, Action> {
    TextInputProps {
        label,
        value,
        placeholder: "0.00",
        is_focused,
        on_change: Action::FormPriceChange,
        on_submit: |_| Action::FormSubmit,
    }
}

impl Component<Action> for CreateItemForm {
    type Props<'a> = CreateFormProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let Some(key) = event.as_key() else {
            return Vec::new();
        };
        let form = props.form;

        match key.code {
            KeyCode::Esc => return vec![Action::DialogCancel],
            _ if form.submitting => return Vec::new(),
            KeyCode::Tab | KeyCode::BackTab => return vec![Action::FormFieldNext],
            _ => {}
        }

        let label = format!(" Price ({CURRENCY}) ");
        let actions: Vec<Action> = match form.field {
            CreateField::Name => self
                .name
                .handle_event(event, name_props(form))
                .into_iter()
                .collect(),
            CreateField::Category => self
                .category
                .handle_event(event, category_props(form))
                .into_iter()
                .collect(),
            CreateField::Price => self
                .price
                .handle_event(event, price_props(&label, &form.price, true))
                .into_iter()
                .collect(),
        };
        actions
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let form = props.form;
        let [name_area, category_area, price_area, _, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.name.render(frame, name_area, name_props(form));
        self.category.render(frame, category_area, category_props(form));
        let label = format!(" Price ({CURRENCY}) ");
        self.price.render(
            frame,
            price_area,
            price_props(&label, &form.price, form.field == CreateField::Price),
        );

        frame.render_widget(
            Paragraph::new(status_line(form.error.as_deref(), form.submitting, props.tick)),
            status_area,
        );
    }
}

pub struct PriceFormProps<'a> {
    pub form: &'a PriceForm,
    pub tick: u32,
}

/// Price input with the item's name and category shown read-only
#[derive(Default)]
pub struct EditPriceForm {
    price: TextInput,
}

impl EditPriceForm {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for EditPriceForm {
    type Props<'a> = PriceFormProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let Some(key) = event.as_key() else {
            return Vec::new();
        };
        let form = props.form;

        if key.code == KeyCode::Esc {
            return vec![Action::DialogCancel];
        }
        if form.submitting {
            return Vec::new();
        }

        let label = format!(" New price ({CURRENCY}) ");
        let actions: Vec<Action> = self
            .price
            .handle_event(event, price_props(&label, &form.price, true))
            .into_iter()
            .collect();
        actions
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let form = props.form;
        let [details_area, price_area, _, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let label = Style::default().fg(Color::DarkGray);
        let details = vec![
            Line::from(vec![
                Span::styled("Name      ", label),
                Span::raw(form.item.name.as_str()),
            ]),
            Line::from(vec![
                Span::styled("Category  ", label),
                Span::raw(form.item.category.as_str()),
            ]),
            Line::from(vec![
                Span::styled("Current   ", label),
                Span::raw(format_price(form.item.price)),
            ]),
        ];
        frame.render_widget(Paragraph::new(details), details_area);

        let price_label = format!(" New price ({CURRENCY}) ");
        self.price
            .render(frame, price_area, price_props(&price_label, &form.price, true));

        frame.render_widget(
            Paragraph::new(status_line(form.error.as_deref(), form.submitting, props.tick)),
            status_area,
        );
    }
}
