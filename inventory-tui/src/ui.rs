//! Root view: routes input to the active layer and draws all layers
//!
//! Layers from bottom to top: the main screen, an open dialog (over a
//! dimmed background), the notification toast.

use crossterm::event::{KeyCode, KeyModifiers};
use inventory_dispatch::{EventKind, EventOutcome};
use inventory_widgets::{centered_rect, render_modal, ModalStyle};
use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::components::{
    Component, CreateFormProps, CreateItemForm, DeleteConfirmDialog, DeleteConfirmProps,
    EditPriceForm, InventoryScreen, InventoryScreenProps, NotificationToast,
    NotificationToastProps, PriceFormProps,
};
use crate::state::{AppState, Dialog};

const DIALOG_WIDTH: u16 = 56;

#[derive(Default)]
pub struct InventoryUi {
    screen: InventoryScreen,
    create_form: CreateItemForm,
    price_form: EditPriceForm,
}

impl InventoryUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let props = InventoryScreenProps {
            state,
            is_focused: state.ui.dialog.is_none(),
        };
        self.screen.render(frame, area, props);

        let tick = state.ui.tick;
        match &state.ui.dialog {
            Some(Dialog::Create(form)) => {
                let inner = render_modal(
                    frame,
                    centered_rect(DIALOG_WIDTH, 15, area),
                    " New Item ",
                    &ModalStyle::default(),
                );
                self.create_form.render(frame, inner, CreateFormProps { form, tick });
            }
            Some(Dialog::EditPrice(form)) => {
                let inner = render_modal(
                    frame,
                    centered_rect(DIALOG_WIDTH, 12, area),
                    " Edit Price ",
                    &ModalStyle::default(),
                );
                self.price_form.render(frame, inner, PriceFormProps { form, tick });
            }
            Some(Dialog::Delete(confirm)) => {
                let inner = render_modal(
                    frame,
                    centered_rect(DIALOG_WIDTH, 9, area),
                    " Delete Item ",
                    &ModalStyle::danger(),
                );
                DeleteConfirmDialog.render(frame, inner, DeleteConfirmProps { confirm, tick });
            }
            None => {}
        }

        if let Some(notification) = &state.ui.notification {
            NotificationToast.render(frame, area, NotificationToastProps { notification });
        }
    }

    pub fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome<Action> {
        match event {
            EventKind::Resize(..) => return EventOutcome::needs_render(),
            EventKind::Tick => {
                return if state.needs_tick() {
                    EventOutcome::action(Action::Tick)
                } else {
                    EventOutcome::ignored()
                };
            }
            EventKind::Key(key)
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                return EventOutcome::action(Action::Quit);
            }
            _ => {}
        }

        let tick = state.ui.tick;
        match &state.ui.dialog {
            Some(Dialog::Create(form)) => EventOutcome::from_actions(
                self.create_form
                    .handle_event(event, CreateFormProps { form, tick }),
            ),
            Some(Dialog::EditPrice(form)) => EventOutcome::from_actions(
                self.price_form
                    .handle_event(event, PriceFormProps { form, tick }),
            ),
            Some(Dialog::Delete(confirm)) => EventOutcome::from_actions(
                DeleteConfirmDialog.handle_event(event, DeleteConfirmProps { confirm, tick }),
            ),
            None => {
                let props = InventoryScreenProps {
                    state,
                    is_focused: true,
                };
                EventOutcome::from_actions(self.screen.handle_event(event, props))
            }
        }
    }
}
