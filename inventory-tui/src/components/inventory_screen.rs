//! Main screen: stats, search bar, item table and help bar

use crossterm::event::KeyCode;
use inventory_core::Item;
use inventory_dispatch::EventKind;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{
    Component, HelpBar, HelpBarProps, HelpContext, ItemTable, ItemTableProps, SearchBar,
    SearchBarProps, StatsCards, StatsCardsProps,
};
use crate::action::Action;
use crate::state::{AppState, Focus};

pub struct InventoryScreenProps<'a> {
    pub state: &'a AppState,
    /// False while a dialog is open
    pub is_focused: bool,
}

#[derive(Default)]
pub struct InventoryScreen {
    search: SearchBar,
    table: ItemTable,
}

impl InventoryScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

fn search_props<'a>(
    state: &'a AppState,
    categories: &'a [String],
    is_focused: bool,
) -> SearchBarProps<'a> {
    SearchBarProps {
        form: &state.ui.search,
        categories,
        category_index: state.category_index(),
        is_focused: is_focused && state.ui.focus == Focus::Search,
        loading: state.inventory.loading(),
        tick: state.ui.tick,
    }
}

fn table_props<'a>(
    state: &'a AppState,
    items: &'a [&'a Item],
    is_focused: bool,
) -> ItemTableProps<'a> {
    ItemTableProps {
        items,
        selected: state.ui.selected,
        sort: state.ui.sort,
        is_focused: is_focused && state.ui.focus == Focus::Table,
        loading: state.inventory.loading(),
        load_failed: state.inventory.load_failed,
    }
}

impl Component<Action> for InventoryScreen {
    type Props<'a> = InventoryScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let state = props.state;

        if state.ui.focus == Focus::Search {
            let categories = state.category_options();
            let actions: Vec<Action> = self
                .search
                .handle_event(event, search_props(state, &categories, true))
                .into_iter()
                .collect();
            return actions;
        }

        if let Some(key) = event.as_key() {
            let action = match key.code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('n') => Some(Action::CreateOpen),
                KeyCode::Char('e') | KeyCode::Enter => Some(Action::EditOpen),
                KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteOpen),
                KeyCode::Char('/') => Some(Action::SearchFocus),
                KeyCode::Char('s') => Some(Action::SortCycle),
                KeyCode::Char('r') => Some(Action::Refresh),
                KeyCode::Esc if state.ui.notification.is_some() => Some(Action::NotificationDismiss),
                _ => None,
            };
            if let Some(action) = action {
                return vec![action];
            }
        }

        let items = state.visible_items();
        let actions: Vec<Action> = self
            .table
            .handle_event(event, table_props(state, &items, true))
            .into_iter()
            .collect();
        actions
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let [title_area, stats_area, search_area, table_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let title = Line::from(vec![
            Span::styled(
                " Inventory",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" manager", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(title), title_area);

        StatsCards.render(
            frame,
            stats_area,
            StatsCardsProps {
                stats: &state.inventory.stats,
            },
        );

        let categories = state.category_options();
        self.search.render(
            frame,
            search_area,
            search_props(state, &categories, props.is_focused),
        );

        let items = state.visible_items();
        self.table
            .render(frame, table_area, table_props(state, &items, props.is_focused));

        let context = match state.ui.focus {
            Focus::Table => HelpContext::Table,
            Focus::Search => HelpContext::Search,
        };
        HelpBar.render(frame, help_area, HelpBarProps { context });
    }
}
