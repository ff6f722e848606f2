//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A UI element that renders from props and maps events to actions
///
/// Props carry every piece of read-only data the component needs, focus
/// included. `handle_event` returns actions and never mutates app state;
/// `&mut self` is only for view-local state such as a scroll offset.
///
/// ```ignore
/// struct StatsCards;
///
/// impl Component<Action> for StatsCards {
///     type Props<'a> = &'a Stats;
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, stats: &Stats) {
///         frame.render_widget(Paragraph::new(stats.total_items.to_string()), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Data required to render the component
    type Props<'a>;

    /// Map an event to actions
    ///
    /// Return `None`, `Some(action)`, or a `Vec`. The default returns nothing,
    /// which suits render-only components.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
