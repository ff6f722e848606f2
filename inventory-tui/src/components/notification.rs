//! Transient toast in the top-right corner

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::state::{Notification, NotificationKind};

const MAX_WIDTH: u16 = 48;

pub struct NotificationToastProps<'a> {
    pub notification: &'a Notification,
}

pub struct NotificationToast;

impl Component<Action> for NotificationToast {
    type Props<'a> = NotificationToastProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let notification = props.notification;
        let (title, color) = match notification.kind {
            NotificationKind::Success => (" Done ", Color::Green),
            NotificationKind::Error => (" Error ", Color::Red),
        };

        let text_width = notification.message.chars().count() as u16;
        let width = (text_width + 4).clamp(12, MAX_WIDTH).min(area.width);
        let toast = Rect {
            x: area.right().saturating_sub(width + 1).max(area.x),
            y: area.y + 1,
            width,
            height: 3.min(area.height.saturating_sub(1)),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(title);

        frame.render_widget(Clear, toast);
        frame.render_widget(
            Paragraph::new(notification.message.as_str())
                .style(Style::default().fg(color))
                .block(block),
            toast,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_dispatch::testing::RenderHarness;

    #[test]
    fn test_render_error_toast() {
        let notification = Notification::error("Failed to create item.");
        let mut render = RenderHarness::new(80, 10);

        let output = render.render_to_string_plain(|frame| {
            let props = NotificationToastProps {
                notification: &notification,
            };
            NotificationToast.render(frame, frame.area(), props);
        });

        assert!(output.contains("Error"));
        assert!(output.contains("Failed to create item."));
    }

    #[test]
    fn test_toast_fits_narrow_terminal() {
        let notification = Notification::success("A fairly long message that will not fit");
        let mut render = RenderHarness::new(20, 5);

        let output = render.render_to_string_plain(|frame| {
            let props = NotificationToastProps {
                notification: &notification,
            };
            NotificationToast.render(frame, frame.area(), props);
        });

        assert!(output.contains("Done"));
    }
}
