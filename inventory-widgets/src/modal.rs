//! Modal overlay with background dimming
//!
//! The background is rendered normally each frame and then dimmed, so it
//! keeps updating (spinners, refreshed rows) while a dialog is open.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

/// Configuration for modal appearance
#[derive(Debug, Clone)]
pub struct ModalStyle {
    /// Dim factor for the background (0.0 = unchanged, 1.0 = black)
    pub dim_factor: f32,
    /// Fill color for the dialog area (None = terminal default)
    pub bg_color: Option<Color>,
    pub border_color: Color,
}

impl Default for ModalStyle {
    fn default() -> Self {
        Self {
            dim_factor: 0.6,
            bg_color: None,
            border_color: Color::Cyan,
        }
    }
}

impl ModalStyle {
    pub fn with_bg(bg_color: Color) -> Self {
        Self {
            bg_color: Some(bg_color),
            ..Default::default()
        }
    }

    /// Red border for destructive confirmations
    pub fn danger() -> Self {
        Self {
            border_color: Color::Red,
            ..Default::default()
        }
    }
}

/// Dim a whole buffer by scaling colors towards black
///
/// Named and default colors have no RGB value to scale; they become
/// dark gray instead.
pub fn dim_buffer(buffer: &mut Buffer, factor: f32) {
    let scale = 1.0 - factor.clamp(0.0, 1.0);
    for cell in buffer.content.iter_mut() {
        cell.fg = dim_color(cell.fg, scale);
        cell.bg = match cell.bg {
            Color::Reset => Color::Reset,
            bg => dim_color(bg, scale),
        };
    }
}

fn dim_color(color: Color, scale: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * scale) as u8,
            (g as f32 * scale) as u8,
            (b as f32 * scale) as u8,
        ),
        Color::Black => Color::Black,
        _ => Color::DarkGray,
    }
}

/// Dim everything drawn so far and draw a titled dialog frame
///
/// Call after rendering the background. Returns the inner area for the
/// dialog's content.
///
/// ```ignore
/// screen.render(frame, area, props);
/// if let Some(dialog) = &state.ui.dialog {
///     let inner = render_modal(frame, centered_rect(50, 12, area), " New Item ", &ModalStyle::default());
///     form.render(frame, inner, form_props);
/// }
/// ```
pub fn render_modal(frame: &mut Frame, area: Rect, title: &str, style: &ModalStyle) -> Rect {
    dim_buffer(frame.buffer_mut(), style.dim_factor);
    frame.render_widget(Clear, area);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(style.border_color))
        .title(title.to_string());
    if let Some(bg) = style.bg_color {
        block = block.style(Style::default().bg(bg));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A rectangle of at most `width` x `height` centered in `area`, keeping a
/// one-cell margin
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_dispatch::testing::RenderHarness;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_modal_renders_title_and_content() {
        let mut harness = RenderHarness::new(80, 24);

        let output = harness.render_to_string_plain(|frame| {
            frame.render_widget(Paragraph::new("Background content"), frame.area());

            let area = centered_rect(40, 10, frame.area());
            let inner = render_modal(frame, area, " Delete Item ", &ModalStyle::danger());
            frame.render_widget(Paragraph::new("Modal content"), inner);
        });

        assert!(output.contains("Delete Item"));
        assert!(output.contains("Modal content"));
        assert!(output.contains("Background content"));
    }

    #[test]
    fn test_dim_buffer_scales_rgb() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 1, 1));
        buffer[(0, 0)].set_fg(Color::Rgb(200, 100, 50));
        buffer[(0, 0)].set_bg(Color::Green);

        dim_buffer(&mut buffer, 0.5);

        assert_eq!(buffer[(0, 0)].fg, Color::Rgb(100, 50, 25));
        assert_eq!(buffer[(0, 0)].bg, Color::DarkGray);
    }

    #[test]
    fn test_centered_rect() {
        let centered = centered_rect(40, 10, Rect::new(0, 0, 80, 24));

        assert_eq!(centered, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let centered = centered_rect(100, 50, Rect::new(0, 0, 30, 10));

        assert!(centered.width <= 28);
        assert!(centered.height <= 8);
    }
}
