//! Quit confirmation popup.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::style::Styles;

/// Renders a centered quit confirmation popup over a cleared region.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect) {
    let width = (area.width / 2).clamp(34, 48).min(area.width);
    let height = 7.min(area.height);
    let popup = Rect::new(
        area.width.saturating_sub(width) / 2,
        area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Quit ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let key = |k: &'static str| Span::styled(k, Styles::warning());
    let hint = |t: &'static str| Span::styled(t, Styles::dim());
    let lines = vec![
        Line::from("Quit adtop?"),
        Line::from(""),
        Line::from(vec![key("Enter"), hint(" or "), key("q"), hint(" confirms")]),
        Line::from(vec![key("Esc"), hint(" or "), key("n"), hint(" cancels")]),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
