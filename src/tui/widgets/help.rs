//! Help popup widget with per-tab key and column descriptions.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::state::Tab;

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, tab: Tab, scroll: &mut usize) {
    // Popup size: 60% width, 80% height, clamped to 40-80 x 10-30
    let popup_width = (area.width * 60 / 100).clamp(40, 80);
    let popup_height = (area.height * 80 / 100).clamp(10, 30);

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let (title, content) = get_help_content(tab);
    let content_lines = content.len();

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let visible_height = chunks[0].height as usize;
    let max_scroll = content_lines.saturating_sub(visible_height);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0))
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, chunks[0]);

    let scroll_info = if max_scroll > 0 {
        format!(" [{}/{}]", *scroll + 1, max_scroll + 1)
    } else {
        String::new()
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" or ", Style::default().fg(Color::DarkGray)),
        Span::styled("H", Style::default().fg(Color::Yellow)),
        Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        Span::styled(", ", Style::default().fg(Color::DarkGray)),
        Span::styled("↑↓", Style::default().fg(Color::Yellow)),
        Span::styled(" to scroll", Style::default().fg(Color::DarkGray)),
        Span::styled(scroll_info, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(footer, chunks[1]);
}

/// Returns help title and content lines for the given tab.
fn get_help_content(tab: Tab) -> (&'static str, Vec<Line<'static>>) {
    let mut lines = global_lines();
    match tab {
        Tab::Overview => {
            lines.push(Line::from(Span::styled(
                "Metric Cards:",
                Style::default().fg(Color::Yellow),
            )));
            lines.extend([
                Line::from("Eight KPIs with change against the previous period"),
                Line::from("  ↑ green = up, ↓ red = down, → gray = flat"),
                Line::from(""),
            ]);
            lines.push(Line::from(Span::styled(
                "Charts:",
                Style::default().fg(Color::Yellow),
            )));
            lines.extend([
                Line::from("Performance Trend - monthly revenue, users and sessions"),
                Line::from("  all three series share one y axis"),
                Line::from("Sessions by Hour  - today's sessions in two-hour slots"),
                Line::from(""),
                Line::from("LIVE regenerates the snapshot with small random drifts on"),
                Line::from("every tick; STATIC freezes the numbers for reading"),
            ]);
            ("Overview Help (OVR)", lines)
        }
        Tab::Campaigns => {
            lines.push(Line::from(Span::styled(
                "Columns:",
                Style::default().fg(Color::Yellow),
            )));
            lines.extend([
                Line::from("Campaign    - campaign name"),
                Line::from("Impressions - ad views"),
                Line::from("Clicks      - ad clicks"),
                Line::from("CTR         - clicks / impressions"),
                Line::from("Spend       - ad spend"),
                Line::from("Revenue     - attributed revenue"),
                Line::from("ROAS        - revenue / spend multiplier"),
                Line::from("Status      - Active (green), Paused (yellow),"),
                Line::from("              Completed (gray)"),
                Line::from(""),
            ]);
            lines.push(Line::from(Span::styled(
                "Table keys:",
                Style::default().fg(Color::Yellow),
            )));
            lines.extend([
                Line::from("/        - filter by campaign name (substring, case-"),
                Line::from("           insensitive); Esc clears, Enter keeps it"),
                Line::from("s/S      - sort by the next column, o/O reverse direction"),
                Line::from("u/U      - back to the original order"),
                Line::from("d/D      - cycle date range (all, 7, 30, 90 days), x/X clears"),
                Line::from("[ and ]  - previous / next page"),
                Line::from("↑↓ or kj - move the selection"),
                Line::from("e        - export the filtered rows as CSV"),
                Line::from("E        - export the visible table as PDF"),
            ]);
            ("Campaigns Help (CMP)", lines)
        }
        Tab::Breakdowns => {
            lines.push(Line::from(Span::styled(
                "Panels:",
                Style::default().fg(Color::Yellow),
            )));
            lines.extend([
                Line::from("Traffic Sources / Devices / Age Groups - percent shares,"),
                Line::from("  bars scaled to the largest slice"),
                Line::from("Revenue by Region - top regions scaled to the largest"),
                Line::from("Conversion Funnel - stage totals with percent of the"),
                Line::from("  first stage, so the drop-off reads top to bottom"),
            ]);
            ("Breakdowns Help (BRK)", lines)
        }
    }
}

fn global_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Tabs: 1=Overview, 2=Campaigns, 3=Breakdowns (Tab/Shift+Tab cycle)",
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Navigation:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("r/R    - toggle LIVE / STATIC refresh"),
        Line::from("?/H    - this help"),
        Line::from("q/Q    - quit (asks first); Ctrl+C quits at once"),
        Line::from("Esc    - close popups, clear the status line"),
        Line::from(""),
    ]
}
