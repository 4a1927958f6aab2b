//! Header bar showing time, refresh mode, and tabs.

use chrono::{DateTime, Local, TimeZone};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::refresh::RefreshMode;
use crate::tui::state::{AppState, InputMode, Tab};
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    mode: RefreshMode,
    generated_at: i64,
) {
    let chunks = Layout::horizontal([
        Constraint::Length(22), // Time
        Constraint::Length(10), // Refresh mode
        Constraint::Min(20),    // Tabs
        Constraint::Length(42), // Filter/Status
    ])
    .split(area);

    // Snapshot time
    let time_str = Local
        .timestamp_opt(generated_at, 0)
        .single()
        .map(|dt: DateTime<Local>| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "----".to_string());
    let time = Paragraph::new(time_str).style(Styles::header());
    frame.render_widget(time, chunks[0]);

    // Refresh mode
    let mode_style = match mode {
        RefreshMode::Live => Styles::header_live(),
        RefreshMode::Static => Styles::header(),
    };
    let mode_text = format!(" {} ", mode.label());
    frame.render_widget(Paragraph::new(mode_text).style(mode_style), chunks[1]);

    // Tabs
    let tabs: Vec<Span> = Tab::all()
        .iter()
        .enumerate()
        .flat_map(|(i, tab)| {
            let style = if *tab == state.current_tab {
                Styles::tab_active()
            } else {
                Styles::tab_inactive()
            };
            let num = format!(" {}:", i + 1);
            let name = format!("{} ", tab.name());
            vec![Span::styled(num, Styles::dim()), Span::styled(name, style)]
        })
        .collect();
    let tabs_widget = Paragraph::new(Line::from(tabs)).style(Styles::header());
    frame.render_widget(tabs_widget, chunks[2]);

    // Filter input or status message
    let (right_content, right_style) = if let Some(msg) = &state.status_message {
        (msg.clone(), Styles::warning())
    } else {
        match state.input_mode {
            InputMode::Filter => (
                format!("Filter: {}█", state.filter_input),
                Styles::filter_input(),
            ),
            InputMode::Normal => {
                let text = if state.query.filter.query.is_empty() {
                    String::new()
                } else {
                    format!("/{}", state.query.filter.query)
                };
                (text, Styles::header())
            }
        }
    };
    frame.render_widget(Paragraph::new(right_content).style(right_style), chunks[3]);
}
