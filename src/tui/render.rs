//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;

use crate::model::DashboardSnapshot;
use crate::refresh::RefreshMode;

use super::state::{AppState, InputMode, Tab};
use super::style::Styles;
use super::widgets::{
    render_breakdowns, render_campaigns, render_header, render_help, render_hourly_sparkline,
    render_metric_cards, render_quit_confirm, render_trend_chart,
};

/// Main render function.
pub fn render(
    frame: &mut Frame,
    state: &mut AppState,
    snapshot: &DashboardSnapshot,
    mode: RefreshMode,
) {
    let area = frame.area();

    // Main layout: header, content, key hints
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(10),   // Content area
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    render_header(frame, chunks[0], state, mode, snapshot.generated_at);
    render_content(frame, chunks[1], state, snapshot);
    render_keybar(frame, chunks[2], state);

    // Help popup (rendered last to overlay everything)
    if state.show_help {
        render_help(frame, area, state.current_tab, &mut state.help_scroll);
    }

    // Quit confirmation popup (rendered last to overlay everything)
    if state.show_quit_confirm {
        render_quit_confirm(frame, area);
    }
}

/// Renders content based on current tab.
fn render_content(frame: &mut Frame, area: Rect, state: &mut AppState, snapshot: &DashboardSnapshot) {
    match state.current_tab {
        Tab::Overview => render_overview(frame, area, snapshot),
        Tab::Campaigns => render_campaigns(frame, area, state, snapshot),
        Tab::Breakdowns => render_breakdowns(frame, area, snapshot),
    }
}

/// Overview tab: KPI cards on top, trend chart and hourly sparkline below.
fn render_overview(frame: &mut Frame, area: Rect, snapshot: &DashboardSnapshot) {
    // Card grid height depends on how many metrics the snapshot carries.
    let card_rows = snapshot.metrics.len().div_ceil(4).max(1);
    let cards_height = (card_rows * 4) as u16;

    let chunks = Layout::vertical([
        Constraint::Length(cards_height), // Metric cards
        Constraint::Min(8),               // Charts
    ])
    .split(area);

    render_metric_cards(frame, chunks[0], &snapshot.metrics);

    let charts =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).split(chunks[1]);
    render_trend_chart(frame, charts[0], &snapshot.trend);
    render_hourly_sparkline(frame, charts[1], &snapshot.hourly);
}

fn render_keybar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = match state.input_mode {
        InputMode::Filter => " Esc:cancel  Enter:apply  type to filter campaigns",
        InputMode::Normal => match state.current_tab {
            Tab::Campaigns => {
                " 1/2/3:tabs  /:filter  s:sort  o:reverse  d:dates  [ ]:page  e/E:export  r:live  ?:help  q:quit"
            }
            _ => " 1/2/3:tabs  r:live  ?:help  q:quit",
        },
    };
    frame.render_widget(Paragraph::new(hints).style(Styles::dim()), area);
}
