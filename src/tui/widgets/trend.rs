//! Trend chart and hourly sparkline for the overview tab.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Sparkline};

use crate::fmt;
use crate::model::TrendPoint;
use crate::tui::style::{Styles, Theme};

/// Renders the monthly performance trend as a three-series line chart.
///
/// All series share one y axis, so users and sessions run close to the
/// baseline next to revenue. That mirrors the raw numbers honestly; the
/// legend carries the series names.
pub fn render_trend_chart(frame: &mut Frame, area: Rect, trend: &[TrendPoint]) {
    let block = Block::default()
        .title(" Performance Trend (12 months) ")
        .borders(Borders::ALL)
        .style(Styles::default());
    if trend.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let revenue: Vec<(f64, f64)> = series(trend, |p| p.revenue);
    let users: Vec<(f64, f64)> = series(trend, |p| p.users);
    let sessions: Vec<(f64, f64)> = series(trend, |p| p.sessions);

    let max_y = revenue
        .iter()
        .chain(&users)
        .chain(&sessions)
        .map(|&(_, y)| y)
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let datasets = vec![
        Dataset::default()
            .name("Revenue")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(ratatui::style::Style::default().fg(Theme::REVENUE_COLOR))
            .data(&revenue),
        Dataset::default()
            .name("Users")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(ratatui::style::Style::default().fg(Theme::USERS_COLOR))
            .data(&users),
        Dataset::default()
            .name("Sessions")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(ratatui::style::Style::default().fg(Theme::SESSIONS_COLOR))
            .data(&sessions),
    ];

    let x_labels: Vec<String> = x_axis_labels(trend);
    let y_labels: Vec<String> = vec![
        "0".to_string(),
        fmt::format_compact(max_y / 2.0),
        fmt::format_compact(max_y),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Styles::dim())
                .bounds([0.0, (trend.len() - 1).max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Styles::dim())
                .bounds([0.0, max_y * 1.05])
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}

/// Renders today's sessions by two-hour slot as a sparkline.
pub fn render_hourly_sparkline(frame: &mut Frame, area: Rect, hourly: &[TrendPoint]) {
    let span = match (hourly.first(), hourly.last()) {
        (Some(first), Some(last)) => format!(" Sessions by Hour ({}-{}) ", first.label, last.label),
        _ => " Sessions by Hour ".to_string(),
    };
    let data: Vec<u64> = hourly.iter().map(|p| p.sessions.max(0.0) as u64).collect();
    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .title(span)
                .borders(Borders::ALL)
                .style(Styles::default()),
        )
        .data(data.iter().copied())
        .style(ratatui::style::Style::default().fg(Theme::BAR_COLOR));
    frame.render_widget(sparkline, area);
}

fn series(trend: &[TrendPoint], pick: impl Fn(&TrendPoint) -> f64) -> Vec<(f64, f64)> {
    trend
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, pick(p)))
        .collect()
}

/// First, middle, and last point labels; a full set would crowd the axis.
fn x_axis_labels(trend: &[TrendPoint]) -> Vec<String> {
    let mut labels = vec![trend[0].label.clone()];
    if trend.len() > 2 {
        labels.push(trend[trend.len() / 2].label.clone());
    }
    if trend.len() > 1 {
        labels.push(trend[trend.len() - 1].label.clone());
    }
    labels
}
