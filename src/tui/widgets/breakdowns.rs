//! Breakdown panels: audience shares, regional revenue, conversion funnel.
//!
//! All five panels are plain text bars scaled to the panel width. Shares
//! scale against the largest slice; funnel stages scale against the first
//! stage so the drop-off reads top to bottom.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::fmt;
use crate::model::{DashboardSnapshot, RegionPoint, Slice};
use crate::tui::style::{Styles, Theme};

pub fn render_breakdowns(frame: &mut Frame, area: Rect, snapshot: &DashboardSnapshot) {
    let rows = Layout::vertical([Constraint::Ratio(1, 2); 2]).split(area);
    let top = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(rows[0]);
    let bottom = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(rows[1]);

    render_share_panel(frame, top[0], " Traffic Sources ", &snapshot.traffic);
    render_share_panel(frame, top[1], " Devices ", &snapshot.devices);
    render_share_panel(frame, top[2], " Age Groups ", &snapshot.age_groups);
    render_regions_panel(frame, bottom[0], &snapshot.regions);
    render_funnel_panel(frame, bottom[1], &snapshot.funnel);
}

fn render_share_panel(frame: &mut Frame, area: Rect, title: &str, slices: &[Slice]) {
    let max = slices.iter().map(|s| s.value).fold(0.0_f64, f64::max).max(1.0);
    let bar_max = area.width.saturating_sub(26).max(4) as f64;
    let lines: Vec<Line> = slices
        .iter()
        .map(|s| {
            let len = (s.value / max * bar_max).round() as usize;
            Line::from(vec![
                Span::raw(format!("{:<14} ", fmt::truncate(&s.label, 13))),
                Span::raw(format!("{:>5.1}% ", s.value)),
                Span::styled("█".repeat(len), Style::default().fg(Theme::BAR_COLOR)),
            ])
        })
        .collect();
    render_panel(frame, area, title, lines);
}

fn render_regions_panel(frame: &mut Frame, area: Rect, regions: &[RegionPoint]) {
    let max = regions.iter().map(|r| r.revenue).fold(0.0_f64, f64::max).max(1.0);
    let bar_max = area.width.saturating_sub(27).max(4) as f64;
    let lines: Vec<Line> = regions
        .iter()
        .map(|r| {
            let len = (r.revenue / max * bar_max).round() as usize;
            Line::from(vec![
                Span::raw(format!("{:<14} ", fmt::truncate(&r.label, 13))),
                Span::raw(format!("{:>7} ", format!("${}", fmt::format_compact(r.revenue)))),
                Span::styled("█".repeat(len), Style::default().fg(Theme::REVENUE_COLOR)),
            ])
        })
        .collect();
    render_panel(frame, area, " Revenue by Region ", lines);
}

fn render_funnel_panel(frame: &mut Frame, area: Rect, funnel: &[Slice]) {
    let first = funnel.first().map(|s| s.value).unwrap_or(0.0).max(1.0);
    let bar_max = area.width.saturating_sub(34).max(4) as f64;
    let lines: Vec<Line> = funnel
        .iter()
        .map(|s| {
            let len = (s.value / first * bar_max).round() as usize;
            let pct = s.value / first * 100.0;
            Line::from(vec![
                Span::raw(format!("{:<14} ", fmt::truncate(&s.label, 13))),
                Span::raw(format!("{:>8} ", fmt::format_count(s.value))),
                Span::styled(format!("{:>6} ", fmt::format_percent(pct, 1)), Styles::dim()),
                Span::styled("█".repeat(len), Style::default().fg(Theme::BAR_COLOR)),
            ])
        })
        .collect();
    render_panel(frame, area, " Conversion Funnel ", lines);
}

fn render_panel(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Styles::default());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
