//! KPI metric cards for the overview tab.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{MetricSummary, Trend};
use crate::tui::style::Styles;

/// Renders the metric summaries as a grid of bordered cards, four per row.
pub fn render_metric_cards(frame: &mut Frame, area: Rect, metrics: &[MetricSummary]) {
    let row_count = metrics.len().div_ceil(4).max(1);
    let rows = Layout::vertical(vec![Constraint::Ratio(1, row_count as u32); row_count])
        .split(area);

    for (row_idx, chunk) in metrics.chunks(4).enumerate() {
        let cols = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(rows[row_idx]);
        for (col_idx, metric) in chunk.iter().enumerate() {
            render_card(frame, cols[col_idx], metric);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, metric: &MetricSummary) {
    let block = Block::default()
        .title(format!(" {} ", metric.label))
        .borders(Borders::ALL)
        .border_style(Styles::dim());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let change_style = match metric.trend {
        Trend::Up => Styles::positive(),
        Trend::Down => Styles::negative(),
        Trend::Neutral => Styles::dim(),
    };
    let lines = vec![
        Line::from(Span::styled(metric.display_value(), Styles::metric_value())),
        Line::from(vec![
            Span::styled(metric.trend.glyph(), change_style),
            Span::raw(" "),
            Span::styled(metric.display_change(), change_style),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
