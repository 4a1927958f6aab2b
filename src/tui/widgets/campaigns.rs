//! The campaigns table: filterable, sortable, paginated.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::model::DashboardSnapshot;
use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::view::build_campaigns_view;

pub fn render_campaigns(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    snapshot: &DashboardSnapshot,
) {
    let view = build_campaigns_view(snapshot, &state.query);
    state.last_total = view.total;

    let row_count = view.table.rows.len();
    if row_count == 0 {
        state.selected = 0;
        state.campaigns_table_state.select(None);
    } else {
        if state.selected >= row_count {
            state.selected = row_count - 1;
        }
        state.campaigns_table_state.select(Some(state.selected));
    }

    let chunks = Layout::vertical([Constraint::Min(5), Constraint::Length(1)]).split(area);
    state.table_area = Some(chunks[0]);

    let block = Block::default()
        .title(view.table.title.clone())
        .borders(Borders::ALL)
        .style(Styles::default());

    if view.table.is_empty() {
        let empty = Paragraph::new("No campaigns match the current filter")
            .style(Styles::dim())
            .block(block);
        frame.render_widget(empty, chunks[0]);
    } else {
        let indicator = if view.table.sort_ascending { "▲" } else { "▼" };
        let header_cells: Vec<Cell> = view
            .table
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if view.table.sort_column == Some(i) {
                    Cell::from(format!("{h} {indicator}"))
                } else {
                    Cell::from(h.as_str())
                }
            })
            .collect();
        let header = Row::new(header_cells).style(Styles::table_header());

        let selected = state.campaigns_table_state.selected();
        let rows: Vec<Row> = view
            .table
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let cells: Vec<Cell> = row
                    .cells
                    .iter()
                    .map(|cell| {
                        if selected == Some(i) {
                            // The highlight style carries the row; plain spans
                            // keep the per-status colors from fighting it.
                            Cell::from(Span::raw(cell.text.as_str()))
                        } else {
                            let class = cell.style.unwrap_or(row.style);
                            Cell::from(Span::styled(cell.text.as_str(), Styles::from_class(class)))
                        }
                    })
                    .collect();
                Row::new(cells)
            })
            .collect();

        let constraints: Vec<Constraint> = view
            .table
            .widths
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                if i == 0 {
                    Constraint::Min(w)
                } else {
                    Constraint::Length(w)
                }
            })
            .collect();

        let table = Table::new(rows, constraints)
            .header(header)
            .block(block)
            .column_spacing(1)
            .row_highlight_style(Styles::selected());
        frame.render_stateful_widget(table, chunks[0], &mut state.campaigns_table_state);
    }

    let footer = format!(
        " {}  ·  {}  ·  {}",
        view.shown_line(),
        view.page_line(),
        state.date_preset.label()
    );
    frame.render_widget(Paragraph::new(footer).style(Styles::dim()), chunks[1]);
}
