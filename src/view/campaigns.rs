//! Campaign performance table view.

use crate::engine::{self, SortDirection, SortField, TableQuery};
use crate::fmt;
use crate::model::{CampaignRecord, CampaignStatus, DashboardSnapshot};
use crate::view::common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};

pub const TITLE: &str = "Campaign Performance";

const HEADERS: [&str; 8] = [
    "Campaign",
    "Impressions",
    "Clicks",
    "CTR",
    "Spend",
    "Revenue",
    "ROAS",
    "Status",
];

const WIDTHS: [u16; 8] = [24, 11, 8, 7, 10, 10, 6, 9];

/// Campaign table plus the pagination readout for the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignsView {
    pub table: TableViewModel<String>,
    /// Rows matching the filter, before paging.
    pub total: usize,
    /// Clamped 1-based page number.
    pub page: usize,
    pub total_pages: usize,
    /// 1-based bounds of the visible slice; `(0, 0)` when empty.
    pub shown: (usize, usize),
}

impl CampaignsView {
    /// `Showing X to Y of Z entries` footer line.
    pub fn shown_line(&self) -> String {
        let (first, last) = self.shown;
        format!("Showing {} to {} of {} entries", first, last, self.total)
    }

    pub fn page_line(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

fn row_style(status: CampaignStatus) -> RowStyleClass {
    match status {
        CampaignStatus::Active => RowStyleClass::Active,
        CampaignStatus::Paused => RowStyleClass::Warning,
        CampaignStatus::Completed => RowStyleClass::Dimmed,
    }
}

fn cells(record: &CampaignRecord) -> Vec<ViewCell> {
    vec![
        ViewCell::styled(record.campaign.clone(), RowStyleClass::Normal),
        ViewCell::plain(fmt::group_thousands(record.impressions)),
        ViewCell::plain(fmt::group_thousands(record.clicks)),
        ViewCell::plain(fmt::format_percent(record.ctr, 1)),
        ViewCell::plain(fmt::format_currency(record.spend)),
        ViewCell::plain(fmt::format_currency(record.revenue)),
        ViewCell::plain(fmt::format_roas(record.roas)),
        ViewCell::styled(record.status.label().to_string(), row_style(record.status)),
    ]
}

/// Run the engine over the snapshot's campaigns and format one page of rows.
pub fn build_campaigns_view(snapshot: &DashboardSnapshot, query: &TableQuery) -> CampaignsView {
    let matched = engine::filtered_sorted(&snapshot.campaigns, query);
    let total = matched.len();
    let visible = engine::paginate(&matched, query.page);

    let rows = visible
        .iter()
        .map(|record| ViewRow {
            id: record.id.clone(),
            style: row_style(record.status),
            cells: cells(record),
        })
        .collect();

    let title = if query.filter.query.is_empty() {
        format!(" {} [{} rows] ", TITLE, total)
    } else {
        format!(" {} (filter: {}) [{} rows] ", TITLE, query.filter.query, total)
    };

    let sort_column = query
        .sort
        .field
        .map(|f| SortField::ALL.iter().position(|&c| c == f).unwrap_or(0));

    CampaignsView {
        table: TableViewModel {
            title,
            headers: HEADERS.iter().map(|h| h.to_string()).collect(),
            widths: WIDTHS.to_vec(),
            rows,
            sort_column,
            sort_ascending: query.sort.direction == SortDirection::Ascending,
        },
        total,
        page: query.page.clamped(total),
        total_pages: query.page.total_pages(total),
        shown: query.page.shown_range(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SortField;
    use crate::generator::sample_campaigns;

    fn snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            campaigns: sample_campaigns(),
            ..DashboardSnapshot::default()
        }
    }

    #[test]
    fn test_build_formats_first_row() {
        let view = build_campaigns_view(&snapshot(), &TableQuery::new(8));
        let texts: Vec<&str> = view.table.rows[0]
            .cells
            .iter()
            .map(|c| c.text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec![
                "Summer Sale 2024",
                "125,000",
                "3,250",
                "2.6%",
                "$4,500",
                "$18,750",
                "4.17x",
                "Active",
            ]
        );
        assert_eq!(view.table.rows[0].style, RowStyleClass::Active);
    }

    #[test]
    fn test_title_embeds_filter_and_total() {
        let mut query = TableQuery::new(8);
        query.set_query("sale");
        let view = build_campaigns_view(&snapshot(), &query);
        assert_eq!(view.table.title, " Campaign Performance (filter: sale) [1 rows] ");
        assert_eq!(view.total, 1);
    }

    #[test]
    fn test_pagination_readout() {
        let mut query = TableQuery::new(4);
        query.page.page = 2;
        let view = build_campaigns_view(&snapshot(), &query);
        assert_eq!(view.page, 2);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.shown, (5, 6));
        assert_eq!(view.shown_line(), "Showing 5 to 6 of 6 entries");
        assert_eq!(view.page_line(), "Page 2 of 2");
        assert_eq!(view.table.rows.len(), 2);
    }

    #[test]
    fn test_sort_column_tracks_query() {
        let mut query = TableQuery::new(8);
        let view = build_campaigns_view(&snapshot(), &query);
        assert_eq!(view.table.sort_column, None);

        query.sort_by(SortField::Revenue);
        let view = build_campaigns_view(&snapshot(), &query);
        assert_eq!(view.table.sort_column, Some(5));
        assert!(view.table.sort_ascending);

        query.sort_by(SortField::Revenue);
        let view = build_campaigns_view(&snapshot(), &query);
        assert!(!view.table.sort_ascending);
    }

    #[test]
    fn test_paused_and_completed_row_styles() {
        let view = build_campaigns_view(&snapshot(), &TableQuery::new(8));
        let styles: Vec<RowStyleClass> = view.table.rows.iter().map(|r| r.style).collect();
        assert!(styles.contains(&RowStyleClass::Warning));
        assert!(styles.contains(&RowStyleClass::Dimmed));
    }

    #[test]
    fn test_empty_filter_result_keeps_page_one_of_one() {
        let mut query = TableQuery::new(8);
        query.set_query("no such campaign");
        let view = build_campaigns_view(&snapshot(), &query);
        assert!(view.table.is_empty());
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.shown, (0, 0));
    }
}
