//! The tabular data engine: filter → sort → paginate.
//!
//! Every stage is a pure function over read-only record slices. The engine
//! owns no data: the snapshot owns the records, the presentation layer owns
//! the [`TableQuery`] it passes in. Export consumers take the full
//! filtered+sorted sequence ([`filtered_sorted`]); the page slice is only
//! for display.

mod filter;
mod page;
mod sort;

pub use filter::{DateRange, FilterState, filter};
pub use page::{PageState, paginate};
pub use sort::{SortDirection, SortField, SortKey, SortState, sort};

use crate::model::CampaignRecord;

/// Combined per-table query state: filter, sort, page.
///
/// The mutators uphold the caller contract from the pagination stage:
/// any filter or sort change resets the page to 1.
#[derive(Clone, Debug)]
pub struct TableQuery {
    pub filter: FilterState,
    pub sort: SortState,
    pub page: PageState,
}

impl TableQuery {
    pub fn new(page_size: usize) -> TableQuery {
        TableQuery {
            filter: FilterState::default(),
            sort: SortState::default(),
            page: PageState::new(page_size),
        }
    }

    /// Replace the text query; resets to page 1.
    pub fn set_query(&mut self, query: &str) {
        self.filter.query = query.to_string();
        self.page.reset();
    }

    /// Replace the date interval; resets to page 1.
    pub fn set_dates(&mut self, dates: DateRange) {
        self.filter.dates = dates;
        self.page.reset();
    }

    /// Header-click semantics: a new field starts ascending, the active
    /// field toggles direction. Resets to page 1.
    pub fn sort_by(&mut self, field: SortField) {
        self.sort.apply(field);
        self.page.reset();
    }

    /// Cycle the sort field through every column and back to none.
    /// A newly selected field starts ascending. Resets to page 1.
    pub fn cycle_sort_field(&mut self) {
        self.sort.field = match self.sort.field {
            None => Some(SortField::ALL[0]),
            Some(f) => {
                let idx = SortField::ALL.iter().position(|&c| c == f).unwrap_or(0);
                SortField::ALL.get(idx + 1).copied()
            }
        };
        self.sort.direction = SortDirection::Ascending;
        self.page.reset();
    }

    /// Flip sort direction (no-op without an active field). Resets to page 1.
    pub fn toggle_direction(&mut self) {
        if self.sort.field.is_some() {
            self.sort.direction = self.sort.direction.toggled();
            self.page.reset();
        }
    }

    /// Drop the active sort, restoring input order. Resets to page 1.
    pub fn clear_sort(&mut self) {
        self.sort = SortState::default();
        self.page.reset();
    }
}

/// Run filter then sort — the full result sequence exports operate on.
pub fn filtered_sorted<'a>(
    records: &'a [CampaignRecord],
    query: &TableQuery,
) -> Vec<&'a CampaignRecord> {
    sort(filter(records, &query.filter), query.sort)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::sample_campaigns;

    #[test]
    fn test_query_mutations_reset_page() {
        let mut q = TableQuery::new(2);
        q.page.page = 3;
        q.set_query("sale");
        assert_eq!(q.page.page, 1);

        q.page.page = 3;
        q.sort_by(SortField::Revenue);
        assert_eq!(q.page.page, 1);

        q.page.page = 3;
        q.toggle_direction();
        assert_eq!(q.page.page, 1);

        q.page.page = 3;
        q.clear_sort();
        assert_eq!(q.page.page, 1);
    }

    #[test]
    fn test_toggle_direction_without_field_keeps_page() {
        let mut q = TableQuery::new(2);
        q.page.page = 2;
        q.toggle_direction();
        assert_eq!(q.sort.field, None);
        assert_eq!(q.page.page, 2);
    }

    #[test]
    fn test_cycle_sort_field_wraps_to_none() {
        let mut q = TableQuery::new(8);
        assert_eq!(q.sort.field, None);
        for field in SortField::ALL {
            q.cycle_sort_field();
            assert_eq!(q.sort.field, Some(field));
            assert_eq!(q.sort.direction, SortDirection::Ascending);
        }
        q.cycle_sort_field();
        assert_eq!(q.sort.field, None);
    }

    #[test]
    fn test_filtered_sorted_applies_both_stages() {
        let records = sample_campaigns();
        let mut q = TableQuery::new(8);
        q.set_query("campaign");
        q.sort_by(SortField::Revenue);
        q.toggle_direction();

        let rows = filtered_sorted(&records, &q);
        assert!(!rows.is_empty());
        assert!(
            rows.iter()
                .all(|r| r.campaign.to_lowercase().contains("campaign"))
        );
        for pair in rows.windows(2) {
            assert!(pair[0].revenue >= pair[1].revenue);
        }
    }

    #[test]
    fn test_filter_sort_page_pipeline() {
        let records: Vec<CampaignRecord> = sample_campaigns().into_iter().take(2).collect();

        let mut q = TableQuery::new(1);
        q.set_query("sale");
        let rows = filtered_sorted(&records, &q);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].campaign, "Summer Sale 2024");

        q.set_query("");
        q.sort_by(SortField::Revenue);
        q.toggle_direction();
        let rows = filtered_sorted(&records, &q);
        assert_eq!(rows[0].campaign, "Summer Sale 2024");
        assert_eq!(rows[1].campaign, "Holiday Campaign");

        q.page.page = 2;
        let page = paginate(&rows, q.page);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].campaign, "Holiday Campaign");
    }
}
