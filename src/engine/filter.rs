//! Filter stage: text and date-range predicates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::CampaignRecord;

/// Inclusive date interval with independently optional bounds.
///
/// An absent bound is unbounded on that side. Collaborators are expected to
/// hand over `from <= to`, but an inverted interval is tolerated: it simply
/// matches no dated record.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whether a record's optional event date passes this interval.
    ///
    /// Current policy: records without a date always pass, even under an
    /// active interval.
    pub fn contains_opt(&self, date: Option<NaiveDate>) -> bool {
        let Some(d) = date else {
            return true;
        };
        if self.from.is_some_and(|from| d < from) {
            return false;
        }
        if self.to.is_some_and(|to| d > to) {
            return false;
        }
        true
    }
}

/// Free-text query plus optional date interval.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    /// Matched case-insensitively as a substring of the campaign name only.
    pub query: String,
    pub dates: DateRange,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.dates.is_unbounded()
    }

    pub fn matches(&self, record: &CampaignRecord) -> bool {
        if !self.query.is_empty() {
            let q = self.query.to_lowercase();
            if !record.campaign.to_lowercase().contains(&q) {
                return false;
            }
        }
        self.dates.contains_opt(record.event_date)
    }
}

/// Reduce `records` to the subset matching `filter`, preserving input order.
/// An empty filter yields every record; no stage here ever reorders.
pub fn filter<'a>(records: &'a [CampaignRecord], filter: &FilterState) -> Vec<&'a CampaignRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}
