//! The dashboard snapshot: sole owner of all displayed data.

use serde::{Deserialize, Serialize};

use super::chart::{RegionPoint, Slice, TrendPoint};
use super::metric::MetricSummary;
use super::record::CampaignRecord;

/// Complete dashboard state at one instant.
///
/// The refresh driver replaces the whole snapshot on each live tick; the
/// presentation layer only ever borrows it. Campaign `id`s are unique
/// within one snapshot.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct DashboardSnapshot {
    /// Production time, epoch seconds.
    pub generated_at: i64,

    /// KPI summary cards, in display order.
    pub metrics: Vec<MetricSummary>,

    /// Monthly revenue/users/sessions trend, one point per month.
    pub trend: Vec<TrendPoint>,

    /// Activity by two-hour slot across one day.
    pub hourly: Vec<TrendPoint>,

    /// Traffic source shares, percent.
    pub traffic: Vec<Slice>,

    /// Device split shares, percent.
    pub devices: Vec<Slice>,

    /// Visitor age-group shares, percent.
    pub age_groups: Vec<Slice>,

    /// Top regions by revenue.
    pub regions: Vec<RegionPoint>,

    /// Conversion funnel stage totals.
    pub funnel: Vec<Slice>,

    /// Campaign performance table rows.
    pub campaigns: Vec<CampaignRecord>,
}
