//! Campaign table rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a campaign.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 3] = [
        CampaignStatus::Active,
        CampaignStatus::Paused,
        CampaignStatus::Completed,
    ];

    /// Lowercase wire form (`"active"`, `"paused"`, `"completed"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
        }
    }

    /// Capitalized label for table cells.
    pub fn label(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
            CampaignStatus::Completed => "Completed",
        }
    }
}

/// One row of the campaign performance table.
///
/// Derived fields (`ctr`, `roas`) are stored as generated, not recomputed:
/// the generator may emit values inconsistent with `clicks`/`impressions`
/// and consumers must not assume `ctr == clicks / impressions`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct CampaignRecord {
    /// Unique identifier within one snapshot.
    pub id: String,

    /// Display name; the target of the text filter.
    pub campaign: String,

    /// Ad impressions served.
    pub impressions: u64,

    /// Clicks received. Not guaranteed `<= impressions`.
    pub clicks: u64,

    /// Click-through rate, percent.
    pub ctr: f64,

    /// Spend in whole currency units.
    pub spend: f64,

    /// Attributed revenue in whole currency units.
    pub revenue: f64,

    /// Return on ad spend, typically `revenue / spend`.
    pub roas: f64,

    /// Lifecycle state.
    pub status: CampaignStatus,

    /// Date the row last changed.
    pub last_modified: NaiveDate,

    /// Optional campaign event date; the target of the date-range filter.
    /// Rows without one always pass an active date filter.
    pub event_date: Option<NaiveDate>,
}
