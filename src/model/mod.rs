//! Data model for the dashboard snapshot.
//!
//! Everything the dashboard displays comes from one [`DashboardSnapshot`]:
//!
//! - [`record`]: campaign table rows ([`CampaignRecord`])
//! - [`metric`]: KPI summary cards ([`MetricSummary`])
//! - [`chart`]: chart series points (trend, shares, regions)
//! - [`snapshot`]: the owning container, rebuilt wholesale on refresh
//!
//! Values are stored as raw numerics; display text is produced by the
//! [`crate::fmt`] helpers at render time. Snapshots are never mutated in
//! place: the refresh driver builds a complete replacement each tick.

mod chart;
mod metric;
mod record;
mod snapshot;

pub use chart::{RegionPoint, Slice, TrendPoint};
pub use metric::{MetricSummary, MetricValue, Trend};
pub use record::{CampaignRecord, CampaignStatus};
pub use snapshot::DashboardSnapshot;
