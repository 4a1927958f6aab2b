//! Synthetic dashboard data.
//!
//! Everything the dashboard shows is generated in-process. [`Generator`]
//! owns the RNG (seedable for deterministic runs) and builds complete
//! [`DashboardSnapshot`]s; the per-tick variation of a held base snapshot
//! lives in [`perturb`]. [`sample_campaigns`] is the fixed six-row fixture
//! used across the test suite.

mod perturb;

use chrono::{Days, Local, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{
    CampaignRecord, CampaignStatus, DashboardSnapshot, MetricSummary, MetricValue, RegionPoint,
    Slice, Trend, TrendPoint,
};

/// Campaign names, in id order. `--campaigns` may select a prefix.
pub const CAMPAIGN_NAMES: [&str; 12] = [
    "Summer Sale 2024",
    "Holiday Campaign",
    "Back to School",
    "Brand Awareness Q4",
    "Product Launch",
    "Retargeting Campaign",
    "Valentine's Day Special",
    "Spring Collection",
    "Customer Loyalty Program",
    "Flash Sale Weekend",
    "Influencer Partnership",
    "Email Newsletter",
];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Seeded source of dashboard snapshots.
pub struct Generator {
    rng: StdRng,
    campaign_count: usize,
}

impl Generator {
    /// `seed: None` draws from entropy. `campaign_count` is capped to the
    /// available campaign names.
    pub fn new(seed: Option<u64>, campaign_count: usize) -> Generator {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Generator {
            rng,
            campaign_count: campaign_count.clamp(1, CAMPAIGN_NAMES.len()),
        }
    }

    /// Build one complete fresh snapshot.
    pub fn snapshot(&mut self) -> DashboardSnapshot {
        let today = Local::now().date_naive();
        let snapshot = DashboardSnapshot {
            generated_at: Utc::now().timestamp(),
            metrics: base_metrics(),
            trend: base_trend(),
            hourly: self.hourly(),
            traffic: self.traffic(),
            devices: self.devices(),
            age_groups: self.age_groups(),
            regions: self.regions(),
            funnel: base_funnel(),
            campaigns: self.campaigns(today),
        };
        tracing::debug!(campaigns = snapshot.campaigns.len(), "generated snapshot");
        snapshot
    }

    fn campaigns(&mut self, today: NaiveDate) -> Vec<CampaignRecord> {
        CAMPAIGN_NAMES
            .iter()
            .take(self.campaign_count)
            .enumerate()
            .map(|(idx, name)| {
                let scale = self.rng.gen_range(0.8..=1.2);
                let impressions =
                    ((100_000.0 + 40_000.0 * idx as f64) * scale).round() as u64;
                let ctr = round2(self.rng.gen_range(2.0..=10.0));
                // Clicks land near impressions * ctr but are drawn with their
                // own jitter: consumers must not assume the derived fields
                // are consistent.
                let clicks = (impressions as f64 * ctr / 100.0
                    * self.rng.gen_range(0.9..=1.1))
                .round() as u64;
                let spend = ((1_000.0 + 700.0 * idx as f64) * scale).round();
                let roas = round2(self.rng.gen_range(2.0..=4.0));
                let revenue = (spend * roas).round();
                let status = self.status();
                let last_modified = days_ago(today, self.rng.gen_range(0..30));
                // A few campaigns have no scheduled event; the date filter
                // lets those through.
                let event_date = if idx % 5 == 4 {
                    None
                } else {
                    Some(days_ago(today, self.rng.gen_range(0..90)))
                };
                CampaignRecord {
                    id: (idx + 1).to_string(),
                    campaign: name.to_string(),
                    impressions,
                    clicks,
                    ctr,
                    spend,
                    revenue,
                    roas,
                    status,
                    last_modified,
                    event_date,
                }
            })
            .collect()
    }

    fn status(&mut self) -> CampaignStatus {
        match self.rng.gen_range(0..100) {
            0..=54 => CampaignStatus::Active,
            55..=79 => CampaignStatus::Paused,
            _ => CampaignStatus::Completed,
        }
    }

    pub(crate) fn hourly(&mut self) -> Vec<TrendPoint> {
        (0..12)
            .map(|slot| TrendPoint {
                label: format!("{:02}:00", slot * 2),
                revenue: self.rng.gen_range(500.0_f64..=3500.0).round(),
                users: self.rng.gen_range(300.0_f64..=2300.0).round(),
                sessions: self.rng.gen_range(400.0_f64..=2900.0).round(),
            })
            .collect()
    }

    pub(crate) fn traffic(&mut self) -> Vec<Slice> {
        vec![
            Slice::new("Organic Search", self.share(35.0, 10.0)),
            Slice::new("Paid Search", self.share(28.0, 8.0)),
            Slice::new("Social Media", self.share(20.0, 6.0)),
            Slice::new("Email", self.share(12.0, 5.0)),
            Slice::new("Direct", self.share(5.0, 3.0)),
        ]
    }

    pub(crate) fn devices(&mut self) -> Vec<Slice> {
        vec![
            Slice::new("Desktop", self.share(45.0, 10.0)),
            Slice::new("Mobile", self.share(40.0, 10.0)),
            Slice::new("Tablet", self.share(15.0, 5.0)),
        ]
    }

    pub(crate) fn age_groups(&mut self) -> Vec<Slice> {
        vec![
            Slice::new("18-24", self.share(15.0, 5.0)),
            Slice::new("25-34", self.share(28.0, 6.0)),
            Slice::new("35-44", self.share(22.0, 5.0)),
            Slice::new("45-54", self.share(18.0, 4.0)),
            Slice::new("55+", self.share(12.0, 4.0)),
        ]
    }

    pub(crate) fn regions(&mut self) -> Vec<RegionPoint> {
        let bands: [(&str, f64, f64); 5] = [
            ("United States", 45_000.0, 20_000.0),
            ("United Kingdom", 28_000.0, 12_000.0),
            ("Germany", 22_000.0, 10_000.0),
            ("France", 18_000.0, 8_000.0),
            ("Japan", 15_000.0, 7_000.0),
        ];
        bands
            .iter()
            .map(|(label, base, spread)| RegionPoint {
                label: label.to_string(),
                revenue: (base + self.rng.gen_range(0.0..=*spread)).round(),
            })
            .collect()
    }

    /// Base plus a positive draw up to `spread`, one decimal.
    fn share(&mut self, base: f64, spread: f64) -> f64 {
        round1(base + self.rng.gen_range(0.0..=spread))
    }

    pub(crate) fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

/// The eight KPI cards with their reference values.
pub fn base_metrics() -> Vec<MetricSummary> {
    fn card(label: &str, value: MetricValue, change_pct: f64, trend: Trend) -> MetricSummary {
        MetricSummary { label: label.to_string(), value, change_pct, trend }
    }
    vec![
        card("Total Revenue", MetricValue::Currency(284_320.0), 12.5, Trend::Up),
        card("Active Users", MetricValue::Count(28_450.0), 8.2, Trend::Up),
        card("Conversion Rate", MetricValue::Percent(3.24), -2.1, Trend::Down),
        card("Avg Order Value", MetricValue::Currency(156.80), 5.7, Trend::Up),
        card("Total Sessions", MetricValue::Count(142_680.0), 15.3, Trend::Up),
        card("Bounce Rate", MetricValue::Percent(32.1), -4.2, Trend::Up),
        card("Page Views", MetricValue::CompactCount(2_400_000.0), 18.7, Trend::Up),
        card("Avg Session", MetricValue::DurationSecs(272.0), 3.8, Trend::Up),
    ]
}

/// Twelve months of revenue/users/sessions on smooth seasonal curves.
pub fn base_trend() -> Vec<TrendPoint> {
    MONTHS
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let i = idx as f64;
            TrendPoint {
                label: label.to_string(),
                revenue: (150_000.0 + i * 15_000.0 + i.sin() * 30_000.0).round(),
                users: (25_000.0 + i * 2_000.0 + i.cos() * 5_000.0).round(),
                sessions: (45_000.0 + i * 3_000.0 + (i * 1.5).sin() * 8_000.0).round(),
            }
        })
        .collect()
}

/// Conversion funnel stage totals (constant per snapshot).
pub fn base_funnel() -> Vec<Slice> {
    vec![
        Slice::new("Visitors", 100_000.0),
        Slice::new("Sign-ups", 45_000.0),
        Slice::new("Trials", 12_000.0),
        Slice::new("Purchases", 8_500.0),
        Slice::new("Repeat Customers", 6_200.0),
    ]
}

/// Fixed six-campaign fixture with known values, for tests and demos.
pub fn sample_campaigns() -> Vec<CampaignRecord> {
    fn row(
        id: &str,
        campaign: &str,
        impressions: u64,
        clicks: u64,
        ctr: f64,
        spend: f64,
        revenue: f64,
        roas: f64,
        status: CampaignStatus,
        modified: &str,
        event: Option<&str>,
    ) -> CampaignRecord {
        CampaignRecord {
            id: id.to_string(),
            campaign: campaign.to_string(),
            impressions,
            clicks,
            ctr,
            spend,
            revenue,
            roas,
            status,
            last_modified: parse_date(modified),
            event_date: event.map(parse_date),
        }
    }
    use CampaignStatus::{Active, Completed, Paused};
    vec![
        row("1", "Summer Sale 2024", 125_000, 3_250, 2.6, 4_500.0, 18_750.0, 4.17, Active, "2024-01-15", Some("2024-01-15")),
        row("2", "Holiday Campaign", 89_000, 2_890, 3.2, 3_200.0, 14_600.0, 4.56, Active, "2024-01-14", Some("2024-01-14")),
        row("3", "Back to School", 67_000, 1_340, 2.0, 2_100.0, 8_900.0, 4.24, Paused, "2024-01-13", Some("2024-01-13")),
        row("4", "Brand Awareness Q4", 156_000, 4_680, 3.0, 6_700.0, 22_300.0, 3.33, Active, "2024-01-12", Some("2024-01-12")),
        row("5", "Product Launch", 98_000, 2_940, 3.0, 4_200.0, 16_800.0, 4.0, Completed, "2024-01-11", None),
        row("6", "Retargeting Campaign", 45_000, 1_800, 4.0, 1_800.0, 9_200.0, 5.11, Active, "2024-01-10", None),
    ]
}

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_default()
}

fn days_ago(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).unwrap_or(today)
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
