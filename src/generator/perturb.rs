//! Per-tick variation of a base snapshot.
//!
//! Live mode never mutates the displayed snapshot: each tick builds a full
//! replacement from the held base, so values wander inside fixed bands
//! around the base instead of drifting without bound.

use chrono::Utc;
use rand::Rng;
use rand::rngs::StdRng;

use super::{Generator, round2};
use crate::model::{CampaignRecord, DashboardSnapshot, MetricSummary, Trend, TrendPoint};

/// Band for campaign volume fields (impressions, clicks, spend, revenue).
const VOLUME_BAND: f64 = 0.02;

/// Band for rates and series values (ctr, roas, metrics, trend, hourly).
const RATE_BAND: f64 = 0.05;

impl Generator {
    /// Build the next live snapshot by varying `base` within the bands.
    /// Identities (ids, names, statuses, dates) carry over unchanged;
    /// share-style series are re-drawn from their generator bands.
    pub fn perturb(&mut self, base: &DashboardSnapshot) -> DashboardSnapshot {
        let metrics = {
            let rng = self.rng();
            base.metrics.iter().map(|m| vary_metric(rng, m)).collect()
        };
        let trend = {
            let rng = self.rng();
            base.trend.iter().map(|p| vary_point(rng, p)).collect()
        };
        let hourly = {
            let rng = self.rng();
            base.hourly.iter().map(|p| vary_point(rng, p)).collect()
        };
        let campaigns = {
            let rng = self.rng();
            base.campaigns.iter().map(|c| vary_campaign(rng, c)).collect()
        };
        DashboardSnapshot {
            generated_at: Utc::now().timestamp(),
            metrics,
            trend,
            hourly,
            traffic: self.traffic(),
            devices: self.devices(),
            age_groups: self.age_groups(),
            regions: self.regions(),
            funnel: base.funnel.clone(),
            campaigns,
        }
    }
}

fn vary(rng: &mut StdRng, v: f64, band: f64) -> f64 {
    v * rng.gen_range(1.0 - band..=1.0 + band)
}

fn vary_metric(rng: &mut StdRng, m: &MetricSummary) -> MetricSummary {
    let raw = vary(rng, m.value.raw(), RATE_BAND);
    let magnitude = rng.gen_range(1.0..=16.0);
    let change_pct = round2(if rng.gen_bool(0.5) { magnitude } else { -magnitude });
    MetricSummary {
        label: m.label.clone(),
        value: m.value.with_raw(round2(raw)),
        change_pct,
        trend: if change_pct >= 0.0 { Trend::Up } else { Trend::Down },
    }
}

fn vary_point(rng: &mut StdRng, p: &TrendPoint) -> TrendPoint {
    TrendPoint {
        label: p.label.clone(),
        revenue: vary(rng, p.revenue, RATE_BAND).round(),
        users: vary(rng, p.users, RATE_BAND).round(),
        sessions: vary(rng, p.sessions, RATE_BAND).round(),
    }
}

fn vary_campaign(rng: &mut StdRng, c: &CampaignRecord) -> CampaignRecord {
    CampaignRecord {
        id: c.id.clone(),
        campaign: c.campaign.clone(),
        impressions: vary(rng, c.impressions as f64, VOLUME_BAND).round() as u64,
        clicks: vary(rng, c.clicks as f64, VOLUME_BAND).round() as u64,
        ctr: round2(vary(rng, c.ctr, RATE_BAND)),
        spend: vary(rng, c.spend, VOLUME_BAND).round(),
        revenue: vary(rng, c.revenue, VOLUME_BAND).round(),
        roas: round2(vary(rng, c.roas, RATE_BAND)),
        status: c.status,
        last_modified: c.last_modified,
        event_date: c.event_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perturbed_campaigns_stay_in_band() {
        let mut g = Generator::new(Some(11), 12);
        let base = g.snapshot();
        let next = g.perturb(&base);
        assert_eq!(next.campaigns.len(), base.campaigns.len());
        for (b, n) in base.campaigns.iter().zip(&next.campaigns) {
            assert_eq!(b.id, n.id);
            assert_eq!(b.campaign, n.campaign);
            assert_eq!(b.status, n.status);
            assert_eq!(b.event_date, n.event_date);
            let rel = (n.impressions as f64 - b.impressions as f64).abs()
                / b.impressions as f64;
            assert!(rel <= VOLUME_BAND + 0.001, "impressions moved {:.4}", rel);
            let rel = (n.ctr - b.ctr).abs() / b.ctr;
            assert!(rel <= RATE_BAND + 0.01, "ctr moved {:.4}", rel);
        }
    }

    #[test]
    fn test_perturbation_centers_on_base_not_previous() {
        let mut g = Generator::new(Some(5), 6);
        let base = g.snapshot();
        // Many ticks from the same base: values must stay inside the band
        // relative to base, i.e. no random-walk drift.
        let mut current = g.perturb(&base);
        for _ in 0..50 {
            current = g.perturb(&base);
        }
        for (b, n) in base.campaigns.iter().zip(&current.campaigns) {
            let rel = (n.spend - b.spend).abs() / b.spend;
            assert!(rel <= VOLUME_BAND + 0.001, "spend drifted {:.4}", rel);
        }
    }

    #[test]
    fn test_metrics_keep_kind_and_refresh_trend() {
        let mut g = Generator::new(Some(8), 6);
        let base = g.snapshot();
        let next = g.perturb(&base);
        for (b, n) in base.metrics.iter().zip(&next.metrics) {
            assert_eq!(b.label, n.label);
            assert_eq!(
                std::mem::discriminant(&b.value),
                std::mem::discriminant(&n.value)
            );
            let expected = if n.change_pct >= 0.0 { Trend::Up } else { Trend::Down };
            assert_eq!(n.trend, expected);
        }
    }

    #[test]
    fn test_funnel_carries_over_unchanged() {
        let mut g = Generator::new(Some(2), 6);
        let base = g.snapshot();
        let next = g.perturb(&base);
        assert_eq!(base.funnel, next.funnel);
    }

    #[test]
    fn test_labels_are_preserved_across_ticks() {
        let mut g = Generator::new(Some(13), 6);
        let base = g.snapshot();
        let next = g.perturb(&base);
        let labels = |points: &[TrendPoint]| -> Vec<String> {
            points.iter().map(|p| p.label.clone()).collect()
        };
        assert_eq!(labels(&base.trend), labels(&next.trend));
        assert_eq!(labels(&base.hourly), labels(&next.hourly));
    }
}
