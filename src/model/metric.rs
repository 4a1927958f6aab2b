//! KPI summary cards.

use serde::{Deserialize, Serialize};

use crate::fmt;

/// Direction glyph shown beside a metric's change figure.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn glyph(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Neutral => "→",
        }
    }
}

/// Raw metric value tagged with its presentation kind.
///
/// The kind decides how [`display`](MetricValue::display) renders the number;
/// perturbation always works on the raw value and re-renders, never on the
/// formatted text.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MetricValue {
    /// Currency amount: `$284,320`, `$156.80`.
    Currency(f64),
    /// Plain count: `28,450`.
    Count(f64),
    /// Percentage: `3.24%`, `32.1%`.
    Percent(f64),
    /// Compact large count: `2.4m`.
    CompactCount(f64),
    /// Duration in seconds: `4m 32s`.
    DurationSecs(f64),
}

impl MetricValue {
    pub fn raw(&self) -> f64 {
        match *self {
            MetricValue::Currency(v)
            | MetricValue::Count(v)
            | MetricValue::Percent(v)
            | MetricValue::CompactCount(v)
            | MetricValue::DurationSecs(v) => v,
        }
    }

    /// Same kind, new raw value.
    pub fn with_raw(&self, v: f64) -> MetricValue {
        match self {
            MetricValue::Currency(_) => MetricValue::Currency(v),
            MetricValue::Count(_) => MetricValue::Count(v),
            MetricValue::Percent(_) => MetricValue::Percent(v),
            MetricValue::CompactCount(_) => MetricValue::CompactCount(v),
            MetricValue::DurationSecs(_) => MetricValue::DurationSecs(v),
        }
    }

    /// Render for display according to the kind.
    pub fn display(&self) -> String {
        match *self {
            MetricValue::Currency(v) => fmt::format_currency(v),
            MetricValue::Count(v) => fmt::format_count(v),
            MetricValue::Percent(v) => {
                // Small rates keep two decimals (3.24%), large ones one (32.1%).
                let decimals = if v.abs() < 10.0 { 2 } else { 1 };
                fmt::format_percent(v, decimals)
            }
            MetricValue::CompactCount(v) => fmt::format_compact(v),
            MetricValue::DurationSecs(v) => fmt::format_duration(v.round() as i64),
        }
    }
}

/// One KPI card: label, raw value, change vs. the prior period, trend.
///
/// Replaced wholesale on every refresh tick, never mutated field by field.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct MetricSummary {
    /// Card label, unique per dashboard section.
    pub label: String,
    pub value: MetricValue,
    /// Signed change percentage vs. the prior period.
    pub change_pct: f64,
    pub trend: Trend,
}

impl MetricSummary {
    pub fn display_value(&self) -> String {
        self.value.display()
    }

    pub fn display_change(&self) -> String {
        fmt::format_change(self.change_pct)
    }
}
