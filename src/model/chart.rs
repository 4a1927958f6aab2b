//! Chart series points.
//!
//! Three fixed shapes cover every chart on the dashboard; series are
//! regenerated wholesale per refresh tick, never mutated point by point.

use serde::{Deserialize, Serialize};

/// One point of a multi-measure activity series (monthly trend, hourly
/// activity). `label` is the x-axis category.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub revenue: f64,
    pub users: f64,
    pub sessions: f64,
}

/// One labeled share of a breakdown (traffic source, device, age group,
/// funnel stage).
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

/// Revenue attributed to one geographic region.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RegionPoint {
    pub label: String,
    pub revenue: f64,
}

impl Slice {
    pub fn new(label: &str, value: f64) -> Slice {
        Slice { label: label.to_string(), value }
    }
}
