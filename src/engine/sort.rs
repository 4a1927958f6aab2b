//! Sort stage: stable field ordering for campaign rows.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::CampaignRecord;

/// Sortable campaign-table fields, in column order.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Campaign,
    Impressions,
    Clicks,
    Ctr,
    Spend,
    Revenue,
    Roas,
    Status,
}

impl SortField {
    pub const ALL: [SortField; 8] = [
        SortField::Campaign,
        SortField::Impressions,
        SortField::Clicks,
        SortField::Ctr,
        SortField::Spend,
        SortField::Revenue,
        SortField::Roas,
        SortField::Status,
    ];

    /// Column header label.
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Campaign => "Campaign",
            SortField::Impressions => "Impressions",
            SortField::Clicks => "Clicks",
            SortField::Ctr => "CTR",
            SortField::Spend => "Spend",
            SortField::Revenue => "Revenue",
            SortField::Roas => "ROAS",
            SortField::Status => "Status",
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header glyph for the active sort column.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort field (if any) and direction.
///
/// No active field means input order is preserved exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SortState {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortState {
    /// Header-click semantics: clicking the active field toggles direction,
    /// a new field starts ascending.
    pub fn apply(&mut self, field: SortField) {
        if self.field == Some(field) {
            self.direction = self.direction.toggled();
        } else {
            self.field = Some(field);
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Comparable key extracted from one record field.
///
/// String keys are lowercased at extraction so comparisons are
/// case-insensitive. The only non-comparable value a typed record can carry
/// is a NaN float; [`cmp_total`](SortKey::cmp_total) orders NaN before every
/// defined value so undefined data sorts first, consistently, instead of
/// panicking or randomizing the order.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Integer(u64),
    Float(f64),
    String(String),
}

impl SortKey {
    pub fn cmp_total(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Integer(a), SortKey::Integer(b)) => a.cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => match a.partial_cmp(b) {
                Some(ord) => ord,
                // At least one NaN: NaN sorts before any number.
                None => b.is_nan().cmp(&a.is_nan()),
            },
            (SortKey::String(a), SortKey::String(b)) => a.cmp(b),
            // Keys for one field never mix variants; keep a deterministic
            // order anyway rather than panicking on a malformed mix.
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Integer(_) => 0,
            SortKey::Float(_) => 1,
            SortKey::String(_) => 2,
        }
    }
}

/// Extract the sort key for `field` from one record.
pub fn key(record: &CampaignRecord, field: SortField) -> SortKey {
    match field {
        SortField::Campaign => SortKey::String(record.campaign.to_lowercase()),
        SortField::Impressions => SortKey::Integer(record.impressions),
        SortField::Clicks => SortKey::Integer(record.clicks),
        SortField::Ctr => SortKey::Float(record.ctr),
        SortField::Spend => SortKey::Float(record.spend),
        SortField::Revenue => SortKey::Float(record.revenue),
        SortField::Roas => SortKey::Float(record.roas),
        SortField::Status => SortKey::String(record.status.as_str().to_string()),
    }
}

/// Order `records` by the active field and direction.
///
/// Unset field is the identity. `sort_by` is a stable sort, so equal keys
/// keep their relative input order and re-sorting is idempotent.
pub fn sort(mut records: Vec<&CampaignRecord>, state: SortState) -> Vec<&CampaignRecord> {
    let Some(field) = state.field else {
        return records;
    };
    records.sort_by(|a, b| {
        let cmp = key(a, field).cmp_total(&key(b, field));
        match state.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
    records
}
