//! Delimited (CSV) rendering of the campaign table.
//!
//! The cell encoding is fixed: campaign names double-quoted verbatim,
//! numbers as plain decimal text, percent and currency cells with their
//! symbol embedded (`2.6%`, `$4500`). Downstream consumers parse exactly
//! this shape; it is not a general CSV writer and does not escape quotes
//! inside names (the generator never produces any).

use std::path::Path;

use crate::fmt::format_plain;
use crate::model::CampaignRecord;

use super::{ExportError, write_atomic};

/// Fixed header row; column order matches the table.
pub const CSV_HEADER: &str = "Campaign,Impressions,Clicks,CTR,Spend,Revenue,ROAS,Status";

fn csv_row(r: &CampaignRecord) -> String {
    format!(
        "\"{}\",{},{},{}%,${},${},{},{}",
        r.campaign,
        r.impressions,
        r.clicks,
        format_plain(r.ctr),
        format_plain(r.spend),
        format_plain(r.revenue),
        format_plain(r.roas),
        r.status.as_str()
    )
}

/// Render records as CSV text: header plus one line per record, in the
/// order given (callers pass the full filtered+sorted sequence, never just
/// the current page).
pub fn csv_bytes(records: &[&CampaignRecord]) -> String {
    let mut out = String::with_capacity(64 * (records.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    for r in records {
        out.push_str(&csv_row(r));
        out.push('\n');
    }
    out
}

/// Write the CSV artifact to `path` atomically.
pub fn write_csv(path: &Path, records: &[&CampaignRecord]) -> Result<(), ExportError> {
    tracing::info!(path = %path.display(), rows = records.len(), "writing csv export");
    write_atomic(path, csv_bytes(records).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::sample_campaigns;

    #[test]
    fn test_csv_bytes_exact_rendering() {
        let records = sample_campaigns();
        let rows: Vec<&CampaignRecord> = records.iter().take(2).collect();
        let text = csv_bytes(&rows);
        assert_eq!(
            text,
            "Campaign,Impressions,Clicks,CTR,Spend,Revenue,ROAS,Status\n\
             \"Summer Sale 2024\",125000,3250,2.6%,$4500,$18750,4.17,active\n\
             \"Holiday Campaign\",89000,2890,3.2%,$3200,$14600,4.56,active\n"
        );
    }

    #[test]
    fn test_csv_line_count_and_quoting() {
        let records = sample_campaigns();
        let rows: Vec<&CampaignRecord> = records.iter().collect();
        let text = csv_bytes(&rows);
        assert_eq!(text.lines().count(), rows.len() + 1);
        for r in &rows {
            let quoted = format!("\"{}\"", r.campaign);
            assert_eq!(text.matches(&quoted).count(), 1, "{} not quoted once", r.campaign);
        }
    }

    #[test]
    fn test_csv_integral_floats_have_no_decimals() {
        let records = sample_campaigns();
        // Product Launch: roas 4.0 must render as `4`, spend 4200 as `$4200`.
        let rows: Vec<&CampaignRecord> =
            records.iter().filter(|r| r.campaign == "Product Launch").collect();
        let text = csv_bytes(&rows);
        let line = text.lines().nth(1).unwrap();
        assert_eq!(line, "\"Product Launch\",98000,2940,3%,$4200,$16800,4,completed");
    }

    #[test]
    fn test_empty_set_exports_header_only() {
        let text = csv_bytes(&[]);
        assert_eq!(text, format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_write_csv_roundtrip_through_fs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campaign_performance_data.csv");
        let records = sample_campaigns();
        let rows: Vec<&CampaignRecord> = records.iter().collect();
        write_csv(&path, &rows).unwrap();
        let read = std::fs::read_to_string(&path).unwrap();
        assert_eq!(read, csv_bytes(&rows));
    }
}
