//! Export stage: delimited text and rendered-document artifacts.
//!
//! Both exporters build the complete byte buffer in memory, then write it
//! through a temp file in the destination directory plus an atomic rename,
//! so a failed save never leaves a partial artifact behind.

mod csv;
mod pdf;

pub use csv::{CSV_HEADER, csv_bytes, write_csv};
pub use pdf::{TableImage, pdf_bytes, write_pdf};

use std::io::Write;
use std::path::Path;

/// Error from an export operation.
#[derive(Debug)]
pub enum ExportError {
    /// Filesystem failure writing the artifact.
    Io(std::io::Error),
    /// The rendered-table capture was empty or unusable.
    Capture(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(err) => write!(f, "I/O error: {}", err),
            ExportError::Capture(msg) => write!(f, "Capture error: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> ExportError {
        ExportError::Io(err)
    }
}

/// Artifact filename for a view title: lowercased, whitespace joined with
/// underscores, path-hostile characters dropped, fixed `_data` suffix.
///
/// `"Campaign Performance"` + `"csv"` -> `"campaign_performance_data.csv"`.
pub fn export_filename(title: &str, ext: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            slug.push(ch);
        } else if ch.is_whitespace() && !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_end_matches('_');
    if slug.is_empty() {
        format!("export_data.{}", ext)
    } else {
        format!("{}_data.{}", slug, ext)
    }
}

/// Write `bytes` to `path` via a sibling temp file and rename.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| ExportError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename_slug() {
        assert_eq!(
            export_filename("Campaign Performance", "csv"),
            "campaign_performance_data.csv"
        );
        assert_eq!(export_filename("Campaign Performance", "pdf"), "campaign_performance_data.pdf");
        assert_eq!(export_filename("  Spaced   Out  ", "csv"), "spaced_out_data.csv");
        assert_eq!(export_filename("Q4/Brand: Awareness!", "csv"), "q4brand_awareness_data.csv");
        assert_eq!(export_filename("///", "csv"), "export_data.csv");
    }

    #[test]
    fn test_write_atomic_creates_file_with_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_atomic(&path, b"payload").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"payload");
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, b"old").unwrap();
        write_atomic(&path, b"new").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn test_error_display() {
        let err = ExportError::Capture("empty table capture".to_string());
        assert_eq!(err.to_string(), "Capture error: empty table capture");
    }
}
