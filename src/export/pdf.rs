//! Rendered-document (PDF) export of the table as drawn.
//!
//! Emits a minimal, fixed subset of PDF 1.4 by hand: each page is one
//! Courier text object holding a slice of the captured monospaced grid.
//! The grid is scaled to fit the page width (uniform font scale, so the
//! aspect ratio of the terminal rendering is preserved), centered
//! horizontally, and placed below a fixed top margin; rows that overflow
//! one page continue on the next.
//!
//! File layout:
//!
//! ```text
//! %PDF-1.4
//! 1 0 obj   catalog -> 2
//! 2 0 obj   page tree, one kid per page of rows
//! 3 0 obj   the Courier font
//! 4+2i      page i           (A4 landscape MediaBox)
//! 5+2i      content stream i (one Tj per captured row)
//! xref, trailer, %%EOF
//! ```

use std::path::Path;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::{ExportError, write_atomic};

/// A4 landscape, in points.
const PAGE_W: f64 = 842.0;
const PAGE_H: f64 = 595.0;

/// Fixed distance from the page top to the first baseline area.
const TOP_MARGIN: f64 = 40.0;
const BOTTOM_MARGIN: f64 = 40.0;
const MIN_SIDE_MARGIN: f64 = 36.0;

/// Courier advance width relative to the font size.
const CHAR_ASPECT: f64 = 0.6;
const LINE_SPACING: f64 = 1.25;
const MAX_FONT_PT: f64 = 11.0;

/// Monospaced text capture of the table region as last drawn.
pub struct TableImage {
    /// Region width in terminal cells; the scale reference.
    pub width: u16,
    /// One string per row, trailing blanks trimmed.
    pub lines: Vec<String>,
}

impl TableImage {
    /// Snapshot `area` of a drawn buffer.
    pub fn from_buffer(buf: &Buffer, area: Rect) -> TableImage {
        let mut lines: Vec<String> = Vec::with_capacity(area.height as usize);
        for y in area.top()..area.bottom() {
            let mut line = String::with_capacity(area.width as usize);
            for x in area.left()..area.right() {
                match buf.cell((x, y)) {
                    Some(cell) => line.push_str(cell.symbol()),
                    None => line.push(' '),
                }
            }
            lines.push(line.trim_end().to_string());
        }
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        TableImage { width: area.width, lines }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.lines.iter().all(|l| l.is_empty())
    }
}

struct PageLayout {
    font: f64,
    x0: f64,
    first_baseline: f64,
    line_h: f64,
    rows_per_page: usize,
}

/// Scale-to-fit for a grid `cols` cells wide.
fn layout(cols: usize) -> PageLayout {
    let cols = cols.max(1) as f64;
    let fit = (PAGE_W - 2.0 * MIN_SIDE_MARGIN) / (cols * CHAR_ASPECT);
    let font = fit.min(MAX_FONT_PT);
    let line_h = font * LINE_SPACING;
    let rows = ((PAGE_H - TOP_MARGIN - BOTTOM_MARGIN) / line_h).floor() as usize;
    PageLayout {
        font,
        x0: (PAGE_W - cols * font * CHAR_ASPECT) / 2.0,
        first_baseline: PAGE_H - TOP_MARGIN - font,
        line_h,
        rows_per_page: rows.max(1),
    }
}

/// Escape one grid row into PDF string syntax. Box-drawing and arrow
/// glyphs from the terminal rendering are transliterated to ASCII; other
/// non-Latin-1 characters degrade to `?`.
fn escape_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 4);
    for ch in line.chars() {
        let ch = match ch {
            '─' | '━' | '┄' | '╌' | '═' => '-',
            '│' | '┃' | '┆' | '║' => '|',
            '┌' | '┐' | '└' | '┘' | '├' | '┤' | '┬' | '┴' | '┼' => '+',
            '…' => '.',
            '▲' | '↑' | '█' | '▀' => '^',
            '▼' | '↓' => 'v',
            '→' => '>',
            '•' | '·' => '*',
            c if (c as u32) < 0x20 => ' ',
            c => c,
        };
        match ch {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            c if c.is_ascii() => out.push(c),
            c if (c as u32) <= 0xFF => out.push_str(&format!("\\{:03o}", c as u32)),
            _ => out.push('?'),
        }
    }
    out
}

fn content_stream(rows: &[String], l: &PageLayout) -> String {
    let mut s = String::with_capacity(rows.len() * 80 + 64);
    s.push_str("BT\n");
    s.push_str(&format!("/F1 {:.2} Tf\n", l.font));
    s.push_str(&format!("{:.2} TL\n", l.line_h));
    s.push_str(&format!("{:.2} {:.2} Td\n", l.x0, l.first_baseline));
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            s.push_str("T*\n");
        }
        s.push_str(&format!("({}) Tj\n", escape_line(row)));
    }
    s.push_str("ET");
    s
}

/// Assemble the PDF for a captured table image.
pub fn pdf_bytes(image: &TableImage) -> Result<Vec<u8>, ExportError> {
    if image.is_empty() {
        return Err(ExportError::Capture("empty table capture".to_string()));
    }
    let l = layout(image.width as usize);
    let chunks: Vec<&[String]> = image.lines.chunks(l.rows_per_page).collect();

    let mut objects: Vec<String> = Vec::with_capacity(3 + chunks.len() * 2);
    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    let kids = (0..chunks.len())
        .map(|i| format!("{} 0 R", 4 + 2 * i))
        .collect::<Vec<_>>()
        .join(" ");
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids,
        chunks.len()
    ));
    objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Courier >>".to_string());
    for (i, chunk) in chunks.iter().enumerate() {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.0} {:.0}] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            PAGE_W,
            PAGE_H,
            5 + 2 * i
        ));
        let stream = content_stream(chunk, &l);
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            stream.len(),
            stream
        ));
    }

    let mut out: Vec<u8> = Vec::with_capacity(1024 + image.lines.len() * 96);
    out.extend_from_slice(b"%PDF-1.4\n");
    let mut offsets: Vec<usize> = Vec::with_capacity(objects.len());
    for (i, obj) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, obj).as_bytes());
    }
    let xref_at = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for off in &offsets {
        out.extend_from_slice(format!("{:010} 00000 n \n", off).as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_at
        )
        .as_bytes(),
    );
    Ok(out)
}

/// Write the PDF artifact to `path` atomically.
pub fn write_pdf(path: &Path, image: &TableImage) -> Result<(), ExportError> {
    let bytes = pdf_bytes(image)?;
    tracing::info!(
        path = %path.display(),
        rows = image.lines.len(),
        bytes = bytes.len(),
        "writing pdf export"
    );
    write_atomic(path, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    fn image(width: u16, rows: usize) -> TableImage {
        TableImage {
            width,
            lines: (0..rows).map(|i| format!("row {}", i)).collect(),
        }
    }

    #[test]
    fn test_empty_capture_is_an_error() {
        let img = TableImage { width: 0, lines: Vec::new() };
        assert!(matches!(pdf_bytes(&img), Err(ExportError::Capture(_))));
    }

    #[test]
    fn test_pdf_frame_markers() {
        let bytes = pdf_bytes(&image(80, 5)).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.starts_with("%PDF-1.4\n"));
        assert!(text.ends_with("%%EOF\n"));
        assert!(text.contains("/BaseFont /Courier"));
        assert!(text.contains("/MediaBox [0 0 842 595]"));
    }

    #[test]
    fn test_wide_capture_scales_down_and_stays_centered() {
        let wide = layout(200);
        let narrow = layout(60);
        assert!(wide.font < narrow.font);
        assert_eq!(narrow.font, MAX_FONT_PT);
        // Side margins never collapse below the minimum, and the narrow
        // grid sits further from the edge (centered).
        assert!(wide.x0 >= MIN_SIDE_MARGIN - 0.01);
        assert!(narrow.x0 > wide.x0);
    }

    #[test]
    fn test_rows_overflow_onto_following_pages() {
        let l = layout(80);
        let bytes = pdf_bytes(&image(80, l.rows_per_page + 3)).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 2"));
        assert_eq!(text.matches("/Type /Page ").count(), 2);
    }

    #[test]
    fn test_escape_line_specials_and_box_drawing() {
        assert_eq!(escape_line("(a) \\ b"), "\\(a\\) \\\\ b");
        assert_eq!(escape_line("│ Campaign │"), "| Campaign |");
        assert_eq!(escape_line("┌──┐"), "+--+");
        assert_eq!(escape_line("CTR ▲"), "CTR ^");
        assert_eq!(escape_line("漢"), "?");
    }

    #[test]
    fn test_from_buffer_trims_trailing_blanks() {
        let area = Rect::new(0, 0, 12, 4);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 0, "Campaign", Style::default());
        buf.set_string(0, 1, "Summer Sale", Style::default());
        let img = TableImage::from_buffer(&buf, area);
        assert_eq!(img.width, 12);
        assert_eq!(img.lines, vec!["Campaign".to_string(), "Summer Sale".to_string()]);
    }

    #[test]
    fn test_stream_length_matches_declared() {
        let bytes = pdf_bytes(&image(80, 2)).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        let at = text.find("/Length ").unwrap();
        let rest = &text[at + "/Length ".len()..];
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        let declared: usize = digits.parse().unwrap();
        let start = text.find("stream\n").unwrap() + "stream\n".len();
        let end = text.find("\nendstream").unwrap();
        assert_eq!(declared, end - start);
    }
}
