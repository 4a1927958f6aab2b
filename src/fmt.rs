//! Shared formatting helpers for dashboard display.
//!
//! All pure formatting functions (no ratatui styles, no UI layout) live here.
//! Display formatting is deliberately separate from the raw numeric model:
//! values are perturbed as numbers and only rendered to text at the edges
//! (widgets, exports). Export cells use the plain renderings; widgets use the
//! thousands-separated ones.

/// Group an integer's digits with `,` separators: `284320` -> `"284,320"`.
pub fn group_thousands(v: u64) -> String {
    let digits = v.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a currency amount for display.
///
/// Whole amounts: `"$284,320"`. Fractional amounts keep cents: `"$156.80"`.
pub fn format_currency(v: f64) -> String {
    let v = if v.is_finite() { v.max(0.0) } else { 0.0 };
    let cents = (v * 100.0).round() as u64;
    if cents % 100 == 0 {
        format!("${}", group_thousands(cents / 100))
    } else {
        format!("${}.{:02}", group_thousands(cents / 100), cents % 100)
    }
}

/// Format a count for display: `28450.0` -> `"28,450"`.
pub fn format_count(v: f64) -> String {
    let v = if v.is_finite() { v.max(0.0) } else { 0.0 };
    group_thousands(v.round() as u64)
}

/// Format a large count compactly: `2_400_000.0` -> `"2.4m"`, `45_200.0` -> `"45.2k"`.
pub fn format_compact(v: f64) -> String {
    let v = if v.is_finite() { v.max(0.0) } else { 0.0 };
    if v >= 1_000_000.0 {
        format!("{:.1}m", v / 1_000_000.0)
    } else if v >= 1_000.0 {
        format!("{:.1}k", v / 1_000.0)
    } else {
        format!("{:.0}", v)
    }
}

/// Format a percentage with the given number of decimals: `"3.24%"`, `"32.1%"`.
pub fn format_percent(v: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, v)
}

/// Format a signed change percentage with explicit sign: `"+12.5%"`, `"-2.1%"`.
pub fn format_change(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{:.1}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Format a duration in seconds as `"4m 32s"` (`"32s"` under a minute).
pub fn format_duration(secs: i64) -> String {
    if secs <= 0 {
        return "0s".to_string();
    }
    if secs < 60 {
        format!("{}s", secs)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Format a return-on-ad-spend multiplier for display: `"4.17x"`.
pub fn format_roas(v: f64) -> String {
    format!("{:.2}x", v)
}

/// Render a float as plain decimal text with minimal digits, the way export
/// cells encode numbers: `4500.0` -> `"4500"`, `2.6` -> `"2.6"`.
///
/// Non-finite values render as `"0"`; the generator never produces them but
/// the engine does not assume that.
pub fn format_plain(v: f64) -> String {
    if v.is_finite() { v.to_string() } else { "0".to_string() }
}

/// Truncate string to max length with unicode ellipsis (`…`).
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
