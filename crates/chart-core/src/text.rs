// File: crates/chart-core/src/text.rs
// Summary: Label text helpers: value/percent formatting, date labels, width estimates, XML escaping.

use chrono::NaiveDate;

/// Compact number: integers without decimals, thousands as `1.2k`, millions as `3.4M`.
pub fn format_value(v: f64) -> String {
    let abs = v.abs();
    if abs >= 1_000_000.0 {
        trim_decimal(format!("{:.1}", v / 1_000_000.0)) + "M"
    } else if abs >= 10_000.0 {
        trim_decimal(format!("{:.1}", v / 1_000.0)) + "k"
    } else if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        trim_decimal(format!("{:.1}", v))
    }
}

pub fn format_percent(pct: f64) -> String {
    format!("{}%", pct.round() as i64)
}

fn trim_decimal(s: String) -> String {
    match s.strip_suffix(".0") {
        Some(t) => t.to_string(),
        None => s,
    }
}

/// Shorten ISO date labels for axes: `2024-01` -> `Jan 2024`, `2024-01-05` -> `Jan 05`.
/// Anything else is returned unchanged.
pub fn axis_label(label: &str) -> String {
    if let Ok(d) = NaiveDate::parse_from_str(label, "%Y-%m-%d") {
        return d.format("%b %d").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{label}-01"), "%Y-%m-%d") {
        if label.len() == 7 {
            return d.format("%b %Y").to_string();
        }
    }
    label.to_string()
}

/// Rough rendered width; 0.6em per character is close enough for label placement.
pub fn estimate_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * size * 0.6
}

/// Truncate to `max` characters with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
