//! Display formatting for sizes, percentages, timestamps and durations.
//!
//! Every function here is pure; views never format numbers inline.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Human readable byte count with one decimal, e.g. `1536 -> "1.5 KB"`.
///
/// Zero, negative and non-finite input render as `"0 B"`. Values past the
/// last unit stay in `TB`.
pub fn format_bytes(bytes: f64) -> String {
    if !bytes.is_finite() || bytes <= 0.0 {
        return "0 B".to_owned();
    }
    let mut scaled = bytes;
    let mut unit = 0;
    while scaled >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }
    format!("{scaled:.1} {}", BYTE_UNITS[unit])
}

/// Megabytes shown as gigabytes, e.g. `8192 -> "8.0 GB"`.
#[allow(clippy::cast_precision_loss)]
pub fn format_mb_as_gb(mb: u64) -> String {
    format!("{:.1} GB", mb as f64 / 1024.0)
}

/// Gigabytes with one decimal, e.g. `64.0 -> "64.0 GB"`.
pub fn format_gb(gb: f64) -> String {
    format!("{gb:.1} GB")
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Percentage or `"-%"` while the metric is unknown.
pub fn format_optional_percent(value: Option<f64>) -> String {
    value.map_or_else(|| "-%".to_owned(), format_percent)
}

fn parse_utc(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(dt.to_offset(UtcOffset::UTC));
    }
    // Naive timestamps from the backend are UTC.
    PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT).ok().map(PrimitiveDateTime::assume_utc)
}

/// `"2025-03-01T10:00:00+02:00" -> "2025-03-01 08:00:00 UTC"`.
///
/// Input that does not parse is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let layout = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    parse_utc(raw)
        .and_then(|dt| dt.format(layout).ok())
        .map_or_else(|| raw.to_owned(), |text| format!("{text} UTC"))
}

/// Chart axis label, `"HH:MM"` in UTC.
pub fn format_time_of_day(raw: &str) -> String {
    let layout = format_description!("[hour]:[minute]");
    parse_utc(raw).and_then(|dt| dt.format(layout).ok()).unwrap_or_else(|| raw.to_owned())
}

/// Formatted timestamp or `fallback` when absent.
pub fn format_optional_timestamp(raw: Option<&str>, fallback: &str) -> String {
    raw.map_or_else(|| fallback.to_owned(), format_timestamp)
}

/// Compact uptime, e.g. `"3d 4h 12m"`, `"4h 12m"`, `"12m"`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_uptime(seconds: f64) -> String {
    let total = if seconds.is_finite() { seconds.max(0.0) as u64 } else { 0 };
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// First letter upper-cased, e.g. `"container" -> "Container"`.
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
