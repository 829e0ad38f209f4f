use super::*;

// =============================================================
// Sizes
// =============================================================

#[test]
fn format_bytes_zero_and_invalid() {
    assert_eq!(format_bytes(0.0), "0 B");
    assert_eq!(format_bytes(-5.0), "0 B");
    assert_eq!(format_bytes(f64::NAN), "0 B");
    assert_eq!(format_bytes(f64::INFINITY), "0 B");
}

#[test]
fn format_bytes_picks_unit() {
    assert_eq!(format_bytes(512.0), "512.0 B");
    assert_eq!(format_bytes(1024.0), "1.0 KB");
    assert_eq!(format_bytes(1536.0), "1.5 KB");
    assert_eq!(format_bytes(1_048_576.0), "1.0 MB");
    assert_eq!(format_bytes(3.5 * 1024.0 * 1024.0 * 1024.0), "3.5 GB");
}

#[test]
fn format_bytes_sub_byte_stays_in_bytes() {
    assert_eq!(format_bytes(0.5), "0.5 B");
}

#[test]
fn format_bytes_clamps_to_largest_unit() {
    let five_pb = 5.0 * 1024f64.powi(5);
    assert_eq!(format_bytes(five_pb), "5120.0 TB");
}

#[test]
fn format_mb_as_gb_one_decimal() {
    assert_eq!(format_mb_as_gb(8192), "8.0 GB");
    assert_eq!(format_mb_as_gb(1536), "1.5 GB");
    assert_eq!(format_mb_as_gb(0), "0.0 GB");
}

#[test]
fn format_gb_one_decimal() {
    assert_eq!(format_gb(64.0), "64.0 GB");
    assert_eq!(format_gb(32.5), "32.5 GB");
}

// =============================================================
// Percentages
// =============================================================

#[test]
fn format_percent_one_decimal() {
    assert_eq!(format_percent(42.0), "42.0%");
    assert_eq!(format_percent(99.96), "100.0%");
}

#[test]
fn format_optional_percent_placeholder() {
    assert_eq!(format_optional_percent(None), "-%");
    assert_eq!(format_optional_percent(Some(12.34)), "12.3%");
}

// =============================================================
// Timestamps
// =============================================================

#[test]
fn format_timestamp_rfc3339_to_utc() {
    assert_eq!(format_timestamp("2025-03-01T10:00:00Z"), "2025-03-01 10:00:00 UTC");
    assert_eq!(format_timestamp("2025-03-01T10:00:00+02:00"), "2025-03-01 08:00:00 UTC");
}

#[test]
fn format_timestamp_naive_iso_is_utc() {
    assert_eq!(format_timestamp("2025-03-01T10:05:09.123456"), "2025-03-01 10:05:09 UTC");
}

#[test]
fn format_timestamp_unparseable_returned_unchanged() {
    assert_eq!(format_timestamp("yesterday"), "yesterday");
    assert_eq!(format_timestamp(""), "");
}

#[test]
fn format_time_of_day_hours_minutes() {
    assert_eq!(format_time_of_day("2025-03-01T23:59:30Z"), "23:59");
    assert_eq!(format_time_of_day("garbage"), "garbage");
}

#[test]
fn format_optional_timestamp_fallback() {
    assert_eq!(format_optional_timestamp(None, "Never"), "Never");
    assert_eq!(
        format_optional_timestamp(Some("2025-03-01T10:00:00Z"), "Never"),
        "2025-03-01 10:00:00 UTC"
    );
}

// =============================================================
// Uptime
// =============================================================

#[test]
fn format_uptime_buckets() {
    assert_eq!(format_uptime(0.0), "0m");
    assert_eq!(format_uptime(59.0), "0m");
    assert_eq!(format_uptime(12.0 * 60.0), "12m");
    assert_eq!(format_uptime(4.0 * 3600.0 + 12.0 * 60.0), "4h 12m");
    assert_eq!(format_uptime(3.0 * 86_400.0 + 4.0 * 3600.0 + 12.0 * 60.0), "3d 4h 12m");
}

#[test]
fn format_uptime_negative_or_nan_is_zero() {
    assert_eq!(format_uptime(-10.0), "0m");
    assert_eq!(format_uptime(f64::NAN), "0m");
}

#[test]
fn capitalize_first_letter() {
    assert_eq!(capitalize("container"), "Container");
    assert_eq!(capitalize(""), "");
}
