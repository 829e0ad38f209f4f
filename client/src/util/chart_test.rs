use super::*;
use models::MetricPoint;

fn series(name: &str, points: &[(&str, f64)]) -> MetricTimeSeries {
    MetricTimeSeries {
        metric_name: name.to_owned(),
        unit: "%".to_owned(),
        data: points
            .iter()
            .map(|(ts, value)| MetricPoint { value: *value, timestamp: (*ts).to_owned() })
            .collect(),
    }
}

// =============================================================
// Colors
// =============================================================

#[test]
fn metric_color_table_and_fallback() {
    assert_eq!(metric_color("cpu_usage"), "#3b82f6");
    assert_eq!(metric_color("memory_usage"), "#8b5cf6");
    assert_eq!(metric_color("disk_usage"), "#06b6d4");
    assert_eq!(metric_color("network_in"), "#10b981");
    assert_eq!(metric_color("network_out"), "#f59e0b");
    assert_eq!(metric_color("load_avg"), DEFAULT_SERIES_COLOR);
}

// =============================================================
// merge_series
// =============================================================

#[test]
fn merge_series_unions_and_sorts_timestamps() {
    let cpu = series("cpu_usage", &[("2025-03-01T10:02:00Z", 30.0), ("2025-03-01T10:00:00Z", 10.0)]);
    let mem = series("memory_usage", &[("2025-03-01T10:01:00Z", 50.0)]);
    let table = merge_series(&[cpu, mem]);

    assert_eq!(table.series, vec!["cpu_usage", "memory_usage"]);
    let stamps: Vec<_> = table.rows.iter().map(|row| row.timestamp.as_str()).collect();
    assert_eq!(stamps, vec!["2025-03-01T10:00:00Z", "2025-03-01T10:01:00Z", "2025-03-01T10:02:00Z"]);
}

#[test]
fn merge_series_fills_gaps_with_zero() {
    let cpu = series("cpu_usage", &[("t1", 10.0), ("t3", 30.0)]);
    let mem = series("memory_usage", &[("t2", 50.0)]);
    let table = merge_series(&[cpu, mem]);

    assert_eq!(table.column(0), vec![10.0, 0.0, 30.0]);
    assert_eq!(table.column(1), vec![0.0, 50.0, 0.0]);
}

#[test]
fn merge_series_keeps_first_duplicate_sample() {
    let cpu = series("cpu_usage", &[("t1", 10.0), ("t1", 99.0)]);
    let table = merge_series(&[cpu]);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.column(0), vec![10.0]);
}

#[test]
fn merge_series_empty_input() {
    let table = merge_series(&[]);
    assert!(table.is_empty());
    assert!(table.series.is_empty());

    let table = merge_series(&[series("cpu_usage", &[])]);
    assert!(table.is_empty());
    assert_eq!(table.series.len(), 1);
}

#[test]
fn axis_timestamps_spread_evenly() {
    let points: Vec<(String, f64)> = (0..10).map(|i| (format!("t{i}"), 1.0)).collect();
    let borrowed: Vec<(&str, f64)> = points.iter().map(|(ts, v)| (ts.as_str(), *v)).collect();
    let table = merge_series(&[series("cpu_usage", &borrowed)]);

    assert_eq!(table.axis_timestamps(4), vec!["t0", "t3", "t6", "t9"]);
    assert_eq!(table.axis_timestamps(1), vec!["t0"]);
    assert_eq!(table.axis_timestamps(20).len(), 10);
    assert!(table.axis_timestamps(0).is_empty());
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn line_points_spaced_evenly_and_inverted() {
    let points = line_points(&[0.0, 50.0, 100.0], 200.0, 100.0, 100.0);
    assert_eq!(points, "0.00,100.00 100.00,50.00 200.00,0.00");
}

#[test]
fn line_points_clamps_out_of_range_values() {
    let points = line_points(&[-20.0, 150.0], 10.0, 10.0, 100.0);
    assert_eq!(points, "0.00,10.00 10.00,0.00");
}

#[test]
fn line_points_single_value_at_origin() {
    assert_eq!(line_points(&[25.0], 100.0, 40.0, 100.0), "0.00,30.00");
    assert_eq!(line_points(&[], 100.0, 40.0, 100.0), "");
}

#[test]
fn area_path_closes_to_baseline() {
    let path = area_path(&[0.0, 100.0], 10.0, 20.0, 100.0);
    assert_eq!(path, "M0.00,20.00 L0.00,20.00 L10.00,0.00 L10.00,20.00 Z");
    assert_eq!(area_path(&[], 10.0, 20.0, 100.0), "");
}

#[test]
fn sparkline_is_deterministic_and_bounded() {
    let a = sparkline_values(1.0);
    let b = sparkline_values(1.0);
    assert_eq!(a, b);
    assert_eq!(a.len(), SPARKLINE_POINTS);
    assert!(a.iter().all(|v| (5.0..=55.0).contains(v)));
    assert_ne!(sparkline_values(2.0), a);
}

#[test]
fn gauge_width_clamps() {
    assert!((gauge_width(42.5) - 42.5).abs() < f64::EPSILON);
    assert!(gauge_width(-3.0).abs() < f64::EPSILON);
    assert!((gauge_width(250.0) - 100.0).abs() < f64::EPSILON);
    assert!(gauge_width(f64::NAN).abs() < f64::EPSILON);
}

#[test]
fn gauge_style_formats_width() {
    assert_eq!(gauge_style(120.0, "#3b82f6"), "width: 100.0%; background: #3b82f6;");
}
