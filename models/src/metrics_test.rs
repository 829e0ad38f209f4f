use super::*;
use crate::ApiResponse;

#[test]
fn time_series_envelope_decodes() {
    let raw = r#"{
        "data": [
            {"metric_name": "cpu_usage", "unit": "%", "data": [
                {"value": 12.0, "timestamp": "2025-03-01T10:00:00Z"},
                {"value": 15.5, "timestamp": "2025-03-01T10:01:00Z"}
            ]},
            {"metric_name": "memory_usage", "unit": "%", "data": []}
        ],
        "meta": {"timestamp": "2025-03-01T10:02:00Z", "total": 2}
    }"#;
    let parsed: ApiResponse<Vec<MetricTimeSeries>> = serde_json::from_str(raw).expect("series");
    assert_eq!(parsed.data.len(), 2);
    assert_eq!(parsed.data[0].data.len(), 2);
    assert!(parsed.data[1].data.is_empty());
}

#[test]
fn overview_decodes_integer_and_float_fields() {
    let raw = r#"{"total_nodes":3,"total_vms":12,"running_vms":9,"active_alerts":2,
        "avg_cpu_usage":33.3,"avg_memory_usage":50,"avg_disk_usage":71.25}"#;
    let overview: ResourceOverview = serde_json::from_str(raw).expect("overview");
    assert_eq!(overview.running_vms, 9);
    assert!((overview.avg_memory_usage - 50.0).abs() < f64::EPSILON);
}

#[test]
fn metric_range_round_trips_query_values() {
    for range in MetricRange::ALL {
        assert_eq!(MetricRange::parse(range.as_str()), Some(range));
    }
    assert_eq!(MetricRange::parse("30d"), None);
    assert_eq!(MetricRange::default().as_str(), "1h");
}
