use super::*;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn infrastructure_endpoints() {
    assert_eq!(nodes_endpoint(), "/api/v1/infrastructure/nodes");
    assert_eq!(vms_endpoint(None), "/api/v1/infrastructure/vms");
    assert_eq!(vms_endpoint(Some("node-1")), "/api/v1/infrastructure/vms?node_id=node-1");
    assert_eq!(vm_endpoint("vm-7"), "/api/v1/infrastructure/vms/vm-7");
    assert_eq!(vm_metrics_endpoint("vm-7"), "/api/v1/infrastructure/vms/vm-7/metrics");
}

#[test]
fn vm_action_endpoint_uses_action_segment() {
    assert_eq!(vm_action_endpoint("vm-7", VmAction::Start), "/api/v1/infrastructure/vms/vm-7/start");
    assert_eq!(vm_action_endpoint("vm-7", VmAction::Stop), "/api/v1/infrastructure/vms/vm-7/stop");
    assert_eq!(vm_action_endpoint("vm-7", VmAction::Restart), "/api/v1/infrastructure/vms/vm-7/restart");
}

#[test]
fn service_endpoints() {
    assert_eq!(services_endpoint(), "/api/v1/services");
    assert_eq!(service_endpoint("svc-1"), "/api/v1/services/svc-1");
}

#[test]
fn alert_endpoints() {
    assert_eq!(alerts_endpoint(None), "/api/v1/alerts");
    assert_eq!(alerts_endpoint(Some(AlertStatus::Firing)), "/api/v1/alerts?status=firing");
    assert_eq!(alert_rules_endpoint(), "/api/v1/alerts/rules");
    assert_eq!(alert_rule_endpoint("r-1"), "/api/v1/alerts/rules/r-1");
}

#[test]
fn metric_endpoints() {
    assert_eq!(metrics_overview_endpoint(), "/api/v1/metrics/overview");
    assert_eq!(metric_series_endpoint("vm-7", MetricRange::SixHours), "/api/v1/metrics/vm-7?range=6h");
    assert_eq!(metric_series_endpoint("svc-1", MetricRange::default()), "/api/v1/metrics/svc-1?range=1h");
}

#[test]
fn query_values_are_percent_encoded() {
    assert_eq!(vms_endpoint(Some("abc-1_2.3~")), "/api/v1/infrastructure/vms?node_id=abc-1_2.3~");
    assert_eq!(vms_endpoint(Some("a b&c=d")), "/api/v1/infrastructure/vms?node_id=a%20b%26c%3Dd");
    assert_eq!(vms_endpoint(Some("x/y")), "/api/v1/infrastructure/vms?node_id=x%2Fy");
}

#[test]
fn path_ids_stay_inside_their_segment() {
    assert_eq!(vm_endpoint("a/b?c"), "/api/v1/infrastructure/vms/a%2Fb%3Fc");
    assert_eq!(vm_metrics_endpoint("a/b"), "/api/v1/infrastructure/vms/a%2Fb/metrics");
    assert_eq!(vm_action_endpoint("a#b", VmAction::Stop), "/api/v1/infrastructure/vms/a%23b/stop");
    assert_eq!(service_endpoint("../alerts"), "/api/v1/services/..%2Falerts");
    assert_eq!(alert_rule_endpoint("r 1"), "/api/v1/alerts/rules/r%201");
    assert_eq!(
        metric_series_endpoint("x?range=7d&y", MetricRange::OneHour),
        "/api/v1/metrics/x%3Frange%3D7d%26y?range=1h"
    );
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decode_data_unwraps_envelope() {
    let body = r#"{"data":[{"value":1.5,"timestamp":"t1"}],"meta":{"timestamp":"now"}}"#;
    let points: Vec<models::MetricPoint> = decode_data(200, body).expect("points");
    assert_eq!(points.len(), 1);
    assert!((points[0].value - 1.5).abs() < f64::EPSILON);
}

#[test]
fn decode_response_204_and_empty_body_are_no_content() {
    assert_eq!(decode_response::<serde_json::Value>(204, "").expect("204"), None);
    assert_eq!(decode_response::<serde_json::Value>(200, "  ").expect("empty"), None);
}

#[test]
fn decode_required_rejects_no_content() {
    let err = decode_required::<serde_json::Value>(200, "").expect_err("empty");
    assert_eq!(err.code, INVALID_RESPONSE_CODE);
    assert_eq!(err.status, 200);
}

#[test]
fn decode_response_invalid_json_is_invalid_response() {
    let err = decode_data::<Vec<models::Node>>(200, "<html>oops</html>").expect_err("garbage");
    assert_eq!(err.code, INVALID_RESPONSE_CODE);
    assert!(err.message.starts_with("Invalid response body"));
}

#[test]
fn decode_response_error_envelope() {
    let body = r#"{"error":{"code":"VM_NOT_FOUND","message":"VM not found"}}"#;
    let err = decode_data::<models::Vm>(404, body).expect_err("404");
    assert_eq!(err.status, 404);
    assert_eq!(err.code, "VM_NOT_FOUND");
    assert_eq!(err.message, "VM not found");
    assert!(err.is_not_found());
}

#[test]
fn decode_response_fastapi_detail() {
    let err = decode_data::<models::Vm>(404, r#"{"detail":"VM not found"}"#).expect_err("404");
    assert_eq!(err.message, "VM not found");
    assert_eq!(err.code, "UNKNOWN");
}

#[test]
fn decode_response_unparseable_error_body() {
    let err = decode_data::<models::Vm>(502, "Bad Gateway").expect_err("502");
    assert_eq!(err.code, "UNKNOWN");
    assert_eq!(err.message, "Request failed with status 502");
}

#[test]
fn decode_bare_vm_metrics() {
    let body = r#"{"vmid":101,"cpu_usage":5.0,"memory_usage":20.0,"disk_usage":30.0,"network_in":0,"network_out":0,"uptime":3600}"#;
    let metrics: VmMetrics = decode_required(200, body).expect("metrics");
    assert_eq!(metrics.vmid, 101);
}
