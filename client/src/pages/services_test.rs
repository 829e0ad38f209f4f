use super::*;
use models::{ServiceKind, ServiceStatus};

fn service() -> Service {
    Service {
        id: "svc-1".into(),
        name: "api-gateway".into(),
        description: None,
        kind: ServiceKind::External,
        status: ServiceStatus::Unknown,
        health_check_url: None,
        vm_id: None,
        namespace: None,
        metadata: None,
        last_health_check: None,
        created_at: "2025-01-01T00:00:00Z".into(),
        updated_at: "2025-01-01T00:00:00Z".into(),
    }
}

#[test]
fn missing_values_use_placeholders() {
    let s = service();
    assert_eq!(health_check_cell(&s), "-");
    assert_eq!(last_check_cell(&s), "Never");
}

#[test]
fn present_values_are_formatted() {
    let mut s = service();
    s.health_check_url = Some("https://gw.internal/healthz".into());
    s.last_health_check = Some("2025-03-01T10:00:00Z".into());
    assert_eq!(health_check_cell(&s), "https://gw.internal/healthz");
    assert_eq!(last_check_cell(&s), "2025-03-01 10:00:00 UTC");
}
