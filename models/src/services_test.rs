use super::*;

fn service_json() -> serde_json::Value {
    serde_json::json!({
        "id": "svc-1",
        "name": "grafana",
        "description": "Dashboards",
        "type": "container",
        "status": "degraded",
        "health_check_url": "https://grafana.example.com/api/health",
        "vm_id": "vm-9",
        "namespace": "monitoring",
        "metadata": null,
        "last_health_check": null,
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-02T00:00:00Z"
    })
}

#[test]
fn service_decodes_kind_and_status() {
    let service: Service = serde_json::from_value(service_json()).expect("service");
    assert_eq!(service.kind, ServiceKind::Container);
    assert_eq!(service.status, ServiceStatus::Degraded);
    assert_eq!(service.last_health_check, None);
}

#[test]
fn service_status_unknown_is_a_wire_value() {
    let mut raw = service_json();
    raw["status"] = serde_json::json!("unknown");
    let service: Service = serde_json::from_value(raw).expect("service");
    assert_eq!(service.status, ServiceStatus::Unknown);
    assert_eq!(serde_json::to_value(service.status).expect("ser"), "unknown");
}

#[test]
fn service_kind_from_wire_defaults_to_unknown() {
    assert_eq!(ServiceKind::from_wire("vm"), ServiceKind::Vm);
    assert_eq!(ServiceKind::from_wire("external"), ServiceKind::External);
    assert_eq!(ServiceKind::from_wire("lambda"), ServiceKind::Unknown);
}

#[test]
fn draft_serializes_nulls_but_omits_missing_vm_id() {
    let draft = ServiceDraft {
        name: "api".to_owned(),
        description: None,
        kind: ServiceKind::External,
        health_check_url: None,
        namespace: Some("prod".to_owned()),
        vm_id: None,
    };
    let json = serde_json::to_value(&draft).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "name": "api",
            "description": null,
            "type": "external",
            "health_check_url": null,
            "namespace": "prod"
        })
    );
}

#[test]
fn draft_from_service_keeps_vm_link() {
    let service: Service = serde_json::from_value(service_json()).expect("service");
    let draft = ServiceDraft::from_service(&service);
    assert_eq!(draft.name, "grafana");
    assert_eq!(draft.vm_id.as_deref(), Some("vm-9"));
    assert_eq!(draft.kind, ServiceKind::Container);
}
