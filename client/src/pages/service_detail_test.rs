use super::*;
use models::{ServiceKind, ServiceStatus};

fn service() -> Service {
    Service {
        id: "svc-1".into(),
        name: "api-gateway".into(),
        description: None,
        kind: ServiceKind::Container,
        status: ServiceStatus::Degraded,
        health_check_url: None,
        vm_id: None,
        namespace: Some("edge".into()),
        metadata: None,
        last_health_check: None,
        created_at: "2025-01-02T03:04:05Z".into(),
        updated_at: "2025-01-02T03:04:05Z".into(),
    }
}

#[test]
fn detail_rows_fill_fallbacks() {
    let rows = detail_rows(&service());
    assert_eq!(
        rows,
        vec![
            ("Type", "Container".to_owned()),
            ("Health Check URL", "N/A".to_owned()),
            ("Last Health Check", "Never".to_owned()),
            ("Namespace", "edge".to_owned()),
            ("Created", "2025-01-02 03:04:05 UTC".to_owned()),
        ]
    );
}

#[test]
fn delete_prompt_names_the_service() {
    assert_eq!(delete_prompt("api"), "Delete service \"api\"? This cannot be undone.");
}
