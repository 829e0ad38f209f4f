use super::*;

fn rule_json(condition: &str, threshold: f64) -> serde_json::Value {
    serde_json::json!({
        "id": "rule-1",
        "name": "High CPU",
        "description": null,
        "metric_name": "cpu_usage",
        "condition": condition,
        "threshold": threshold,
        "duration_seconds": 300,
        "severity": "critical",
        "enabled": true,
        "notification_channels": ["email"],
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-01T00:00:00Z"
    })
}

#[test]
fn alert_decodes_and_reports_firing() {
    let raw = serde_json::json!({
        "id": "a-1",
        "rule_id": "rule-1",
        "source_type": "vm",
        "source_id": "vm-1",
        "severity": "warning",
        "status": "firing",
        "title": "CPU above 90%",
        "fired_at": "2025-03-01T10:00:00Z"
    });
    let alert: Alert = serde_json::from_value(raw).expect("alert");
    assert!(alert.is_firing());
    assert_eq!(alert.severity, AlertSeverity::Warning);
    assert_eq!(alert.resolved_at, None);
    assert_eq!(alert.description, None);
}

#[test]
fn alert_status_unknown_values_are_not_firing() {
    let raw = serde_json::json!({
        "id": "a-2",
        "rule_id": "rule-1",
        "source_type": "vm",
        "source_id": "vm-1",
        "severity": "page",
        "status": "silenced",
        "title": "x",
        "fired_at": "2025-03-01T10:00:00Z"
    });
    let alert: Alert = serde_json::from_value(raw).expect("alert");
    assert_eq!(alert.status, AlertStatus::Unknown);
    assert_eq!(alert.severity, AlertSeverity::Unknown);
    assert!(!alert.is_firing());
}

#[test]
fn rule_condition_label_uses_symbol() {
    let rule: AlertRule = serde_json::from_value(rule_json("gte", 90.0)).expect("rule");
    assert_eq!(rule.condition_label(), ">= 90");

    let rule: AlertRule = serde_json::from_value(rule_json("lt", 12.5)).expect("rule");
    assert_eq!(rule.condition_label(), "< 12.5");
}

#[test]
fn rule_condition_unknown_has_placeholder_symbol() {
    let rule: AlertRule = serde_json::from_value(rule_json("between", 1.0)).expect("rule");
    assert_eq!(rule.condition, RuleCondition::Unknown);
    assert_eq!(rule.condition.symbol(), "?");
}

#[test]
fn rule_patch_only_sends_set_fields() {
    assert_eq!(serde_json::to_value(AlertRulePatch::default()).expect("ser"), serde_json::json!({}));
    let patch = AlertRulePatch { enabled: Some(false) };
    assert_eq!(serde_json::to_value(patch).expect("ser"), serde_json::json!({"enabled": false}));
}
