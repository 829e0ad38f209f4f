use super::*;
use models::{AlertSeverity, AlertStatus};

fn alert(id: &str, status: AlertStatus) -> Alert {
    Alert {
        id: id.into(),
        rule_id: "rule-1".into(),
        source_type: "vm".into(),
        source_id: "vm-1".into(),
        severity: AlertSeverity::Warning,
        status,
        title: format!("alert {id}"),
        description: None,
        fired_at: "2025-03-01T10:00:00Z".into(),
        acknowledged_at: None,
        resolved_at: None,
    }
}

#[test]
fn active_tab_keeps_firing_only() {
    let alerts = vec![
        alert("a", AlertStatus::Firing),
        alert("b", AlertStatus::Resolved),
        alert("c", AlertStatus::Acknowledged),
        alert("d", AlertStatus::Firing),
    ];
    let ids: Vec<_> = alerts_for_tab(AlertsTab::Active, &alerts).into_iter().map(|a| a.id).collect();
    assert_eq!(ids, vec!["a", "d"]);
    assert_eq!(alerts_for_tab(AlertsTab::History, &alerts).len(), 4);
}

#[test]
fn active_tab_is_empty_when_nothing_fires() {
    let alerts = vec![alert("a", AlertStatus::Resolved)];
    assert!(alerts_for_tab(AlertsTab::Active, &alerts).is_empty());
}

#[test]
fn resolved_cell_falls_back_to_dash() {
    let mut resolved = alert("a", AlertStatus::Resolved);
    assert_eq!(resolved_cell(&resolved), "-");
    resolved.resolved_at = Some("2025-03-01T11:30:00Z".into());
    assert_eq!(resolved_cell(&resolved), "2025-03-01 11:30:00 UTC");
}

#[test]
fn toggle_message_reflects_new_state() {
    assert_eq!(rule_toggled_message("High CPU", true), "Rule \"High CPU\" enabled");
    assert_eq!(rule_toggled_message("High CPU", false), "Rule \"High CPU\" disabled");
}
