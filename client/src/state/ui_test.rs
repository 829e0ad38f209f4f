use super::*;

#[test]
fn ui_state_default_sidebar_expanded() {
    let state = UiState::default();
    assert!(!state.sidebar_collapsed);
}

#[test]
fn ui_state_default_alerts_tab_is_active() {
    assert_eq!(UiState::default().alerts_tab, AlertsTab::Active);
}

#[test]
fn toggle_sidebar_flips_and_reports_new_value() {
    let mut state = UiState::default();
    assert!(state.toggle_sidebar());
    assert!(state.sidebar_collapsed);
    assert!(!state.toggle_sidebar());
    assert!(!state.sidebar_collapsed);
}

#[test]
fn alerts_tab_labels_in_display_order() {
    let labels: Vec<_> = AlertsTab::ALL.iter().map(|tab| tab.label()).collect();
    assert_eq!(labels, vec!["Active Alerts", "History", "Alert Rules"]);
}
