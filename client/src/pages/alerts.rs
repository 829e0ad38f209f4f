//! Alerts page: active alerts, full history and rule configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! One poll of every alert (30 s) feeds both the Active and History tabs;
//! rules are fetched on mount and refreshed after a toggle. The selected tab
//! lives in `UiState` so it survives navigating away and back.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use leptos::prelude::*;
use models::{Alert, AlertRule, AlertRulePatch};

use crate::components::skeleton::TableSkeleton;
use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::net::poll::{ALERTS_INTERVAL, use_polling};
use crate::state::remote::{ListPhase, Remote};
use crate::state::toast::ToastState;
use crate::state::ui::{AlertsTab, UiState};
use crate::util::format::{format_optional_timestamp, format_timestamp};
use crate::util::listing::firing_alerts;
use crate::util::status_style::{enabled_label, severity_border_class};

pub const NO_ACTIVE_TEXT: &str = "No active alerts";
pub const NO_HISTORY_TEXT: &str = "No alert history";
pub const NO_RULES_TEXT: &str = "No alert rules configured";

/// Rows for a tab; the Active tab keeps firing alerts only.
pub fn alerts_for_tab(tab: AlertsTab, alerts: &[Alert]) -> Vec<Alert> {
    match tab {
        AlertsTab::Active => firing_alerts(alerts),
        AlertsTab::History | AlertsTab::Rules => alerts.to_vec(),
    }
}

pub fn resolved_cell(alert: &Alert) -> String {
    format_optional_timestamp(alert.resolved_at.as_deref(), "-")
}

pub fn rule_toggled_message(name: &str, enabled: bool) -> String {
    if enabled {
        format!("Rule \"{name}\" enabled")
    } else {
        format!("Rule \"{name}\" disabled")
    }
}

fn empty_row(columns: u8, text: &'static str) -> AnyView {
    view! {
        <tr>
            <td class="data-table__empty" colspan=columns.to_string()>{text}</td>
        </tr>
    }
    .into_any()
}

#[component]
fn AlertTable(tab: AlertsTab, alerts: RwSignal<Remote<Vec<Alert>>>) -> impl IntoView {
    let history = tab == AlertsTab::History;
    let columns: u8 = if history { 5 } else { 4 };
    let empty_text = if history { NO_HISTORY_TEXT } else { NO_ACTIVE_TEXT };

    move || {
        let state = alerts.get();
        match state.phase() {
            ListPhase::Pending => return view! { <div class="card"><TableSkeleton rows=5/></div> }.into_any(),
            ListPhase::Failed => {
                return view! { <div class="card card__error">"Failed to load alerts"</div> }.into_any();
            }
            ListPhase::Empty | ListPhase::Ready => {}
        }
        let rows = alerts_for_tab(tab, state.items());
        let body = if rows.is_empty() {
            empty_row(columns, empty_text)
        } else {
            rows.into_iter()
                .map(|alert| {
                    let resolved = history.then(|| view! { <td class="data-table__mono data-table__muted">{resolved_cell(&alert)}</td> });
                    view! {
                        <tr class=severity_border_class(alert.severity.as_str())>
                            <td>
                                <p class="data-table__strong">{alert.title.clone()}</p>
                                {alert.description.clone().map(|d| view! { <p class="data-table__sub">{d}</p> })}
                            </td>
                            <td><StatusBadge status=alert.severity.as_str()/></td>
                            <td><StatusBadge status=alert.status.as_str()/></td>
                            <td class="data-table__mono data-table__muted">{format_timestamp(&alert.fired_at)}</td>
                            {resolved}
                        </tr>
                    }
                })
                .collect_view()
                .into_any()
        };
        view! {
            <div class="card card--flush">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Severity"</th>
                            <th>"Status"</th>
                            <th>"Fired At"</th>
                            {history.then(|| view! { <th>"Resolved At"</th> })}
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
        }
        .into_any()
    }
}

#[component]
fn RuleTable(rules: RwSignal<Remote<Vec<AlertRule>>>, on_changed: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let toggling = RwSignal::new(None::<String>);

    let toggle = move |rule: AlertRule| {
        if toggling.get_untracked().is_some() {
            return;
        }
        let enabled = !rule.enabled;
        toggling.set(Some(rule.id.clone()));
        leptos::task::spawn_local(async move {
            let result = api::update_alert_rule(rule.id.clone(), AlertRulePatch { enabled: Some(enabled) }).await;
            let _ = toggling.try_set(None);
            match result {
                Ok(updated) => {
                    let _ = toasts.try_update(|t| t.success(rule_toggled_message(&updated.name, updated.enabled)));
                    on_changed.run(());
                }
                Err(err) => {
                    let _ = toasts.try_update(|t| t.error(err.message));
                }
            }
        });
    };

    move || {
        let state = rules.get();
        let body = match state.phase() {
            ListPhase::Pending => return view! { <div class="card"><TableSkeleton rows=4/></div> }.into_any(),
            ListPhase::Failed => {
                return view! { <div class="card card__error">"Failed to load alert rules"</div> }.into_any();
            }
            ListPhase::Empty => empty_row(5, NO_RULES_TEXT),
            ListPhase::Ready => state
                .items()
                .iter()
                .cloned()
                .map(|rule| {
                    let rule_id = rule.id.clone();
                    let enabled = rule.enabled;
                    let tone = if enabled { "tone-text--success" } else { "tone-text--muted" };
                    let dot = if enabled { "status-dot status-dot--success" } else { "status-dot status-dot--muted" };
                    let busy = move || toggling.with(|id| id.as_deref() == Some(rule_id.as_str()));
                    let toggle_rule = rule.clone();
                    view! {
                        <tr>
                            <td>
                                <p class="data-table__strong">{rule.name.clone()}</p>
                                {rule.description.clone().map(|d| view! { <p class="data-table__sub">{d}</p> })}
                            </td>
                            <td class="data-table__mono">{rule.metric_name.clone()}</td>
                            <td class="data-table__mono">{rule.condition_label()}</td>
                            <td><StatusBadge status=rule.severity.as_str()/></td>
                            <td>
                                <button
                                    class=format!("toggle {tone}")
                                    role="switch"
                                    aria-checked=enabled.to_string()
                                    disabled=move || toggling.with(Option::is_some)
                                    class:toggle--busy=busy
                                    on:click=move |_| toggle(toggle_rule.clone())
                                >
                                    <span class=dot></span>
                                    {enabled_label(enabled)}
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
                .into_any(),
        };
        view! {
            <div class="card card--flush">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Metric"</th>
                            <th>"Condition"</th>
                            <th>"Severity"</th>
                            <th>"Enabled"</th>
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
        }
        .into_any()
    }
}

#[component]
pub fn AlertsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let alerts = use_polling(|| Some(()), Some(ALERTS_INTERVAL), |()| api::fetch_alerts(None));
    let rules = use_polling(|| Some(()), None, |()| api::fetch_alert_rules());
    let tab = Memo::new(move |_| ui.with(|u| u.alerts_tab));
    let on_rules_changed = Callback::new(move |()| rules.refresh());

    view! {
        <div class="page">
            <h1 class="page__title">"Alerts"</h1>
            <div class="tabs" role="tablist">
                {AlertsTab::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                class="tabs__item"
                                role="tab"
                                class:tabs__item--active=move || tab.get() == option
                                aria-selected=move || (tab.get() == option).to_string()
                                on:click=move |_| ui.update(|u| u.alerts_tab = option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || match tab.get() {
                AlertsTab::Rules => view! { <RuleTable rules=rules.state on_changed=on_rules_changed/> }.into_any(),
                other => view! { <AlertTable tab=other alerts=alerts.state/> }.into_any(),
            }}
        </div>
    }
}
