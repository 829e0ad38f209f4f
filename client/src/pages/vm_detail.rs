//! Single VM: live usage, configuration and history.
//!
//! SYSTEM CONTEXT
//! ==============
//! The VM record is fetched once per id and refreshed after a power action;
//! the point-in-time metrics poll every 30 s. A 404 renders a not-found
//! state instead of the page body.

#[cfg(test)]
#[path = "vm_detail_test.rs"]
mod vm_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use models::{Vm, VmMetrics};

use crate::components::resource_chart::ResourceChart;
use crate::components::skeleton::CardSkeleton;
use crate::components::status_badge::StatusBadge;
use crate::components::vm_table::VmActionButtons;
use crate::net::api;
use crate::net::poll::{VM_METRICS_INTERVAL, use_polling};
use crate::state::vm_actions::VmActionState;
use crate::util::format::{format_bytes, format_gb, format_mb_as_gb, format_optional_percent, format_uptime};

/// Subtitle under the VM name, e.g. `"VMID: 101 | QEMU"`.
pub fn vmid_line(vm: &Vm) -> String {
    format!("VMID: {} | {}", vm.vmid, vm.kind.as_str().to_uppercase())
}

#[derive(Clone, Debug, PartialEq)]
pub struct UsageCard {
    pub title: &'static str,
    pub value: String,
    pub detail: String,
}

/// CPU / Memory / Disk cards; values read `-%` until metrics arrive.
pub fn usage_cards(vm: &Vm, metrics: Option<&VmMetrics>) -> [UsageCard; 3] {
    [
        UsageCard {
            title: "CPU",
            value: format_optional_percent(metrics.map(|m| m.cpu_usage)),
            detail: format!("{} cores allocated", vm.cpu_cores),
        },
        UsageCard {
            title: "Memory",
            value: format_optional_percent(metrics.map(|m| m.memory_usage)),
            detail: format!("{} allocated", format_mb_as_gb(vm.memory_mb)),
        },
        UsageCard {
            title: "Disk",
            value: format_optional_percent(metrics.map(|m| m.disk_usage)),
            detail: format!("{} allocated", format_gb(vm.disk_gb)),
        },
    ]
}

/// Label/value rows of the configuration card.
pub fn config_rows(vm: &Vm) -> Vec<(&'static str, String)> {
    let tags = match vm.tags.as_deref() {
        Some(tags) if !tags.is_empty() => tags.join(", "),
        _ => "None".to_owned(),
    };
    vec![
        ("IP Address", vm.ip_address.clone().unwrap_or_else(|| "N/A".to_owned())),
        ("OS Type", vm.os_type.clone().unwrap_or_else(|| "N/A".to_owned())),
        ("Type", vm.kind.as_str().to_owned()),
        ("Tags", tags),
    ]
}

#[component]
fn NetworkCard(metrics: Option<VmMetrics>) -> impl IntoView {
    let (rx, tx, uptime) = match &metrics {
        Some(m) => (format_bytes(m.network_in), format_bytes(m.network_out), Some(format_uptime(m.uptime))),
        None => ("-".to_owned(), "-".to_owned(), None),
    };
    view! {
        <div class="card metric-card">
            <p class="metric-card__title">"Network"</p>
            <p class="metric-card__line"><span class="tone-text--success">"IN: "</span>{rx}</p>
            <p class="metric-card__line"><span class="tone-text--warning">"OUT: "</span>{tx}</p>
            {uptime.map(|up| view! { <p class="metric-card__detail">{format!("Uptime: {up}")}</p> })}
        </div>
    }
}

#[component]
pub fn VmDetailPage() -> impl IntoView {
    let params = use_params_map();
    let vm_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let vm = use_polling(move || Some(vm_id.get()), None, api::fetch_vm);
    let metrics = use_polling(move || Some(vm_id.get()), Some(VM_METRICS_INTERVAL), api::fetch_vm_metrics);
    let actions = RwSignal::new(VmActionState::default());
    let on_action = Callback::new(move |()| vm.refresh());

    let body = move || {
        let state = vm.state.get();
        if state.is_pending() {
            return view! {
                <div class="page__stack">
                    <CardSkeleton/>
                    <CardSkeleton/>
                </div>
            }
            .into_any();
        }
        let not_found = state.not_found();
        let Some(current) = state.data else {
            let message = if not_found { "VM not found." } else { "Failed to load VM" };
            return view! {
                <div class="card card__empty">
                    <p>{message}</p>
                    <a class="link" href="/infrastructure">"Back to infrastructure"</a>
                </div>
            }
            .into_any();
        };

        let live = metrics.state.get().data;
        let cards = usage_cards(&current, live.as_ref())
            .into_iter()
            .map(|card| {
                view! {
                    <div class="card metric-card">
                        <p class="metric-card__title">{card.title}</p>
                        <p class="metric-card__value">{card.value}</p>
                        <p class="metric-card__detail">{card.detail}</p>
                    </div>
                }
            })
            .collect_view();
        let config = config_rows(&current)
            .into_iter()
            .map(|(label, value)| {
                view! {
                    <div class="kv-row">
                        <span class="kv-row__label">{label}</span>
                        <span class="kv-row__value">{value}</span>
                    </div>
                }
            })
            .collect_view();

        view! {
            <div class="page__header">
                <a class="icon-btn" href="/infrastructure" title="Back">"←"</a>
                <div class="page__heading">
                    <h1 class="page__title">{current.name.clone()}</h1>
                    <p class="page__meta">{vmid_line(&current)}</p>
                </div>
                <StatusBadge status=current.status.as_str()/>
                <div class="page__actions">
                    <VmActionButtons vm=current.clone() actions=actions on_action=on_action labelled=true/>
                </div>
            </div>
            <div class="metric-grid">
                {cards}
                <NetworkCard metrics=live/>
            </div>
            <section class="card">
                <h2 class="card__title">"Configuration"</h2>
                <div class="card__body kv-grid">{config}</div>
            </section>
        }
        .into_any()
    };

    view! {
        <div class="page">
            {body}
            <Show when=move || vm.state.with(|s| s.data.is_some())>
                <ResourceChart source_id=vm_id/>
            </Show>
        </div>
    }
}
