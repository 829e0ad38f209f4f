//! Nodes grid and VM table with power controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nodes and VMs are polled independently (30 s and 10 s). The node filter
//! is part of the VM poll key, so picking a node resets the table to its
//! loading state and fetches `?node_id=` immediately.

#[cfg(test)]
#[path = "infrastructure_test.rs"]
mod infrastructure_test;

use leptos::prelude::*;
use models::Node;

use crate::components::node_card::NodeCard;
use crate::components::skeleton::{CardSkeleton, TableSkeleton};
use crate::components::vm_table::VmTable;
use crate::net::api;
use crate::net::poll::{NODES_INTERVAL, VMS_INTERVAL, use_polling};
use crate::state::remote::ListPhase;

pub const NO_NODES_TEXT: &str = "No nodes found. Make sure Proxmox is connected and sync has run.";
pub const NO_VMS_TEXT: &str = "No VMs found.";

/// `(value, label)` pairs for the node filter; the empty value means all nodes.
pub fn node_filter_options(nodes: &[Node]) -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "All nodes".to_owned())];
    options.extend(nodes.iter().map(|node| (node.id.clone(), node.hostname.clone())));
    options
}

/// Whether the option carrying `value` reflects the active filter.
pub fn option_is_selected(value: &str, filter: Option<&str>) -> bool {
    filter.unwrap_or_default() == value
}

/// Select value to VM query filter.
pub fn node_filter_from_value(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[component]
pub fn InfrastructurePage() -> impl IntoView {
    let node_filter = RwSignal::new(None::<String>);
    let nodes = use_polling(|| Some(()), Some(NODES_INTERVAL), |()| api::fetch_nodes());
    let vms = use_polling(move || Some(node_filter.get()), Some(VMS_INTERVAL), api::fetch_vms);

    let filter_options = Memo::new(move |_| nodes.state.with(|s| node_filter_options(s.items())));
    let nodes_phase = Memo::new(move |_| nodes.state.with(|s| s.phase()));
    let vms_phase = Memo::new(move |_| vms.state.with(|s| s.phase()));
    let vm_rows = Signal::derive(move || vms.state.with(|s| s.items().to_vec()));
    let on_vm_action = Callback::new(move |()| vms.refresh());

    let nodes_section = move || match nodes_phase.get() {
        ListPhase::Pending => view! {
            <div class="card-grid">{(0..3).map(|_| view! { <CardSkeleton/> }).collect_view()}</div>
        }
        .into_any(),
        ListPhase::Failed => view! { <div class="card card__error">"Failed to load nodes"</div> }.into_any(),
        ListPhase::Empty => view! { <div class="card card__empty">{NO_NODES_TEXT}</div> }.into_any(),
        ListPhase::Ready => view! {
            <div class="card-grid">
                {move || {
                    nodes
                        .state
                        .with(|s| s.items().to_vec())
                        .into_iter()
                        .map(|node| view! { <NodeCard node=node/> })
                        .collect_view()
                }}
            </div>
        }
        .into_any(),
    };

    let vms_section = move || match vms_phase.get() {
        ListPhase::Pending => view! { <div class="card"><TableSkeleton rows=8/></div> }.into_any(),
        ListPhase::Failed => view! { <div class="card card__error">"Failed to load VMs"</div> }.into_any(),
        ListPhase::Empty => view! { <div class="card card__empty">{NO_VMS_TEXT}</div> }.into_any(),
        ListPhase::Ready => view! {
            <div class="card card--flush">
                <VmTable vms=vm_rows on_action=on_vm_action/>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="page">
            <h1 class="page__title">"Infrastructure"</h1>

            <section class="page__section">
                <h2 class="page__subtitle">"Nodes"</h2>
                {nodes_section}
            </section>

            <section class="page__section">
                <div class="page__section-header">
                    <h2 class="page__subtitle">"Virtual Machines"</h2>
                    <label class="filter">
                        <span class="filter__label">"Node"</span>
                        <select
                            class="filter__select"
                            prop:value=move || node_filter.get().unwrap_or_default()
                            on:change=move |ev| node_filter.set(node_filter_from_value(&event_target_value(&ev)))
                        >
                            {move || {
                                filter_options
                                    .get()
                                    .into_iter()
                                    .map(|(value, label)| {
                                        let selected_value = value.clone();
                                        view! {
                                            <option
                                                value=value
                                                selected=move || {
                                                    option_is_selected(&selected_value, node_filter.get().as_deref())
                                                }
                                            >
                                                {label}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                </div>
                {vms_section}
            </section>
        </div>
    }
}
