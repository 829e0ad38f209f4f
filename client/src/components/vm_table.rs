//! VM list with power controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the infrastructure page; the VM detail page reuses
//! `run_vm_action` for its own buttons. Outcomes are reported as toasts and
//! `on_action` lets the owner refresh its VM poll.

#[cfg(test)]
#[path = "vm_table_test.rs"]
mod vm_table_test;

use leptos::prelude::*;
use models::{ApiError, Vm, VmAction};

use crate::net::api;
use crate::state::toast::ToastState;
use crate::state::vm_actions::VmActionState;
use crate::util::format::{format_gb, format_mb_as_gb};
use crate::util::status_style::{status_tone, vm_status_dot_class};

pub fn action_started_message(action: VmAction, vm_name: &str) -> String {
    format!("{} {vm_name}...", action.progress_label())
}

pub fn action_sent_message(action: VmAction, vm_name: &str) -> String {
    format!("{vm_name}: {} command sent", action.as_str())
}

/// Backend message when there is one, generic text otherwise.
pub fn action_failed_message(action: VmAction, vm_name: &str, err: &ApiError) -> String {
    if err.message.trim().is_empty() {
        format!("Failed to {} {vm_name}", action.as_str())
    } else {
        err.message.clone()
    }
}

/// Button modifier class per action.
pub fn action_button_class(action: VmAction) -> &'static str {
    match action {
        VmAction::Start => "icon-btn icon-btn--success",
        VmAction::Stop => "icon-btn icon-btn--danger",
        VmAction::Restart => "icon-btn",
    }
}

pub fn action_icon(action: VmAction) -> &'static str {
    match action {
        VmAction::Start => "▶",
        VmAction::Stop => "■",
        VmAction::Restart => "↻",
    }
}

/// Send a control command unless another one is already pending.
pub fn run_vm_action(
    vm: &Vm,
    action: VmAction,
    actions: RwSignal<VmActionState>,
    toasts: RwSignal<ToastState>,
    on_done: Callback<()>,
) {
    let began = actions.try_update(|state| state.try_begin(&vm.id, action)).unwrap_or(false);
    if !began {
        return;
    }
    let vm_id = vm.id.clone();
    let vm_name = vm.name.clone();
    toasts.update(|t| {
        t.info(action_started_message(action, &vm_name));
    });

    leptos::task::spawn_local(async move {
        let result = api::control_vm(vm_id, action).await;
        let _ = toasts.try_update(|t| match &result {
            Ok(()) => t.success(action_sent_message(action, &vm_name)),
            Err(err) => t.error(action_failed_message(action, &vm_name, err)),
        });
        let _ = actions.try_update(VmActionState::finish);
        on_done.run(());
    });
}

/// Start / restart / stop buttons for one VM.
#[component]
pub fn VmActionButtons(
    vm: Vm,
    actions: RwSignal<VmActionState>,
    on_action: Callback<()>,
    #[prop(optional)] labelled: bool,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let disabled = move || actions.with(VmActionState::controls_disabled);

    vm.available_actions()
        .iter()
        .copied()
        .map(|action| {
            let vm = vm.clone();
            view! {
                <button
                    class=action_button_class(action)
                    class:icon-btn--labelled=labelled
                    title=action.label()
                    disabled=disabled
                    on:click=move |_| run_vm_action(&vm, action, actions, toasts, on_action)
                >
                    <span aria-hidden="true">{action_icon(action)}</span>
                    {labelled.then(|| view! { <span>{action.label()}</span> })}
                </button>
            }
        })
        .collect_view()
}

#[component]
fn VmRow(vm: Vm, actions: RwSignal<VmActionState>, on_action: Callback<()>) -> impl IntoView {
    let vm_id = vm.id.clone();
    let status = vm.status.as_str();
    let status_cell = move || match actions.with(|state| state.progress_for(&vm_id)) {
        Some(progress) => view! {
            <span class="vm-status vm-status--pending">
                <span class="spinner" aria-hidden="true"></span>
                {format!("{progress}...")}
            </span>
        }
        .into_any(),
        None => view! {
            <span class=format!("vm-status {}", status_tone(status).text_class())>
                <span class=vm_status_dot_class(status)></span>
                {status}
            </span>
        }
        .into_any(),
    };

    view! {
        <tr>
            <td class="data-table__mono">
                <a href=format!("/infrastructure/{}", vm.id)>{vm.name.clone()}</a>
            </td>
            <td>{status_cell}</td>
            <td class="data-table__mono data-table__upper">{vm.kind.as_str()}</td>
            <td class="data-table__num">{vm.cpu_cores}</td>
            <td class="data-table__num">{format_mb_as_gb(vm.memory_mb)}</td>
            <td class="data-table__num">{format_gb(vm.disk_gb)}</td>
            <td class="data-table__mono data-table__muted">{vm.ip_address.clone().unwrap_or_else(|| "-".to_owned())}</td>
            <td class="data-table__actions">
                <VmActionButtons vm=vm actions=actions on_action=on_action/>
            </td>
        </tr>
    }
}

#[component]
pub fn VmTable(#[prop(into)] vms: Signal<Vec<Vm>>, on_action: Callback<()>) -> impl IntoView {
    let actions = RwSignal::new(VmActionState::default());

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Status"</th>
                    <th>"Type"</th>
                    <th class="data-table__num">"CPU"</th>
                    <th class="data-table__num">"Memory"</th>
                    <th class="data-table__num">"Disk"</th>
                    <th>"IP"</th>
                    <th class="data-table__actions">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    vms.get()
                        .into_iter()
                        .map(|vm| view! { <VmRow vm=vm actions=actions on_action=on_action/> })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
