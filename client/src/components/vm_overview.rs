//! Dashboard card with the first few VMs.

use leptos::prelude::*;

use crate::components::skeleton::TableSkeleton;
use crate::net::api;
use crate::net::poll::{VMS_INTERVAL, use_polling};
use crate::state::remote::ListPhase;
use crate::util::format::{format_gb, format_mb_as_gb};
use crate::util::listing::{VM_OVERVIEW_LIMIT, top_n};
use crate::util::status_style::{status_tone, vm_status_dot_class};

#[component]
pub fn VmOverview() -> impl IntoView {
    let vms = use_polling(|| Some(()), Some(VMS_INTERVAL), |()| api::fetch_vms(None));

    let body = move || {
        let state = vms.state.get();
        match state.phase() {
            ListPhase::Pending => view! { <TableSkeleton rows=5/> }.into_any(),
            ListPhase::Failed => view! { <p class="card__error">"Failed to load VMs"</p> }.into_any(),
            ListPhase::Empty => view! { <p class="card__empty">"No VMs found"</p> }.into_any(),
            ListPhase::Ready => view! {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Status"</th>
                            <th class="data-table__num">"CPU"</th>
                            <th class="data-table__num">"Memory"</th>
                            <th class="data-table__num">"Disk"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {top_n(state.items(), VM_OVERVIEW_LIMIT)
                            .into_iter()
                            .map(|vm| {
                                let status = vm.status.as_str();
                                view! {
                                    <tr>
                                        <td class="data-table__mono">
                                            <a href=format!("/infrastructure/{}", vm.id)>{vm.name}</a>
                                        </td>
                                        <td>
                                            <span class=format!("vm-status {}", status_tone(status).text_class())>
                                                <span class=vm_status_dot_class(status)></span>
                                                {status}
                                            </span>
                                        </td>
                                        <td class="data-table__num">{format!("{} cores", vm.cpu_cores)}</td>
                                        <td class="data-table__num">{format_mb_as_gb(vm.memory_mb)}</td>
                                        <td class="data-table__num">{format_gb(vm.disk_gb)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            }
            .into_any(),
        }
    };

    view! {
        <section class="card">
            <h2 class="card__title">"VM Overview"</h2>
            <div class="card__body">{body}</div>
        </section>
    }
}
