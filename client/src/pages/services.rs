//! Service inventory with registration.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use models::Service;

use crate::components::service_form_dialog::ServiceFormDialog;
use crate::components::skeleton::TableSkeleton;
use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::net::poll::use_polling;
use crate::state::remote::ListPhase;
use crate::util::format::{capitalize, format_optional_timestamp};

pub const NO_SERVICES_TEXT: &str = "No services registered yet.";

/// Cell text for the health-check column.
pub fn health_check_cell(service: &Service) -> String {
    service.health_check_url.clone().unwrap_or_else(|| "-".to_owned())
}

pub fn last_check_cell(service: &Service) -> String {
    format_optional_timestamp(service.last_health_check.as_deref(), "Never")
}

#[component]
fn ServiceRow(service: Service) -> impl IntoView {
    let health = health_check_cell(&service);
    let last_check = last_check_cell(&service);
    view! {
        <tr>
            <td>
                <a class="data-table__link" href=format!("/services/{}", service.id)>{service.name.clone()}</a>
                {service.description.clone().map(|d| view! { <p class="data-table__sub">{d}</p> })}
            </td>
            <td class="data-table__muted">{capitalize(service.kind.as_str())}</td>
            <td><StatusBadge status=service.status.as_str()/></td>
            <td class="data-table__mono data-table__muted data-table__truncate" title=health.clone()>{health.clone()}</td>
            <td class="data-table__muted">{last_check}</td>
        </tr>
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let services = use_polling(|| Some(()), None, |()| api::fetch_services());
    let show_create = RwSignal::new(false);
    let created_id = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    let on_saved = Callback::new(move |service: Service| {
        show_create.set(false);
        services.refresh();
        created_id.set(Some(service.id));
    });

    Effect::new(move || {
        if let Some(id) = created_id.get() {
            created_id.set(None);
            navigate(&format!("/services/{id}"), NavigateOptions::default());
        }
    });

    let on_cancel = Callback::new(move |()| show_create.set(false));

    let body = move || {
        let state = services.state.get();
        match state.phase() {
            ListPhase::Pending => view! { <div class="card"><TableSkeleton rows=6/></div> }.into_any(),
            ListPhase::Failed => view! { <div class="card card__error">"Failed to load services"</div> }.into_any(),
            ListPhase::Empty => view! { <div class="card card__empty">{NO_SERVICES_TEXT}</div> }.into_any(),
            ListPhase::Ready => view! {
                <div class="card card--flush">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Type"</th>
                                <th>"Status"</th>
                                <th>"Health Check"</th>
                                <th>"Last Check"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {state.items().iter().cloned().map(|service| view! { <ServiceRow service=service/> }).collect_view()}
                        </tbody>
                    </table>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Services"</h1>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "Register Service"
                </button>
            </div>
            {body}
            <Show when=move || show_create.get()>
                <ServiceFormDialog on_cancel=on_cancel on_saved=on_saved/>
            </Show>
        </div>
    }
}
