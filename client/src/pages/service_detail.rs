//! Single service: details, edit, delete and history.

#[cfg(test)]
#[path = "service_detail_test.rs"]
mod service_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use models::Service;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::resource_chart::ResourceChart;
use crate::components::service_form_dialog::ServiceFormDialog;
use crate::components::skeleton::CardSkeleton;
use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::net::poll::use_polling;
use crate::state::toast::ToastState;
use crate::util::format::{capitalize, format_optional_timestamp, format_timestamp};

/// Label/value rows of the details card (status is rendered as a badge).
pub fn detail_rows(service: &Service) -> Vec<(&'static str, String)> {
    vec![
        ("Type", capitalize(service.kind.as_str())),
        ("Health Check URL", service.health_check_url.clone().unwrap_or_else(|| "N/A".to_owned())),
        ("Last Health Check", format_optional_timestamp(service.last_health_check.as_deref(), "Never")),
        ("Namespace", service.namespace.clone().unwrap_or_else(|| "N/A".to_owned())),
        ("Created", format_timestamp(&service.created_at)),
    ]
}

pub fn delete_prompt(name: &str) -> String {
    format!("Delete service \"{name}\"? This cannot be undone.")
}

#[component]
pub fn ServiceDetailPage() -> impl IntoView {
    let params = use_params_map();
    let service_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let service = use_polling(move || Some(service_id.get()), None, api::fetch_service);
    let show_edit = RwSignal::new(false);
    let show_delete = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let deleted = RwSignal::new(false);

    Effect::new(move || {
        if deleted.get() {
            navigate("/services", NavigateOptions::default());
        }
    });

    let on_edit_cancel = Callback::new(move |()| show_edit.set(false));
    let on_saved = Callback::new(move |_: Service| {
        show_edit.set(false);
        service.refresh();
    });
    let on_delete_cancel = Callback::new(move |()| show_delete.set(false));
    let on_delete_confirm = Callback::new(move |()| {
        if deleting.get_untracked() {
            return;
        }
        let id = service_id.get_untracked();
        let name = service.state.with_untracked(|s| s.data.as_ref().map(|svc| svc.name.clone())).unwrap_or_default();
        deleting.set(true);
        leptos::task::spawn_local(async move {
            let result = api::delete_service(id).await;
            let _ = deleting.try_set(false);
            let _ = show_delete.try_set(false);
            match result {
                Ok(()) => {
                    let _ = toasts.try_update(|t| t.success(format!("Service \"{name}\" deleted")));
                    let _ = deleted.try_set(true);
                }
                Err(err) => {
                    let _ = toasts.try_update(|t| t.error(err.message));
                }
            }
        });
    });

    let body = move || {
        let state = service.state.get();
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
            let message = if not_found { "Service not found." } else { "Failed to load service" };
            return view! {
                <div class="card card__empty">
                    <p>{message}</p>
                    <a class="link" href="/services">"Back to services"</a>
                </div>
            }
            .into_any();
        };

        let status = current.status.as_str();
        let rows = detail_rows(&current)
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
                <a class="icon-btn" href="/services" title="Back">"←"</a>
                <div class="page__heading">
                    <h1 class="page__title">{current.name.clone()}</h1>
                    {current.description.clone().map(|d| view! { <p class="page__meta">{d}</p> })}
                </div>
                <StatusBadge status=status/>
                <div class="page__actions">
                    <button class="btn" on:click=move |_| show_edit.set(true)>"Edit"</button>
                    <button class="btn btn--danger" on:click=move |_| show_delete.set(true)>"Delete"</button>
                </div>
            </div>
            <section class="card">
                <h2 class="card__title">"Service Details"</h2>
                <div class="card__body kv-grid">
                    <div class="kv-row">
                        <span class="kv-row__label">"Status"</span>
                        <StatusBadge status=status/>
                    </div>
                    {rows}
                </div>
            </section>
        }
        .into_any()
    };

    let has_service = move || service.state.with(|s| s.data.is_some());
    let current = move || service.state.with(|s| s.data.clone());

    view! {
        <div class="page">
            {body}
            <Show when=has_service>
                <ResourceChart source_id=service_id/>
            </Show>
            <Show when=move || show_edit.get() && has_service()>
                {move || current().map(|svc| view! { <ServiceFormDialog existing=svc on_cancel=on_edit_cancel on_saved=on_saved/> })}
            </Show>
            <Show when=move || show_delete.get() && has_service()>
                <ConfirmDialog
                    title="Delete Service"
                    message=current().map(|svc| delete_prompt(&svc.name)).unwrap_or_default()
                    busy=deleting
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </div>
    }
}
