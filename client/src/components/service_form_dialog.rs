//! Register / edit dialog for services.

#[cfg(test)]
#[path = "service_form_dialog_test.rs"]
mod service_form_dialog_test;

use leptos::prelude::*;
use models::{Service, ServiceDraft, ServiceKind};

use crate::net::api;
use crate::state::toast::ToastState;
use crate::util::format::capitalize;

/// Editable text state behind the dialog inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceForm {
    pub name: String,
    pub description: String,
    pub kind: ServiceKind,
    pub health_check_url: String,
    pub namespace: String,
    /// Not editable here; carried through so an edit keeps the link.
    pub vm_id: Option<String>,
}

impl Default for ServiceForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            kind: ServiceKind::Vm,
            health_check_url: String::new(),
            namespace: String::new(),
            vm_id: None,
        }
    }
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

impl ServiceForm {
    pub fn from_service(service: &Service) -> Self {
        let draft = ServiceDraft::from_service(service);
        Self {
            name: draft.name,
            description: draft.description.unwrap_or_default(),
            kind: draft.kind,
            health_check_url: draft.health_check_url.unwrap_or_default(),
            namespace: draft.namespace.unwrap_or_default(),
            vm_id: draft.vm_id,
        }
    }

    /// Validate and build the request body. Blank optional fields become `None`.
    pub fn to_draft(&self) -> Result<ServiceDraft, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required");
        }
        if self.kind == ServiceKind::Unknown {
            return Err("Select a service type");
        }
        let health_check_url = optional_text(&self.health_check_url);
        let bad_scheme = health_check_url
            .as_deref()
            .is_some_and(|url| !(url.starts_with("http://") || url.starts_with("https://")));
        if bad_scheme {
            return Err("Health check URL must start with http:// or https://");
        }
        Ok(ServiceDraft {
            name: name.to_owned(),
            description: optional_text(&self.description),
            kind: self.kind,
            health_check_url,
            namespace: optional_text(&self.namespace),
            vm_id: self.vm_id.clone(),
        })
    }
}

/// `(value, label)` pairs for the type select; the leading placeholder
/// carries the `unknown` value.
pub fn kind_options() -> Vec<(&'static str, String)> {
    let mut options = vec![(ServiceKind::Unknown.as_str(), "Select a type".to_owned())];
    options.extend(ServiceKind::SELECTABLE.into_iter().map(|kind| (kind.as_str(), capitalize(kind.as_str()))));
    options
}

pub fn saved_message(created: bool, name: &str) -> String {
    if created {
        format!("Service \"{name}\" registered")
    } else {
        format!("Service \"{name}\" updated")
    }
}

/// Modal form. With `existing` it edits that service, otherwise it registers a new one.
#[component]
pub fn ServiceFormDialog(
    #[prop(optional)] existing: Option<Service>,
    on_cancel: Callback<()>,
    on_saved: Callback<Service>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let editing_id = existing.as_ref().map(|s| s.id.clone());
    let creating = editing_id.is_none();
    let form = RwSignal::new(existing.as_ref().map(ServiceForm::from_service).unwrap_or_default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);

    let submit = move || {
        if busy.get_untracked() {
            return;
        }
        let draft = match form.with_untracked(ServiceForm::to_draft) {
            Ok(draft) => draft,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let editing_id = editing_id.clone();
        leptos::task::spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_service(id, draft).await,
                None => api::create_service(draft).await,
            };
            let _ = busy.try_set(false);
            match result {
                Ok(service) => {
                    let _ = toasts.try_update(|t| t.success(saved_message(creating, &service.name)));
                    on_saved.run(service);
                }
                Err(err) => {
                    let _ = toasts.try_update(|t| t.error(err.message));
                }
            }
        });
    };

    let title = if creating { "Register Service" } else { "Edit Service" };
    let submit_label = if creating { "Register" } else { "Save Changes" };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form
                class="dialog dialog--form"
                on:click=move |ev| ev.stop_propagation()
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <h2 class="dialog__title">{title}</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        required=true
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        autofocus=true
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__textarea"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Type"
                    <select
                        class="dialog__input"
                        prop:value=move || form.with(|f| f.kind.as_str())
                        on:change=move |ev| form.update(|f| f.kind = ServiceKind::from_wire(&event_target_value(&ev)))
                    >
                        {kind_options()
                            .into_iter()
                            .map(|(value, label)| {
                                let placeholder = value == ServiceKind::Unknown.as_str();
                                view! { <option value=value disabled=placeholder>{label}</option> }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Health Check URL"
                    <input
                        class="dialog__input"
                        type="url"
                        placeholder="https://example.internal/health"
                        prop:value=move || form.with(|f| f.health_check_url.clone())
                        on:input=move |ev| form.update(|f| f.health_check_url = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Namespace"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.namespace.clone())
                        on:input=move |ev| form.update(|f| f.namespace = event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|message| view! { <p class="dialog__error">{message}</p> })}
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(()) disabled=move || busy.get()>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { submit_label }}
                    </button>
                </div>
            </form>
        </div>
    }
}
