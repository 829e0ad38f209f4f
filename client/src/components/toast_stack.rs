//! Bottom-right stack of transient notifications.
//!
//! DESIGN
//! ======
//! Each toast schedules its own dismissal when it first renders; a manual
//! dismiss before the timer fires makes the later dismiss a no-op.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_TTL_MS;

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| view! { <ToastItem toast=toast toasts=toasts/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
        let _ = toasts.try_update(|t| t.dismiss(id));
    });

    view! {
        <div class=format!("toast {}", toast.kind.class()) role="status">
            <span class="toast__message">{toast.message}</span>
            <button
                class="toast__dismiss"
                on:click=move |_| toasts.update(|t| t.dismiss(id))
                title="Dismiss"
                aria-label="Dismiss notification"
            >
                "✕"
            </button>
        </div>
    }
}
