//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--center">
            <p class="page__meta">"Page not found."</p>
            <a class="link" href="/">"Back to dashboard"</a>
        </div>
    }
}
