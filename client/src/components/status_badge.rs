//! Pill label for any entity status or alert severity.

use leptos::prelude::*;

use crate::util::status_style::status_tone;

/// Badge colored by `status_tone`; the raw wire value is the label.
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = status_tone(&status).badge_class();
    view! { <span class=class>{status}</span> }
}
