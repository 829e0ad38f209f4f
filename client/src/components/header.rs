//! Top bar with the active-alert badge.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use models::ResourceOverview;

use crate::net::poll::Poll;

/// Badge text for the bell; hidden when nothing is firing.
pub fn alert_badge_label(active_alerts: u64) -> Option<String> {
    match active_alerts {
        0 => None,
        1..=99 => Some(active_alerts.to_string()),
        _ => Some("99+".to_owned()),
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let overview = expect_context::<Poll<ResourceOverview>>();
    let badge = move || {
        overview
            .state
            .get()
            .data
            .and_then(|o| alert_badge_label(o.active_alerts))
    };

    view! {
        <header class="app-header">
            <div class="app-header__spacer"></div>
            <div class="app-header__actions">
                <a class="app-header__alerts" href="/alerts" title="Alerts">
                    <span class="app-header__bell" aria-hidden="true">"🔔"</span>
                    {move || badge().map(|label| view! { <span class="app-header__badge">{label}</span> })}
                </a>
                <span class="app-header__avatar">"NX"</span>
            </div>
        </header>
    }
}
