//! Dashboard card listing the most recent firing alerts.

use leptos::prelude::*;
use models::AlertStatus;

use crate::components::skeleton::TableSkeleton;
use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::net::poll::{ALERTS_INTERVAL, use_polling};
use crate::state::remote::ListPhase;
use crate::util::format::format_timestamp;
use crate::util::listing::{RECENT_ALERTS_LIMIT, firing_alerts, top_n};
use crate::util::status_style::severity_border_class;

#[component]
pub fn RecentAlerts() -> impl IntoView {
    let alerts = use_polling(|| Some(()), Some(ALERTS_INTERVAL), |()| api::fetch_alerts(Some(AlertStatus::Firing)));

    let body = move || {
        let state = alerts.state.get();
        match state.phase() {
            ListPhase::Pending => view! { <TableSkeleton rows=5/> }.into_any(),
            ListPhase::Failed => view! { <p class="card__error">"Failed to load alerts"</p> }.into_any(),
            ListPhase::Empty => view! { <p class="card__empty">"No active alerts"</p> }.into_any(),
            ListPhase::Ready => {
                let recent = top_n(&firing_alerts(state.items()), RECENT_ALERTS_LIMIT);
                if recent.is_empty() {
                    return view! { <p class="card__empty">"No active alerts"</p> }.into_any();
                }
                view! {
                    <ul class="alert-list">
                        {recent
                            .into_iter()
                            .map(|alert| {
                                let class = format!("alert-list__item {}", severity_border_class(alert.severity.as_str()));
                                view! {
                                    <li class=class>
                                        <div class="alert-list__text">
                                            <p class="alert-list__title">{alert.title}</p>
                                            <p class="alert-list__time">{format_timestamp(&alert.fired_at)}</p>
                                        </div>
                                        <StatusBadge status=alert.severity.as_str()/>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }
        }
    };

    view! {
        <section class="card">
            <h2 class="card__title">"Recent Alerts"</h2>
            <div class="card__body">{body}</div>
        </section>
    }
}
