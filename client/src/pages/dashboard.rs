//! Cluster overview landing page.

use leptos::prelude::*;

use crate::components::recent_alerts::RecentAlerts;
use crate::components::resource_gauges::ResourceGauges;
use crate::components::stats_cards::StatsCards;
use crate::components::vm_overview::VmOverview;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Dashboard"</h1>
            <StatsCards/>
            <div class="page__split">
                <ResourceGauges/>
                <RecentAlerts/>
            </div>
            <VmOverview/>
        </div>
    }
}
