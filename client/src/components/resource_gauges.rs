//! Cluster-wide CPU / memory / disk usage bars.

#[cfg(test)]
#[path = "resource_gauges_test.rs"]
mod resource_gauges_test;

use leptos::prelude::*;
use models::ResourceOverview;

use crate::components::skeleton::ChartSkeleton;
use crate::net::poll::Poll;
use crate::util::chart::gauge_style;
use crate::util::format::format_percent;

#[derive(Clone, Debug, PartialEq)]
pub struct Gauge {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

pub fn cluster_gauges(overview: Option<&ResourceOverview>) -> [Gauge; 3] {
    let o = overview.cloned().unwrap_or_default();
    [
        Gauge { label: "CPU", value: o.avg_cpu_usage, color: "#3b82f6" },
        Gauge { label: "Memory", value: o.avg_memory_usage, color: "#8b5cf6" },
        Gauge { label: "Disk", value: o.avg_disk_usage, color: "#06b6d4" },
    ]
}

/// Labelled horizontal usage bar, shared with node cards.
#[component]
pub fn GaugeBar(#[prop(into)] label: String, value: f64, color: &'static str) -> impl IntoView {
    view! {
        <div class="gauge">
            <div class="gauge__header">
                <span class="gauge__label">{label}</span>
                <span class="gauge__value">{format_percent(value)}</span>
            </div>
            <div class="gauge__track">
                <div class="gauge__fill" style=gauge_style(value, color)></div>
            </div>
        </div>
    }
}

#[component]
pub fn ResourceGauges() -> impl IntoView {
    let overview = expect_context::<Poll<ResourceOverview>>();

    move || {
        let state = overview.state.get();
        if state.is_pending() {
            return view! { <ChartSkeleton/> }.into_any();
        }
        let body = if state.failed() {
            view! { <p class="card__error">"Failed to load resource data"</p> }.into_any()
        } else {
            cluster_gauges(state.data.as_ref())
                .into_iter()
                .map(|g| view! { <GaugeBar label=g.label value=g.value color=g.color/> })
                .collect_view()
                .into_any()
        };
        view! {
            <section class="card">
                <h2 class="card__title">"Cluster Resource Usage"</h2>
                <div class="card__body gauge-list">{body}</div>
            </section>
        }
        .into_any()
    }
}
