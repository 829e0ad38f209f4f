//! Four headline counters with decorative sparklines.

#[cfg(test)]
#[path = "stats_cards_test.rs"]
mod stats_cards_test;

use leptos::prelude::*;
use models::ResourceOverview;

use crate::components::skeleton::CardSkeleton;
use crate::net::poll::Poll;
use crate::util::chart::{area_path, line_points, sparkline_values};

const SPARK_WIDTH: f64 = 120.0;
const SPARK_HEIGHT: f64 = 40.0;
const SPARK_Y_MAX: f64 = 60.0;

#[derive(Clone, Debug, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u64,
    pub color: &'static str,
    pub seed: f64,
}

/// Cards in display order; a missing overview shows zeros.
pub fn stat_cards(overview: Option<&ResourceOverview>) -> [StatCard; 4] {
    let o = overview.cloned().unwrap_or_default();
    [
        StatCard { title: "Total Nodes", value: o.total_nodes, color: "#3b82f6", seed: 1.0 },
        StatCard { title: "Total VMs", value: o.total_vms, color: "#8b5cf6", seed: 2.0 },
        StatCard { title: "Running VMs", value: o.running_vms, color: "#10b981", seed: 3.0 },
        StatCard { title: "Active Alerts", value: o.active_alerts, color: "#f59e0b", seed: 4.0 },
    ]
}

#[component]
fn Sparkline(color: &'static str, seed: f64) -> impl IntoView {
    let values = sparkline_values(seed);
    let points = line_points(&values, SPARK_WIDTH, SPARK_HEIGHT, SPARK_Y_MAX);
    let area = area_path(&values, SPARK_WIDTH, SPARK_HEIGHT, SPARK_Y_MAX);
    view! {
        <svg class="stat-card__sparkline" viewBox="0 0 120 40" preserveAspectRatio="none" aria-hidden="true">
            <path d=area fill=color fill-opacity="0.15"></path>
            <polyline
                points=points
                fill="none"
                stroke=color
                stroke-width="1.5"
                stroke-linejoin="round"
                stroke-linecap="round"
            ></polyline>
        </svg>
    }
}

#[component]
pub fn StatsCards() -> impl IntoView {
    let overview = expect_context::<Poll<ResourceOverview>>();

    move || {
        let state = overview.state.get();
        if state.is_pending() {
            return view! {
                <div class="stats-grid">
                    {(0..4).map(|_| view! { <CardSkeleton/> }).collect_view()}
                </div>
            }
            .into_any();
        }
        if state.failed() {
            return view! {
                <div class="stats-grid">
                    {(0..4)
                        .map(|_| view! {
                            <div class="card stat-card">
                                <p class="stat-card__error">"Failed to load"</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            }
            .into_any();
        }
        view! {
            <div class="stats-grid">
                {stat_cards(state.data.as_ref())
                    .into_iter()
                    .map(|card| {
                        view! {
                            <div class="card stat-card">
                                <span class="stat-card__accent" style=format!("background: {};", card.color)></span>
                                <Sparkline color=card.color seed=card.seed/>
                                <p class="stat-card__title">{card.title}</p>
                                <p class="stat-card__value">{card.value}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    }
}
