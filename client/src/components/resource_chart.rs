//! Historical resource usage as an area chart with a range selector.
//!
//! DESIGN
//! ======
//! Series are merged into one row per timestamp (`util::chart::merge_series`)
//! and drawn as inline SVG in a fixed 600x240 viewBox scaled by CSS. Axis labels
//! and the legend are HTML so text does not stretch with the plot.

#[cfg(test)]
#[path = "resource_chart_test.rs"]
mod resource_chart_test;

use leptos::prelude::*;
use models::MetricRange;

use crate::components::skeleton::ChartSkeleton;
use crate::net::api;
use crate::net::poll::{SERIES_INTERVAL, use_polling};
use crate::util::chart::{ChartTable, area_path, line_points, merge_series, metric_color};
use crate::util::format::format_time_of_day;

const PLOT_WIDTH: f64 = 600.0;
const PLOT_HEIGHT: f64 = 240.0;
const Y_MAX: f64 = 100.0;
const AXIS_LABELS: usize = 6;
const Y_TICKS: [u32; 5] = [100, 75, 50, 25, 0];

/// Legend text for a metric name, e.g. `"cpu_usage" -> "cpu usage"`.
pub fn series_label(metric_name: &str) -> String {
    metric_name.replace('_', " ")
}

#[component]
pub fn ResourceChart(#[prop(into)] source_id: Signal<String>) -> impl IntoView {
    let range = RwSignal::new(MetricRange::default());
    let series = use_polling(
        move || Some((source_id.get(), range.get())),
        Some(SERIES_INTERVAL),
        |(id, range)| api::fetch_metric_series(id, range),
    );

    let body = move || {
        let state = series.state.get();
        if state.is_pending() {
            return view! { <ChartSkeleton/> }.into_any();
        }
        if state.failed() {
            return view! { <p class="card__error">"Failed to load metrics"</p> }.into_any();
        }
        let table = merge_series(state.data.as_deref().unwrap_or_default());
        if table.is_empty() {
            return view! { <p class="card__empty">"No metrics data available"</p> }.into_any();
        }
        view! { <ChartPlot table=table/> }.into_any()
    };

    view! {
        <section class="card">
            <div class="card__header">
                <h2 class="card__title">"Resource Usage"</h2>
                <div class="segmented" role="group" aria-label="Time range">
                    {MetricRange::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class="segmented__item"
                                    class:segmented__item--active=move || range.get() == option
                                    on:click=move |_| range.set(option)
                                >
                                    {option.as_str()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="card__body">{body}</div>
        </section>
    }
}

#[component]
fn ChartPlot(table: ChartTable) -> impl IntoView {
    let layers = table
        .series
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let values = table.column(index);
            let color = metric_color(name);
            view! {
                <g class="chart__series">
                    <path d=area_path(&values, PLOT_WIDTH, PLOT_HEIGHT, Y_MAX) fill=color fill-opacity="0.15"></path>
                    <polyline
                        points=line_points(&values, PLOT_WIDTH, PLOT_HEIGHT, Y_MAX)
                        fill="none"
                        stroke=color
                        stroke-width="2"
                        vector-effect="non-scaling-stroke"
                    ></polyline>
                </g>
            }
        })
        .collect_view();

    let grid = Y_TICKS
        .into_iter()
        .map(|tick| {
            let y = PLOT_HEIGHT - f64::from(tick) / Y_MAX * PLOT_HEIGHT;
            view! {
                <line
                    x1="0"
                    x2=PLOT_WIDTH.to_string()
                    y1=y.to_string()
                    y2=y.to_string()
                    class="chart__grid"
                    vector-effect="non-scaling-stroke"
                ></line>
            }
        })
        .collect_view();

    let x_labels = table
        .axis_timestamps(AXIS_LABELS)
        .into_iter()
        .map(|ts| view! { <span>{format_time_of_day(ts)}</span> })
        .collect_view();

    let legend = table
        .series
        .iter()
        .map(|name| {
            view! {
                <span class="chart__legend-item">
                    <span class="chart__swatch" style=format!("background: {};", metric_color(name))></span>
                    {series_label(name)}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <div class="chart__frame">
                <div class="chart__y-axis">
                    {Y_TICKS.into_iter().map(|tick| view! { <span>{format!("{tick}%")}</span> }).collect_view()}
                </div>
                <svg class="chart__plot" viewBox="0 0 600 240" preserveAspectRatio="none" role="img">
                    {grid}
                    {layers}
                </svg>
            </div>
            <div class="chart__x-axis">{x_labels}</div>
            <div class="chart__legend">{legend}</div>
        </div>
    }
}
