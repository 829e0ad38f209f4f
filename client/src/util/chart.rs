//! SVG geometry for area charts, sparklines and gauge bars.
//!
//! SYSTEM CONTEXT
//! ==============
//! Charts are plain inline SVG built from these helpers; there is no chart
//! library. Series arrive from `/metrics/{source_id}` as independent sample
//! lists and are merged into one row per timestamp before plotting.
//!
//! TRADE-OFFS
//! ==========
//! A series missing a sample at some timestamp plots `0` there rather than
//! interpolating, so gaps show up as dips instead of being hidden.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use std::collections::{BTreeSet, HashMap};

use models::MetricTimeSeries;

/// Color used for series without a dedicated entry.
pub const DEFAULT_SERIES_COLOR: &str = "#3b82f6";

/// Stroke/fill color for a metric series.
pub fn metric_color(metric_name: &str) -> &'static str {
    match metric_name {
        "cpu_usage" => "#3b82f6",
        "memory_usage" => "#8b5cf6",
        "disk_usage" => "#06b6d4",
        "network_in" => "#10b981",
        "network_out" => "#f59e0b",
        _ => DEFAULT_SERIES_COLOR,
    }
}

/// One x-axis position with a value per series (same order as `ChartTable::series`).
#[derive(Clone, Debug, PartialEq)]
pub struct ChartRow {
    pub timestamp: String,
    pub values: Vec<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartTable {
    pub series: Vec<String>,
    pub rows: Vec<ChartRow>,
}

impl ChartTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of series `index` across all rows.
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| row.values.get(index).copied().unwrap_or(0.0))
            .collect()
    }

    /// Up to `max` timestamps spread evenly across the rows, first and last included.
    pub fn axis_timestamps(&self, max: usize) -> Vec<&str> {
        let len = self.rows.len();
        if len == 0 || max == 0 {
            return Vec::new();
        }
        if len <= max {
            return self.rows.iter().map(|row| row.timestamp.as_str()).collect();
        }
        if max == 1 {
            return vec![self.rows[0].timestamp.as_str()];
        }
        (0..max)
            .map(|slot| {
                let index = slot * (len - 1) / (max - 1);
                self.rows[index].timestamp.as_str()
            })
            .collect()
    }
}

/// Union all timestamps (sorted), one row each; absent samples become `0`.
pub fn merge_series(series: &[MetricTimeSeries]) -> ChartTable {
    let timestamps: BTreeSet<&str> = series
        .iter()
        .flat_map(|s| s.data.iter().map(|point| point.timestamp.as_str()))
        .collect();

    let lookups: Vec<HashMap<&str, f64>> = series
        .iter()
        .map(|s| {
            let mut by_ts = HashMap::new();
            for point in &s.data {
                by_ts.entry(point.timestamp.as_str()).or_insert(point.value);
            }
            by_ts
        })
        .collect();

    let rows = timestamps
        .into_iter()
        .map(|ts| ChartRow {
            timestamp: ts.to_owned(),
            values: lookups.iter().map(|by_ts| by_ts.get(ts).copied().unwrap_or(0.0)).collect(),
        })
        .collect();

    ChartTable { series: series.iter().map(|s| s.metric_name.clone()).collect(), rows }
}

#[allow(clippy::cast_precision_loss)]
fn plot(values: &[f64], width: f64, height: f64, y_max: f64) -> Vec<(f64, f64)> {
    let step = if values.len() > 1 { width / (values.len() - 1) as f64 } else { 0.0 };
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let ratio = if y_max > 0.0 && value.is_finite() { value.clamp(0.0, y_max) / y_max } else { 0.0 };
            (i as f64 * step, height - ratio * height)
        })
        .collect()
}

/// `points` attribute for an SVG `<polyline>`.
pub fn line_points(values: &[f64], width: f64, height: f64, y_max: f64) -> String {
    plot(values, width, height, y_max)
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed `d` path filling the area under the line down to the baseline.
pub fn area_path(values: &[f64], width: f64, height: f64, y_max: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let points = plot(values, width, height, y_max);
    let last_x = points.last().map_or(0.0, |(x, _)| *x);
    let line = points.iter().map(|(x, y)| format!("L{x:.2},{y:.2}")).collect::<Vec<_>>().join(" ");
    format!("M0.00,{height:.2} {line} L{last_x:.2},{height:.2} Z")
}

/// Number of decorative sparkline points on a stat card.
pub const SPARKLINE_POINTS: usize = 12;

/// Deterministic decorative curve in `[5, 55]` for a stat card.
pub fn sparkline_values(seed: f64) -> Vec<f64> {
    (0..SPARKLINE_POINTS)
        .map(|i| {
            let i = f64::from(u32::try_from(i).unwrap_or(0));
            let base = 30.0 + (i * 0.8 + seed).sin() * 15.0 + (i * 1.3 + seed * 2.0).cos() * 8.0;
            base.clamp(5.0, 55.0)
        })
        .collect()
}

/// Bar fill percentage clamped to `[0, 100]`.
pub fn gauge_width(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 }
}

/// Inline `style` for a gauge fill.
pub fn gauge_style(value: f64, color: &str) -> String {
    format!("width: {:.1}%; background: {color};", gauge_width(value))
}
