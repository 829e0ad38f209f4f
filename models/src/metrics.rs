//! Metric samples, time series and the cluster overview.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use serde::{Deserialize, Serialize};

/// A single stored measurement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub id: String,
    pub source_type: String,
    pub source_id: String,
    pub metric_name: String,
    pub value: f64,
    pub unit: String,
    pub timestamp: String,
}

/// One sample of a time series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub value: f64,
    pub timestamp: String,
}

/// Historical samples of one metric for one source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricTimeSeries {
    pub metric_name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub data: Vec<MetricPoint>,
}

/// Aggregate counts and average usage across the whole cluster.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceOverview {
    pub total_nodes: u64,
    pub total_vms: u64,
    pub running_vms: u64,
    pub active_alerts: u64,
    pub avg_cpu_usage: f64,
    pub avg_memory_usage: f64,
    pub avg_disk_usage: f64,
}

/// Look-back window accepted by `GET /metrics/{source_id}?range=`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricRange {
    #[default]
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "6h")]
    SixHours,
    #[serde(rename = "24h")]
    OneDay,
    #[serde(rename = "7d")]
    SevenDays,
}

impl MetricRange {
    pub const ALL: [MetricRange; 4] = [Self::OneHour, Self::SixHours, Self::OneDay, Self::SevenDays];

    /// Query-string value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneHour => "1h",
            Self::SixHours => "6h",
            Self::OneDay => "24h",
            Self::SevenDays => "7d",
        }
    }

    /// Parse a query-string value.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.as_str() == raw)
    }
}
