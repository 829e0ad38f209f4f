//! Shared wire schema for the management API.
//!
//! This crate owns the payload shapes used by both the `nexops` host and the
//! `client` UI. Records mirror backend responses one-to-one and carry no
//! behavior beyond presentation lookups; the UI never mutates them, it only
//! replaces them wholesale on the next fetch.
//!
//! DESIGN
//! ======
//! Enumerated string fields (statuses, severities, kinds) decode unrecognized
//! values into an `Unknown` variant so one unexpected value never discards a
//! whole list response.

#[macro_use]
mod wire_enum;

pub mod alerts;
pub mod envelope;
pub mod infrastructure;
pub mod metrics;
pub mod services;

pub use alerts::{Alert, AlertRule, AlertRulePatch, AlertSeverity, AlertStatus, RuleCondition};
pub use envelope::{ApiError, ApiErrorBody, ApiErrorDetail, ApiResponse, Meta};
pub use infrastructure::{Node, NodeStatus, Vm, VmAction, VmKind, VmMetrics, VmStatus};
pub use metrics::{Metric, MetricPoint, MetricRange, MetricTimeSeries, ResourceOverview};
pub use services::{Service, ServiceDraft, ServiceKind, ServiceStatus};
