//! Alerts and the rules that fire them.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use serde::{Deserialize, Serialize};

wire_enum! {
    pub enum AlertSeverity {
        Info => "info",
        Warning => "warning",
        Critical => "critical",
    }
}

wire_enum! {
    pub enum AlertStatus {
        Firing => "firing",
        Acknowledged => "acknowledged",
        Resolved => "resolved",
    }
}

wire_enum! {
    /// Comparison applied between a metric sample and a rule threshold.
    pub enum RuleCondition {
        Gt => "gt",
        Lt => "lt",
        Gte => "gte",
        Lte => "lte",
        Equal => "eq",
    }
}

impl RuleCondition {
    /// Operator symbol for display.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
            Self::Equal => "=",
            Self::Unknown => "?",
        }
    }
}

/// A firing (or formerly firing) condition instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub rule_id: String,
    pub source_type: String,
    pub source_id: String,
    #[serde(default)]
    pub severity: AlertSeverity,
    #[serde(default)]
    pub status: AlertStatus,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub fired_at: String,
    #[serde(default)]
    pub acknowledged_at: Option<String>,
    #[serde(default)]
    pub resolved_at: Option<String>,
}

impl Alert {
    #[must_use]
    pub fn is_firing(&self) -> bool {
        self.status == AlertStatus::Firing
    }
}

/// Threshold configuration over a metric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlertRule {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub metric_name: String,
    #[serde(default)]
    pub condition: RuleCondition,
    pub threshold: f64,
    #[serde(default)]
    pub duration_seconds: u64,
    #[serde(default)]
    pub severity: AlertSeverity,
    pub enabled: bool,
    #[serde(default)]
    pub notification_channels: Option<Vec<String>>,
    pub created_at: String,
    pub updated_at: String,
}

impl AlertRule {
    /// Condition rendered as `"> 90"`.
    #[must_use]
    pub fn condition_label(&self) -> String {
        format!("{} {}", self.condition.symbol(), self.threshold)
    }
}

/// Partial body for `PUT /alerts/rules/{id}`; absent fields stay unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertRulePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
