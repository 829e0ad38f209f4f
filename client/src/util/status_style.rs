//! Status and severity to visual tone lookups.
//!
//! DESIGN
//! ======
//! Lookups take the wire string so one table covers every entity (node, VM,
//! service, alert). Anything unrecognized gets the `unknown` (muted) style.

#[cfg(test)]
#[path = "status_style_test.rs"]
mod status_style_test;

/// Visual tone shared by badges, dots and borders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Muted,
    Warning,
    Danger,
    Primary,
}

impl Tone {
    fn suffix(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Muted => "muted",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Primary => "primary",
        }
    }

    pub fn badge_class(self) -> String {
        format!("status-badge status-badge--{}", self.suffix())
    }

    pub fn text_class(self) -> String {
        format!("tone-text--{}", self.suffix())
    }
}

pub fn status_tone(status: &str) -> Tone {
    match status {
        "online" | "running" | "healthy" | "resolved" => Tone::Success,
        "maintenance" | "degraded" | "warning" | "acknowledged" | "paused" => Tone::Warning,
        "error" | "unhealthy" | "critical" | "firing" => Tone::Danger,
        "info" => Tone::Primary,
        _ => Tone::Muted,
    }
}

/// Left-border accent for alert rows.
pub fn severity_border_class(severity: &str) -> &'static str {
    match severity {
        "critical" => "severity-border severity-border--danger",
        "warning" => "severity-border severity-border--warning",
        "info" => "severity-border severity-border--primary",
        _ => "severity-border severity-border--muted",
    }
}

/// Small colored dot beside a VM status.
pub fn vm_status_dot_class(status: &str) -> &'static str {
    match status {
        "running" => "status-dot status-dot--success",
        "paused" => "status-dot status-dot--warning",
        "error" => "status-dot status-dot--danger",
        _ => "status-dot status-dot--muted",
    }
}

pub fn enabled_label(enabled: bool) -> &'static str {
    if enabled { "Active" } else { "Disabled" }
}
