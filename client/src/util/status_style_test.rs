use super::*;

#[test]
fn success_statuses() {
    for status in ["online", "running", "healthy", "resolved"] {
        assert_eq!(status_tone(status), Tone::Success, "{status}");
    }
}

#[test]
fn warning_statuses() {
    for status in ["maintenance", "degraded", "warning", "acknowledged", "paused"] {
        assert_eq!(status_tone(status), Tone::Warning, "{status}");
    }
}

#[test]
fn danger_statuses() {
    for status in ["error", "unhealthy", "critical", "firing"] {
        assert_eq!(status_tone(status), Tone::Danger, "{status}");
    }
}

#[test]
fn info_is_primary() {
    assert_eq!(status_tone("info"), Tone::Primary);
}

#[test]
fn muted_and_fallback() {
    for status in ["offline", "stopped", "unknown", "", "Running", "migrating"] {
        assert_eq!(status_tone(status), Tone::Muted, "{status:?}");
    }
}

#[test]
fn tone_classes() {
    assert_eq!(Tone::Danger.badge_class(), "status-badge status-badge--danger");
    assert_eq!(Tone::Success.text_class(), "tone-text--success");
}

#[test]
fn severity_border_fallback_is_muted() {
    assert_eq!(severity_border_class("critical"), "severity-border severity-border--danger");
    assert_eq!(severity_border_class("info"), "severity-border severity-border--primary");
    assert_eq!(severity_border_class("page"), "severity-border severity-border--muted");
}

#[test]
fn vm_status_dot_fallback_is_muted() {
    assert_eq!(vm_status_dot_class("running"), "status-dot status-dot--success");
    assert_eq!(vm_status_dot_class("paused"), "status-dot status-dot--warning");
    assert_eq!(vm_status_dot_class("error"), "status-dot status-dot--danger");
    assert_eq!(vm_status_dot_class("stopped"), "status-dot status-dot--muted");
    assert_eq!(vm_status_dot_class("unknown"), "status-dot status-dot--muted");
}

#[test]
fn enabled_labels() {
    assert_eq!(enabled_label(true), "Active");
    assert_eq!(enabled_label(false), "Disabled");
}
