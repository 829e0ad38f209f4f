//! Slicing helpers for list widgets.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use models::Alert;

/// Rows shown in the dashboard's recent alerts card.
pub const RECENT_ALERTS_LIMIT: usize = 10;

/// Rows shown in the dashboard's VM overview card.
pub const VM_OVERVIEW_LIMIT: usize = 5;

/// First `limit` items in server order.
pub fn top_n<T: Clone>(items: &[T], limit: usize) -> Vec<T> {
    items.iter().take(limit).cloned().collect()
}

/// Alerts whose status is `firing`, in server order.
pub fn firing_alerts(alerts: &[Alert]) -> Vec<Alert> {
    alerts.iter().filter(|alert| alert.is_firing()).cloned().collect()
}
