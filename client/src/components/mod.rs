//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shell chrome, dashboard widgets and entity tables,
//! reading shared state (overview poll, toasts, UI flags) from Leptos context.

pub mod confirm_dialog;
pub mod header;
pub mod node_card;
pub mod recent_alerts;
pub mod resource_chart;
pub mod resource_gauges;
pub mod service_form_dialog;
pub mod sidebar;
pub mod skeleton;
pub mod stats_cards;
pub mod status_badge;
pub mod toast_stack;
pub mod vm_overview;
pub mod vm_table;
