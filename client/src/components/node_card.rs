//! Per-node summary card on the infrastructure page.

#[cfg(test)]
#[path = "node_card_test.rs"]
mod node_card_test;

use leptos::prelude::*;
use models::Node;

use crate::components::resource_gauges::GaugeBar;
use crate::util::format::format_timestamp;
use crate::util::status_style::status_tone;

const CPU_GRADIENT: &str = "linear-gradient(90deg, #3b82f6, #60a5fa)";
const MEMORY_GRADIENT: &str = "linear-gradient(90deg, #8b5cf6, #a78bfa)";
const DISK_GRADIENT: &str = "linear-gradient(90deg, #06b6d4, #22d3ee)";

pub fn cpu_label(node: &Node) -> String {
    format!("CPU ({} cores)", node.cpu_cores)
}

/// Total memory rounded to whole gigabytes.
#[allow(clippy::cast_precision_loss)]
pub fn memory_label(node: &Node) -> String {
    format!("Memory ({:.0} GB)", node.memory_total_mb as f64 / 1024.0)
}

pub fn disk_label(node: &Node) -> String {
    format!("Disk ({} GB)", node.disk_total_gb)
}

#[component]
pub fn NodeCard(node: Node) -> impl IntoView {
    let status = node.status.as_str();
    let dot_class = if node.is_online() { "status-dot status-dot--success status-dot--pulse" } else { "status-dot status-dot--muted" };
    let last_seen = node
        .last_seen_at
        .as_deref()
        .map(|raw| view! { <p class="node-card__seen">{format!("Last seen {}", format_timestamp(raw))}</p> });

    view! {
        <div class="card node-card">
            <div class="node-card__header">
                <div class="node-card__identity">
                    <span class="node-card__icon" aria-hidden="true">"▤"</span>
                    <div>
                        <h3 class="node-card__hostname">{node.hostname.clone()}</h3>
                        <p class="node-card__ip">{node.ip_address.clone()}</p>
                    </div>
                </div>
                <span class=format!("node-card__status {}", status_tone(status).text_class())>
                    <span class=dot_class></span>
                    {status}
                </span>
            </div>
            <div class="node-card__body gauge-list">
                <GaugeBar label=cpu_label(&node) value=node.usage("cpu_usage") color=CPU_GRADIENT/>
                <GaugeBar label=memory_label(&node) value=node.usage("memory_usage") color=MEMORY_GRADIENT/>
                <GaugeBar label=disk_label(&node) value=node.usage("disk_usage") color=DISK_GRADIENT/>
                {last_seen}
            </div>
        </div>
    }
}
