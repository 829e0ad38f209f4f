//! Nodes, virtual machines, and VM control actions.

#[cfg(test)]
#[path = "infrastructure_test.rs"]
mod infrastructure_test;

use serde::{Deserialize, Serialize};

wire_enum! {
    /// Reachability of a managed host.
    pub enum NodeStatus {
        Online => "online",
        Offline => "offline",
        Maintenance => "maintenance",
    }
}

wire_enum! {
    /// Power state of a VM or container.
    pub enum VmStatus {
        Running => "running",
        Stopped => "stopped",
        Paused => "paused",
        Error => "error",
    }
}

wire_enum! {
    /// Virtualization flavor.
    pub enum VmKind {
        Qemu => "qemu",
        Lxc => "lxc",
    }
}

/// A physical or virtual host managed by the platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub hostname: String,
    pub ip_address: String,
    pub provider: String,
    #[serde(default)]
    pub status: NodeStatus,
    pub cpu_cores: u32,
    pub memory_total_mb: u64,
    pub disk_total_gb: u64,
    #[serde(default)]
    pub proxmox_node_name: Option<String>,
    /// Free-form collector data; live usage percentages live here.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub last_seen_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Node {
    /// Numeric usage percentage stored under `key` in `metadata`, or `0.0`.
    #[must_use]
    pub fn usage(&self, key: &str) -> f64 {
        self.metadata
            .as_ref()
            .and_then(|meta| meta.get(key))
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(0.0)
    }

    #[must_use]
    pub fn is_online(&self) -> bool {
        self.status == NodeStatus::Online
    }
}

/// A virtual machine or container instance running on a node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vm {
    pub id: String,
    pub node_id: String,
    pub vmid: u32,
    pub name: String,
    #[serde(default)]
    pub status: VmStatus,
    #[serde(rename = "type", default)]
    pub kind: VmKind,
    pub cpu_cores: u32,
    pub memory_mb: u64,
    pub disk_gb: f64,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub os_type: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub config: Option<serde_json::Value>,
    pub created_at: String,
    pub updated_at: String,
}

impl Vm {
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == VmStatus::Running
    }

    /// Control actions offered for the VM's current status.
    #[must_use]
    pub fn available_actions(&self) -> &'static [VmAction] {
        VmAction::available_for(self.status)
    }
}

/// Point-in-time resource usage for a VM. Served without an envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VmMetrics {
    pub vmid: u32,
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub disk_usage: f64,
    /// Bytes received.
    pub network_in: f64,
    /// Bytes sent.
    pub network_out: f64,
    /// Seconds since boot.
    #[serde(default)]
    pub uptime: f64,
}

/// Power control command for a VM.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VmAction {
    Start,
    Stop,
    Restart,
}

impl VmAction {
    /// Path segment appended to `/infrastructure/vms/{id}/`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
        }
    }

    /// Progressive verb shown while the command is in flight.
    #[must_use]
    pub fn progress_label(self) -> &'static str {
        match self {
            Self::Start => "Starting",
            Self::Stop => "Stopping",
            Self::Restart => "Restarting",
        }
    }

    /// Title-case button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Stop => "Stop",
            Self::Restart => "Restart",
        }
    }

    /// Running VMs can be restarted or stopped; anything else can only start.
    #[must_use]
    pub fn available_for(status: VmStatus) -> &'static [VmAction] {
        match status {
            VmStatus::Running => &[Self::Restart, Self::Stop],
            _ => &[Self::Start],
        }
    }
}
