//! Logical services tracked for health.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use serde::{Deserialize, Serialize};

wire_enum! {
    /// What backs a service.
    pub enum ServiceKind {
        Vm => "vm",
        Container => "container",
        External => "external",
    }
}

wire_enum! {
    /// Last health-check verdict. `unknown` is also a legitimate wire value.
    pub enum ServiceStatus {
        Healthy => "healthy",
        Unhealthy => "unhealthy",
        Degraded => "degraded",
    }
}

impl ServiceKind {
    /// Kinds a user can pick when registering a service.
    pub const SELECTABLE: [ServiceKind; 3] = [Self::Vm, Self::Container, Self::External];

    /// Parse a form value; anything unrecognized becomes `Unknown`.
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        Self::SELECTABLE
            .into_iter()
            .find(|kind| kind.as_str() == raw)
            .unwrap_or_default()
    }
}

/// A logical application or service, optionally backed by a VM.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: ServiceKind,
    #[serde(default)]
    pub status: ServiceStatus,
    #[serde(default)]
    pub health_check_url: Option<String>,
    #[serde(default)]
    pub vm_id: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub last_health_check: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Body for `POST /services` and `PUT /services/{id}`.
///
/// Optional text fields serialize as `null` so an edit can clear them;
/// `vm_id` is omitted when absent so an edit never unlinks the backing VM.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: ServiceKind,
    pub health_check_url: Option<String>,
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vm_id: Option<String>,
}

impl ServiceDraft {
    /// Prefill a draft from an existing service.
    #[must_use]
    pub fn from_service(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            description: service.description.clone(),
            kind: service.kind,
            health_check_url: service.health_check_url.clone(),
            namespace: service.namespace.clone(),
            vm_id: service.vm_id.clone(),
        }
    }
}
