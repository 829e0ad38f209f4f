//! REST API helpers for the management API under `/api/v1`.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the page's
//! own origin; the host forwards them to the backend.
//! Server-side (SSR): stubs returning `ApiError::unavailable()` since data is
//! only fetched after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. Transport failures map to a
//! `NETWORK_ERROR` with status 0, non-2xx responses are decoded from the
//! error envelope, and bodies that fail to parse surface as
//! `INVALID_RESPONSE`. Nothing is retried here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use models::{
    Alert, AlertRule, AlertRulePatch, AlertStatus, ApiError, MetricRange, MetricTimeSeries, Node, ResourceOverview,
    Service, ServiceDraft, Vm, VmAction, VmMetrics,
};
#[cfg(any(test, feature = "hydrate"))]
use models::ApiResponse;
#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

/// Path prefix of every backend route.
pub const API_BASE: &str = "/api/v1";

/// Error code for 2xx bodies that do not match the expected shape.
pub const INVALID_RESPONSE_CODE: &str = "INVALID_RESPONSE";

// =============================================================================
// ENDPOINTS
// =============================================================================

// Ids and query values are percent-encoded; everything else is a literal.

#[cfg(any(test, feature = "hydrate"))]
fn nodes_endpoint() -> String {
    format!("{API_BASE}/infrastructure/nodes")
}

#[cfg(any(test, feature = "hydrate"))]
fn vms_endpoint(node_id: Option<&str>) -> String {
    match node_id {
        Some(node_id) => format!("{API_BASE}/infrastructure/vms?node_id={}", urlencoding::encode(node_id)),
        None => format!("{API_BASE}/infrastructure/vms"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn vm_endpoint(vm_id: &str) -> String {
    format!("{API_BASE}/infrastructure/vms/{}", urlencoding::encode(vm_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn vm_metrics_endpoint(vm_id: &str) -> String {
    format!("{API_BASE}/infrastructure/vms/{}/metrics", urlencoding::encode(vm_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn vm_action_endpoint(vm_id: &str, action: VmAction) -> String {
    format!("{API_BASE}/infrastructure/vms/{}/{}", urlencoding::encode(vm_id), action.as_str())
}

#[cfg(any(test, feature = "hydrate"))]
fn services_endpoint() -> String {
    format!("{API_BASE}/services")
}

#[cfg(any(test, feature = "hydrate"))]
fn service_endpoint(service_id: &str) -> String {
    format!("{API_BASE}/services/{}", urlencoding::encode(service_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn alerts_endpoint(status: Option<AlertStatus>) -> String {
    match status {
        Some(status) => format!("{API_BASE}/alerts?status={}", status.as_str()),
        None => format!("{API_BASE}/alerts"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn alert_rules_endpoint() -> String {
    format!("{API_BASE}/alerts/rules")
}

#[cfg(any(test, feature = "hydrate"))]
fn alert_rule_endpoint(rule_id: &str) -> String {
    format!("{API_BASE}/alerts/rules/{}", urlencoding::encode(rule_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn metrics_overview_endpoint() -> String {
    format!("{API_BASE}/metrics/overview")
}

#[cfg(any(test, feature = "hydrate"))]
fn metric_series_endpoint(source_id: &str, range: MetricRange) -> String {
    format!("{API_BASE}/metrics/{}?range={}", urlencoding::encode(source_id), range.as_str())
}

// =============================================================================
// RESPONSE DECODING
// =============================================================================

/// Decode a raw response. `Ok(None)` means "no content" (204 or empty body).
#[cfg(any(test, feature = "hydrate"))]
fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<Option<T>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, body));
    }
    if status == 204 || body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(body)
        .map(Some)
        .map_err(|e| ApiError::new(status, INVALID_RESPONSE_CODE, format!("Invalid response body: {e}")))
}

/// Decode a payload that must be present.
#[cfg(any(test, feature = "hydrate"))]
fn decode_required<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    decode_response(status, body)?
        .ok_or_else(|| ApiError::new(status, INVALID_RESPONSE_CODE, "Empty response body"))
}

/// Decode a `{ data, meta }` envelope and return `data`.
#[cfg(any(test, feature = "hydrate"))]
fn decode_data<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    decode_required::<ApiResponse<T>>(status, body).map(|envelope| envelope.data)
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_response(resp: gloo_net::http::Response) -> Result<(u16, String), ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(network_error)?;
    Ok((status, body))
}

#[cfg(feature = "hydrate")]
async fn get_raw(url: &str) -> Result<(u16, String), ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(network_error)?;
    read_response(resp).await
}

#[cfg(feature = "hydrate")]
async fn send_json<B: serde::Serialize>(
    builder: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<(u16, String), ApiError> {
    let resp = builder
        .header("Accept", "application/json")
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    read_response(resp).await
}

#[cfg(feature = "hydrate")]
async fn send_empty(builder: gloo_net::http::RequestBuilder) -> Result<(u16, String), ApiError> {
    let resp = builder
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(network_error)?;
    read_response(resp).await
}

#[cfg(feature = "hydrate")]
async fn get_data<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let (status, body) = get_raw(url).await?;
    decode_data(status, &body)
}

// =============================================================================
// INFRASTRUCTURE
// =============================================================================

/// Fetch every node from `GET /infrastructure/nodes`.
///
/// # Errors
///
/// Returns the decoded `ApiError` on transport, status or parse failure.
pub async fn fetch_nodes() -> Result<Vec<Node>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_data(&nodes_endpoint()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Fetch VMs, optionally restricted to one node.
///
/// # Errors
///
/// Returns the decoded `ApiError` on transport, status or parse failure.
pub async fn fetch_vms(node_id: Option<String>) -> Result<Vec<Vm>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_data(&vms_endpoint(node_id.as_deref())).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = node_id;
        Err(ApiError::unavailable())
    }
}

/// Fetch a single VM; a missing VM surfaces as a 404 `ApiError`.
///
/// # Errors
///
/// Returns the decoded `ApiError` on transport, status or parse failure.
pub async fn fetch_vm(vm_id: String) -> Result<Vm, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_data(&vm_endpoint(&vm_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = vm_id;
        Err(ApiError::unavailable())
    }
}

/// Fetch live metrics for a VM. This route answers without an envelope.
///
/// # Errors
///
/// Returns the decoded `ApiError` on transport, status or parse failure.
pub async fn fetch_vm_metrics(vm_id: String) -> Result<VmMetrics, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = get_raw(&vm_metrics_endpoint(&vm_id)).await?;
        decode_required(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = vm_id;
        Err(ApiError::unavailable())
    }
}

/// Send a power command via `POST /infrastructure/vms/{id}/{action}`.
///
/// # Errors
///
/// Returns the decoded `ApiError` when the command is rejected or unreachable.
pub async fn control_vm(vm_id: String, action: VmAction) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::post(&vm_action_endpoint(&vm_id, action));
        let (status, body) = send_empty(builder).await?;
        decode_response::<serde_json::Value>(status, &body).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (vm_id, action);
        Err(ApiError::unavailable())
    }
}

// =============================================================================
// SERVICES
// =============================================================================

/// Fetch every registered service.
///
/// # Errors
///
/// Returns the decoded `ApiError` on transport, status or parse failure.
pub async fn fetch_services() -> Result<Vec<Service>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_data(&services_endpoint()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Fetch one service; a missing service surfaces as a 404 `ApiError`.
///
/// # Errors
///
/// Returns the decoded `ApiError` on transport, status or parse failure.
pub async fn fetch_service(service_id: String) -> Result<Service, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_data(&service_endpoint(&service_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = service_id;
        Err(ApiError::unavailable())
    }
}

/// Register a service via `POST /services`.
///
/// # Errors
///
/// Returns the decoded `ApiError` when validation or transport fails.
pub async fn create_service(draft: ServiceDraft) -> Result<Service, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::post(&services_endpoint());
        let (status, body) = send_json(builder, &draft).await?;
        decode_data(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(ApiError::unavailable())
    }
}

/// Replace a service's editable fields via `PUT /services/{id}`.
///
/// # Errors
///
/// Returns the decoded `ApiError` when validation or transport fails.
pub async fn update_service(service_id: String, draft: ServiceDraft) -> Result<Service, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::put(&service_endpoint(&service_id));
        let (status, body) = send_json(builder, &draft).await?;
        decode_data(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (service_id, draft);
        Err(ApiError::unavailable())
    }
}

/// Delete a service via `DELETE /services/{id}` (answers 204).
///
/// # Errors
///
/// Returns the decoded `ApiError` when the delete fails.
pub async fn delete_service(service_id: String) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::delete(&service_endpoint(&service_id));
        let (status, body) = send_empty(builder).await?;
        decode_response::<serde_json::Value>(status, &body).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = service_id;
        Err(ApiError::unavailable())
    }
}

// =============================================================================
// ALERTS
// =============================================================================

/// Fetch alerts, optionally filtered by status.
///
/// # Errors
///
/// Returns the decoded `ApiError` on transport, status or parse failure.
pub async fn fetch_alerts(status: Option<AlertStatus>) -> Result<Vec<Alert>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_data(&alerts_endpoint(status)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = status;
        Err(ApiError::unavailable())
    }
}

/// Fetch every alert rule.
///
/// # Errors
///
/// Returns the decoded `ApiError` on transport, status or parse failure.
pub async fn fetch_alert_rules() -> Result<Vec<AlertRule>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_data(&alert_rules_endpoint()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Partially update a rule via `PUT /alerts/rules/{id}`.
///
/// # Errors
///
/// Returns the decoded `ApiError` when the update fails.
pub async fn update_alert_rule(rule_id: String, patch: AlertRulePatch) -> Result<AlertRule, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::put(&alert_rule_endpoint(&rule_id));
        let (status, body) = send_json(builder, &patch).await?;
        decode_data(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (rule_id, patch);
        Err(ApiError::unavailable())
    }
}

// =============================================================================
// METRICS
// =============================================================================

/// Fetch cluster-wide counts and average usage.
///
/// # Errors
///
/// Returns the decoded `ApiError` on transport, status or parse failure.
pub async fn fetch_overview() -> Result<ResourceOverview, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_data(&metrics_overview_endpoint()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Fetch every metric series recorded for `source_id` over `range`.
///
/// # Errors
///
/// Returns the decoded `ApiError` on transport, status or parse failure.
pub async fn fetch_metric_series(source_id: String, range: MetricRange) -> Result<Vec<MetricTimeSeries>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_data(&metric_series_endpoint(&source_id, range)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (source_id, range);
        Err(ApiError::unavailable())
    }
}
