//! Response and error envelopes shared by every endpoint.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::{Deserialize, Serialize};

/// Code attached to errors built from a response without a usable error body.
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN";

/// Response metadata attached to every successful payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Server time at which the response was produced.
    #[serde(default)]
    pub timestamp: String,
    /// Total number of items for list responses.
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub per_page: Option<u64>,
}

/// Standard `{ data, meta }` success envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default)]
    pub meta: Meta,
}

/// Inner `{ code, message }` object of an error envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

/// Standard `{ error: { code, message } }` failure envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

impl ApiErrorBody {
    /// Build an error envelope from a code and a message.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { error: ApiErrorDetail { code: code.into(), message: message.into() } }
    }
}

/// Failure of a single API call, carrying the HTTP status when one exists.
///
/// `status` is `0` for failures that never produced an HTTP response
/// (network errors, server-side render stubs).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub code: String,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { status, code: code.into(), message: message.into() }
    }

    /// Error for a request that failed before any response arrived.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(0, "NETWORK_ERROR", message)
    }

    /// Error returned by calls that only run in the browser.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::new(0, "UNAVAILABLE", "not available on server")
    }

    /// Build an error from a non-success status and its raw response body.
    ///
    /// Understands the standard error envelope and a bare `{ "detail": "..." }`
    /// body. Anything else yields code `UNKNOWN` and a generic message.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        if let Ok(envelope) = serde_json::from_str::<ApiErrorBody>(body) {
            return Self::new(status, envelope.error.code, envelope.error.message);
        }
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("detail").and_then(|d| d.as_str()).map(str::to_owned));
        let message = detail.unwrap_or_else(|| format!("Request failed with status {status}"));
        Self::new(status, UNKNOWN_ERROR_CODE, message)
    }

    /// Whether the server reported the requested entity as absent.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Whether a lookup by id found nothing: either a 404 or a 422 for an id
    /// the backend refused to parse.
    #[must_use]
    pub fn is_unknown_id(&self) -> bool {
        matches!(self.status, 404 | 422)
    }

    /// Convert into the wire error envelope.
    #[must_use]
    pub fn to_body(&self) -> ApiErrorBody {
        ApiErrorBody::new(self.code.clone(), self.message.clone())
    }
}
