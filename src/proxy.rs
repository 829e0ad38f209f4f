//! Same-origin proxy for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this server, so `/api/v1/*` is relayed to
//! `NEXOPS_API_URL` without touching the path or the payload. Only the method, query
//! string, `content-type`, `accept` and body go upstream; status,
//! `content-type` and body come back. The backend's own error envelopes pass
//! through untouched. A backend that cannot be reached answers `502`.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{OriginalUri, State};
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use models::ApiErrorBody;

use crate::state::AppState;

pub const UPSTREAM_UNAVAILABLE: &str = "UPSTREAM_UNAVAILABLE";

const API_PREFIX: &str = "/api/v1/";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Backend API did not respond in time")]
    Timeout,
    #[error("Backend API is unreachable")]
    Unreachable(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Unreachable(err) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, Json(ApiErrorBody::new(UPSTREAM_UNAVAILABLE, self.to_string()))).into_response()
    }
}

/// `ANY /api/v1/{*path}`
///
/// The upstream path is taken from the raw request URI, so percent-escapes
/// inside a segment reach the backend unchanged.
pub async fn forward(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path = uri.path().strip_prefix(API_PREFIX).unwrap_or_default();
    let url = state.config.upstream_url(path, uri.query());
    relay(&state.http, method.clone(), &url, &headers, body).await.map_err(|err| {
        tracing::warn!(%method, %url, error = %err, "upstream request failed");
        ProxyError::from(err)
    })
}

async fn relay(
    http: &reqwest::Client,
    method: Method,
    url: &str,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response, reqwest::Error> {
    let mut request = http.request(method, url);
    for name in [CONTENT_TYPE, ACCEPT] {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let mut relayed = HeaderMap::new();
    if let Some(content_type) = upstream.headers().get(CONTENT_TYPE) {
        relayed.insert(CONTENT_TYPE, content_type.clone());
    }
    let bytes = upstream.bytes().await?;
    Ok((status, relayed, bytes).into_response())
}
