//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("NEXOPS_API_URL must start with http:// or https://, got {0:?}")]
    InvalidApiUrl(String),
    #[error("PORT must be a number between 1 and 65535, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Backend base URL without a trailing slash.
    pub api_url: String,
    pub proxy_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Listen port override; the Leptos `site_addr` port is used when absent.
    pub port: Option<u16>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            port: None,
        }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `NEXOPS_API_URL`: default `http://localhost:8000`
    /// - `NEXOPS_PROXY_TIMEOUT_SECS`: default 30
    /// - `NEXOPS_CONNECT_TIMEOUT_SECS`: default 5
    /// - `PORT`: overrides the Leptos `site_addr` port
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = parse_api_url(var("NEXOPS_API_URL").as_deref())?;
        let port = match var("PORT").map(|raw| raw.trim().to_string()).filter(|raw| !raw.is_empty()) {
            Some(raw) => Some(raw.parse::<u16>().ok().filter(|p| *p > 0).ok_or(ConfigError::InvalidPort(raw))?),
            None => None,
        };

        Ok(Self {
            api_url,
            proxy_timeout_secs: parse_u64(var("NEXOPS_PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS),
            connect_timeout_secs: parse_u64(var("NEXOPS_CONNECT_TIMEOUT_SECS"), DEFAULT_CONNECT_TIMEOUT_SECS),
            port,
        })
    }

    /// Backend URL for a path below `/api/v1`, keeping the raw query string.
    pub fn upstream_url(&self, path: &str, query: Option<&str>) -> String {
        let path = path.trim_start_matches('/');
        match query.filter(|q| !q.is_empty()) {
            Some(query) => format!("{}/api/v1/{path}?{query}", self.api_url),
            None => format!("{}/api/v1/{path}", self.api_url),
        }
    }

    /// Apply the `PORT` override to the configured listen address.
    pub fn listen_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        let mut addr = site_addr;
        if let Some(port) = self.port {
            addr.set_port(port);
        }
        addr
    }
}

fn parse_api_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_URL);
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidApiUrl(raw.to_string()));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}
