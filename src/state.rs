//! Shared server state.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

/// State handed to every API handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Pooled client for backend calls; timeouts come from `config`.
    pub http: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the TLS backend of the HTTP client cannot be
    /// initialized.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
