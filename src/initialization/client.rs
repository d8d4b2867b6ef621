//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{LookupConfig, TCP_CONNECT_TIMEOUT_SECS};

/// Initializes the HTTP client used for lookups.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Overall timeout from the config
/// - TCP connect timeout of `TCP_CONNECT_TIMEOUT_SECS`
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &LookupConfig) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
