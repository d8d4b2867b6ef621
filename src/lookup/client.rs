//! Lookup client.

use std::sync::Arc;

use log::{debug, info, warn};
use reqwest::header::CONTENT_TYPE;
use tokio::task::JoinHandle;
use url::Url;

use super::classify::{classify_response, LookupResult};
use super::request::{build_request, lookup_url};
use crate::config::LookupConfig;
use crate::error_handling::{categorize_reqwest_error, InitializationError, SafeBrowsingError};
use crate::initialization::init_client;
use crate::schema::encode;

/// Checks URLs against the Safe Browsing Lookup API.
///
/// Cheap to clone; clones share the configuration and the HTTP connection pool.
/// Each call builds its own request, so concurrent calls do not interfere.
#[derive(Clone, Debug)]
pub struct SafeBrowsingClient {
    config: Arc<LookupConfig>,
    http: Arc<reqwest::Client>,
}

impl SafeBrowsingClient {
    /// Creates a client with an HTTP client built from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client
    /// cannot be built (e.g. an invalid user agent).
    pub fn new(config: LookupConfig) -> Result<Self, InitializationError> {
        let http = init_client(&config)?;
        Ok(Self::with_http_client(config, http))
    }

    /// Creates a client that sends requests through `http`.
    pub fn with_http_client(config: LookupConfig, http: Arc<reqwest::Client>) -> Self {
        Self {
            config: Arc::new(config),
            http,
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Checks a single URL.
    ///
    /// # Errors
    ///
    /// See [`SafeBrowsingClient::check_urls`].
    pub async fn check_url(&self, url: &Url) -> Result<LookupResult, SafeBrowsingError> {
        self.check_urls(std::slice::from_ref(url)).await
    }

    /// Checks `urls` with a single lookup request.
    ///
    /// Any response body yields `Ok`, whatever its HTTP status: service errors
    /// come back as [`LookupResult::ApiError`].
    ///
    /// # Errors
    ///
    /// - `Configuration`: no API key or unusable endpoint; nothing is sent
    /// - `InvalidRequest`: `urls` is empty; nothing is sent
    /// - `Encoding`: the request could not be serialized; nothing is sent
    /// - `Transport`: the request failed or the body could not be read
    pub async fn check_urls(&self, urls: &[Url]) -> Result<LookupResult, SafeBrowsingError> {
        let request = build_request(&self.config, urls)?;
        let target = lookup_url(&self.config)?;
        let body = encode(&request).map_err(SafeBrowsingError::Encoding)?;

        debug!(
            "Checking {} URL(s) against {}",
            urls.len(),
            self.config.endpoint
        );

        let response = self
            .http
            .post(target)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(transport_error)?;
        debug!("Lookup responded {} with {} bytes", status, bytes.len());

        let result = classify_response(&bytes);
        match &result {
            LookupResult::Clean => debug!("No threats found for {} URL(s)", urls.len()),
            LookupResult::Matches(matches) => {
                for m in matches {
                    info!(
                        "Threat match: {} ({}) at {}",
                        m.threat_type,
                        m.platform_type,
                        m.url().unwrap_or("<unknown entry>")
                    );
                }
            }
            LookupResult::ApiError(detail) => warn!(
                "Safe Browsing API error {} ({}): {}",
                detail.code, detail.status, detail.message
            ),
        }
        Ok(result)
    }

    /// Runs [`SafeBrowsingClient::check_urls`] on the current Tokio runtime and
    /// passes the outcome to `completion` exactly once.
    ///
    /// `completion` runs on a runtime worker thread; callers that need to
    /// touch UI state must redispatch from there.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn check_urls_detached<F>(&self, urls: Vec<Url>, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<LookupResult, SafeBrowsingError>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            let result = client.check_urls(&urls).await;
            completion(result);
        })
    }
}

// The request URL carries the API key; strip it before the error is surfaced.
fn transport_error(e: reqwest::Error) -> SafeBrowsingError {
    let e = e.without_url();
    warn!(
        "Lookup transport failure ({}): {}",
        categorize_reqwest_error(&e),
        e
    );
    SafeBrowsingError::Transport(Some(e))
}
