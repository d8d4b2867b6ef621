//! Lookup request assembly.

use url::Url;

use crate::config::{LookupConfig, API_KEY_REQUIRED_MESSAGE};
use crate::error_handling::SafeBrowsingError;
use crate::schema::{ClientInfo, LookupRequest, ThreatEntry, ThreatInfo};

/// Returns the API key or the configuration error that replaces the lookup.
pub(crate) fn require_api_key(config: &LookupConfig) -> Result<&str, SafeBrowsingError> {
    config
        .api_key()
        .ok_or_else(|| SafeBrowsingError::Configuration(API_KEY_REQUIRED_MESSAGE.to_string()))
}

/// Builds the request body: one URL entry per input, in input order.
///
/// # Errors
///
/// - `Configuration` when no API key is set (checked first)
/// - `InvalidRequest` when `urls` is empty
pub fn build_request(
    config: &LookupConfig,
    urls: &[Url],
) -> Result<LookupRequest, SafeBrowsingError> {
    require_api_key(config)?;
    if urls.is_empty() {
        return Err(SafeBrowsingError::InvalidRequest(
            "at least one URL is required".to_string(),
        ));
    }

    Ok(LookupRequest {
        client: ClientInfo {
            client_id: config.client_id.clone(),
            client_version: config.client_version.clone(),
        },
        threat_info: ThreatInfo {
            threat_types: config.threat_types.clone(),
            platform_types: config.platform_types.clone(),
            threat_entry_types: config.threat_entry_types.clone(),
            threat_entries: urls
                .iter()
                .map(|url| ThreatEntry::for_url(url.as_str()))
                .collect(),
        },
    })
}

/// Builds `{endpoint}?key={api_key}`.
///
/// The key is appended verbatim; only characters that are invalid in a query
/// get percent-encoded by the URL parser. Keys must be URL-safe: a `&` or `#`
/// in the key would start a new query pair or the fragment. Google API keys
/// only use `[A-Za-z0-9_-]`.
///
/// # Errors
///
/// `Configuration` when no API key is set or the result is not a valid URL.
pub fn lookup_url(config: &LookupConfig) -> Result<Url, SafeBrowsingError> {
    let api_key = require_api_key(config)?;
    let separator = if config.endpoint.contains('?') { '&' } else { '?' };
    let raw = format!("{}{}key={}", config.endpoint, separator, api_key);
    Url::parse(&raw).map_err(|e| {
        SafeBrowsingError::Configuration(format!(
            "Invalid lookup endpoint '{}': {}",
            config.endpoint, e
        ))
    })
}
