//! Configuration constants.
//!
//! This module defines the service endpoint, lookup defaults, timeouts and the
//! environment variable names read by the CLI.

/// Lookup API endpoint. The API key is appended as the `key` query parameter.
pub const SAFE_BROWSING_ENDPOINT: &str = "https://safebrowsing.googleapis.com/v4/threatMatches:find";

/// Message returned when a lookup is attempted without an API key.
pub const API_KEY_REQUIRED_MESSAGE: &str = "Get your key from https://console.cloud.google.com/apis/credentials and set LookupConfig::api_key (or the SAFE_BROWSING_API_KEY environment variable).";

/// Default client identifier sent in `client.clientId`.
pub const DEFAULT_CLIENT_ID: &str = env!("CARGO_PKG_NAME");

/// Default client version sent in `client.clientVersion`.
pub const DEFAULT_CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default User-Agent string for lookup requests.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Network operation timeouts
/// Overall lookup request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum number of body characters included in debug logs for responses
/// that match neither envelope.
pub const MAX_BODY_PREVIEW_CHARS: usize = 200;

// Environment variables
/// API key environment variable
pub const API_KEY_ENV: &str = "SAFE_BROWSING_API_KEY";
/// Client id environment variable
pub const CLIENT_ID_ENV: &str = "SAFE_BROWSING_CLIENT_ID";
/// Client version environment variable
pub const CLIENT_VERSION_ENV: &str = "SAFE_BROWSING_CLIENT_VERSION";

/// Program used by the CLI to open a clean URL.
#[cfg(target_os = "macos")]
pub const DEFAULT_OPENER: &str = "open";
/// Program used by the CLI to open a clean URL.
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_OPENER: &str = "xdg-open";
