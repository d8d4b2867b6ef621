//! Configuration types.
//!
//! This module defines the lookup configuration struct and the logging enums
//! shared by the library and the CLI.

use std::fmt;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_CLIENT_ID, DEFAULT_CLIENT_VERSION, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    SAFE_BROWSING_ENDPOINT,
};
use crate::error_handling::ConfigValidationError;
use crate::schema::{PlatformType, ThreatEntryType, ThreatType};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Lookup configuration.
///
/// Passed explicitly to [`crate::SafeBrowsingClient`]; there is no global
/// state. Build it once at startup and construct a new client to change it.
///
/// # Examples
///
/// ```
/// use safe_browsing::LookupConfig;
/// use safe_browsing::schema::ThreatType;
///
/// let config = LookupConfig {
///     threat_types: vec![ThreatType::Malware],
///     ..LookupConfig::default()
/// }
/// .with_api_key("YOUR_API_KEY");
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone)]
pub struct LookupConfig {
    /// Google API key. Required at lookup time.
    pub api_key: Option<String>,

    /// Client identifier sent as `client.clientId`
    pub client_id: String,

    /// Client version sent as `client.clientVersion`
    pub client_version: String,

    /// Threat types to check
    pub threat_types: Vec<ThreatType>,

    /// Platform types to check
    pub platform_types: Vec<PlatformType>,

    /// Threat entry types to check
    pub threat_entry_types: Vec<ThreatEntryType>,

    /// Lookup endpoint (without the `key` query parameter)
    pub endpoint: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            client_id: DEFAULT_CLIENT_ID.to_string(),
            client_version: DEFAULT_CLIENT_VERSION.to_string(),
            threat_types: vec![
                ThreatType::Malware,
                ThreatType::SocialEngineering,
                ThreatType::UnwantedSoftware,
                ThreatType::PotentiallyHarmfulApplication,
            ],
            platform_types: vec![PlatformType::Any],
            threat_entry_types: vec![ThreatEntryType::Url, ThreatEntryType::Executable],
            endpoint: SAFE_BROWSING_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for LookupConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("client_id", &self.client_id)
            .field("client_version", &self.client_version)
            .field("threat_types", &self.threat_types)
            .field("platform_types", &self.platform_types)
            .field("threat_entry_types", &self.threat_entry_types)
            .field("endpoint", &self.endpoint)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl LookupConfig {
    /// Returns the configuration with the given API key set.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The API key, if one is set and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Validates the configuration.
    ///
    /// A missing API key is not a validation failure here; lookups report it
    /// as a configuration error when they run.
    ///
    /// # Errors
    ///
    /// Returns the first offending field with a message describing the fix.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.client_id.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "client_id",
                "client_id must not be empty (e.g. your application's bundle or package name)",
            ));
        }
        if self.client_version.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "client_version",
                "client_version must not be empty (e.g. 1.0.0)",
            ));
        }
        if self.threat_types.is_empty() {
            return Err(ConfigValidationError::new(
                "threat_types",
                "at least one threat type is required (e.g. MALWARE)",
            ));
        }
        if self.platform_types.is_empty() {
            return Err(ConfigValidationError::new(
                "platform_types",
                "at least one platform type is required (e.g. ANY_PLATFORM)",
            ));
        }
        if self.threat_entry_types.is_empty() {
            return Err(ConfigValidationError::new(
                "threat_entry_types",
                "at least one threat entry type is required (e.g. URL)",
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                "timeout_seconds must be greater than 0",
            ));
        }
        match url::Url::parse(&self.endpoint) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            _ => {
                return Err(ConfigValidationError::new(
                    "endpoint",
                    format!("endpoint must be an http(s) URL, got '{}'", self.endpoint),
                ))
            }
        }
        Ok(())
    }
}
