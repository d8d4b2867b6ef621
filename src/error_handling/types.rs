//! Error type definitions.
//!
//! This module defines the lookup error taxonomy plus the errors raised while
//! setting up logging, the HTTP client and configuration.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::schema::{ErrorDetail, ThreatMatch};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// A configuration field that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending `LookupConfig` field.
    pub field: &'static str,
    /// What is wrong and how to fix it.
    pub message: String,
}

impl ConfigValidationError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Why a lookup did not report the URLs as clean.
///
/// Every variant is terminal for the call; nothing is retried internally.
#[derive(Error, Debug)]
pub enum SafeBrowsingError {
    /// The client is not configured to make lookups (e.g. no API key).
    /// Detected before any network I/O.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The lookup request itself is invalid (e.g. no URLs to check).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The service rejected the request.
    #[error("Safe Browsing API error {} ({}): {}", .0.code, .0.status, .0.message)]
    Api(ErrorDetail),

    /// The lookup succeeded and at least one URL is a known threat.
    #[error("{}", describe_matches(.0))]
    ThreatFound(Vec<ThreatMatch>),

    /// The request could not be serialized.
    #[error("Failed to encode lookup request: {0}")]
    Encoding(#[source] serde_json::Error),

    /// No response body was obtained. The cause is absent when the lookup
    /// task ended without reporting one.
    #[error("{}", describe_transport(.0))]
    Transport(#[source] Option<ReqwestError>),
}

impl SafeBrowsingError {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SafeBrowsingError::Configuration(_) => ErrorKind::ConfigurationError,
            SafeBrowsingError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            SafeBrowsingError::Api(_) => ErrorKind::ApiError,
            SafeBrowsingError::ThreatFound(_) => ErrorKind::ThreatFound,
            SafeBrowsingError::Encoding(_) => ErrorKind::EncodingError,
            SafeBrowsingError::Transport(_) => ErrorKind::TransportError,
        }
    }

    /// Matches reported by the service, if this is a threat result.
    pub fn threats(&self) -> Option<&[ThreatMatch]> {
        match self {
            SafeBrowsingError::ThreatFound(matches) => Some(matches),
            _ => None,
        }
    }
}

fn describe_matches(matches: &[ThreatMatch]) -> String {
    let found: Vec<String> = matches
        .iter()
        .map(|m| {
            format!(
                "{} ({}) at {}",
                m.threat_type,
                m.platform_type,
                m.url().unwrap_or("<unknown entry>")
            )
        })
        .collect();
    format!("Threat found: {}", found.join(", "))
}

fn describe_transport(source: &Option<ReqwestError>) -> String {
    match source {
        Some(e) => format!("Transport error: {e}"),
        None => "Transport error: unknown error".to_string(),
    }
}

/// Categories of lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)]
pub enum ErrorKind {
    /// Missing API key or unusable endpoint
    ConfigurationError,
    /// Empty URL list
    InvalidRequest,
    /// Error envelope returned by the service
    ApiError,
    /// Matches returned by the service
    ThreatFound,
    /// Request serialization failure
    EncodingError,
    /// Network failure or lost completion
    TransportError,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    /// Returns a human-readable string representation of the error kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ConfigurationError => "Configuration error",
            ErrorKind::InvalidRequest => "Invalid request",
            ErrorKind::ApiError => "API error",
            ErrorKind::ThreatFound => "Threat found",
            ErrorKind::EncodingError => "Encoding error",
            ErrorKind::TransportError => "Transport error",
        }
    }
}
