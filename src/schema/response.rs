//! Response payloads for `threatMatches:find`.
//!
//! The service answers with one of three bodies: an error envelope, a matches
//! envelope, or an empty object when nothing matched.

use serde::{Deserialize, Serialize};

use super::request::ThreatEntry;
use super::types::{PlatformType, ThreatEntryType, ThreatType};

/// A single key/value pair of match metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataEntry {
    /// The metadata entry key.
    pub key: String,
    /// The metadata entry value.
    pub value: String,
}

/// Optional metadata attached to a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatEntryMetadata {
    /// The metadata entries, in service order.
    pub entries: Vec<MetadataEntry>,
}

/// One confirmed hit returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatMatch {
    /// The threat type matching this threat.
    pub threat_type: ThreatType,
    /// The platform type matching this threat.
    pub platform_type: PlatformType,
    /// The threat entry type matching this threat.
    pub threat_entry_type: ThreatEntryType,
    /// The threat matching this threat.
    pub threat: ThreatEntry,
    /// Optional metadata associated with this threat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threat_entry_metadata: Option<ThreatEntryMetadata>,
    /// The cache lifetime for the returned match, e.g. `"300s"`. Not parsed.
    pub cache_duration: String,
}

impl ThreatMatch {
    /// The matched URL, if the service reported one.
    pub fn url(&self) -> Option<&str> {
        self.threat.url.as_deref()
    }
}

/// Error detail reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Canonical status, e.g. `INVALID_ARGUMENT`.
    pub status: String,
    /// Human-readable message.
    pub message: String,
    /// Numeric code, usually the HTTP status.
    pub code: i64,
}

/// `{"error": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// The reported error.
    pub error: ErrorDetail,
}

/// `{"matches": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchesEnvelope {
    /// The threat list matches.
    pub matches: Vec<ThreatMatch>,
}
