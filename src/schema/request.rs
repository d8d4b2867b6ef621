//! Request payload for `threatMatches:find`.

use serde::{Deserialize, Serialize};

use super::types::{PlatformType, ThreatEntryType, ThreatType};

/// An individual item to check.
///
/// Only one of the fields is expected to be set. This client only ever
/// populates `url`; the other two exist so matches returned by the service
/// decode losslessly. Absent fields are omitted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThreatEntry {
    /// A hash prefix or full SHA256 hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// A URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The digest of an executable in SHA256 format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

impl ThreatEntry {
    /// Creates an entry that carries only a URL.
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }
}

/// Identifies the calling application to the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    /// A client ID that uniquely identifies the client implementation.
    pub client_id: String,
    /// The version of the client implementation.
    pub client_version: String,
}

/// What to check and which lists to check it against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatInfo {
    /// The threat types to be checked.
    pub threat_types: Vec<ThreatType>,
    /// The platform types to be checked.
    pub platform_types: Vec<PlatformType>,
    /// The entry types to be checked.
    pub threat_entry_types: Vec<ThreatEntryType>,
    /// The threat entries to be checked, in caller order.
    pub threat_entries: Vec<ThreatEntry>,
}

/// Complete request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    /// The client metadata.
    pub client: ClientInfo,
    /// The lists and entries to be checked for matches.
    pub threat_info: ThreatInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_request() -> LookupRequest {
        LookupRequest {
            client: ClientInfo {
                client_id: "com.example.app".to_string(),
                client_version: "1.2.3".to_string(),
            },
            threat_info: ThreatInfo {
                threat_types: vec![ThreatType::Malware, ThreatType::SocialEngineering],
                platform_types: vec![PlatformType::Any],
                threat_entry_types: vec![ThreatEntryType::Url],
                threat_entries: vec![
                    ThreatEntry::for_url("http://a.example/"),
                    ThreatEntry::for_url("http://b.example/"),
                ],
            },
        }
    }

    #[test]
    fn test_request_field_names() {
        let value = serde_json::to_value(sample_request()).unwrap();
        assert_eq!(
            value,
            json!({
                "client": {
                    "clientId": "com.example.app",
                    "clientVersion": "1.2.3"
                },
                "threatInfo": {
                    "threatTypes": ["MALWARE", "SOCIAL_ENGINEERING"],
                    "platformTypes": ["ANY_PLATFORM"],
                    "threatEntryTypes": ["URL"],
                    "threatEntries": [
                        {"url": "http://a.example/"},
                        {"url": "http://b.example/"}
                    ]
                }
            })
        );
    }

    #[test]
    fn test_request_round_trip() {
        let request = sample_request();
        let bytes = serde_json::to_vec(&request).unwrap();
        let decoded: LookupRequest = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_threat_entry_accepts_hash_and_digest() {
        let entry: ThreatEntry =
            serde_json::from_str(r#"{"hash": "abcd", "digest": "ef01"}"#).unwrap();
        assert_eq!(entry.hash.as_deref(), Some("abcd"));
        assert_eq!(entry.url, None);
        assert_eq!(entry.digest.as_deref(), Some("ef01"));
    }

    #[test]
    fn test_threat_entry_for_url_sets_only_url() {
        let entry = ThreatEntry::for_url("https://example.com/");
        assert_eq!(entry.hash, None);
        assert_eq!(entry.digest, None);
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"url":"https://example.com/"}"#
        );
    }
}
