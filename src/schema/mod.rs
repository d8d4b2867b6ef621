//! Wire schema for the Safe Browsing Lookup API (v4).
//!
//! This module provides:
//! - Lookup vocabularies (threat, platform and entry types)
//! - Request payloads (`LookupRequest` and its parts)
//! - Response payloads (matches and error envelopes)
//! - `encode`/`decode` helpers over JSON bytes
//!
//! No classification logic lives here; see `lookup` for that.

mod request;
mod response;
mod types;

use serde::de::DeserializeOwned;
use serde::Serialize;

// Re-export public API
pub use request::{ClientInfo, LookupRequest, ThreatEntry, ThreatInfo};
pub use response::{
    ErrorDetail, ErrorEnvelope, MatchesEnvelope, MetadataEntry, ThreatEntryMetadata, ThreatMatch,
};
pub use types::{PlatformType, ThreatEntryType, ThreatType};

/// Encodes a schema value as JSON bytes.
///
/// # Errors
///
/// Returns the underlying `serde_json::Error` if serialization fails.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(value)
}

/// Decodes a schema value from JSON bytes.
///
/// Unknown vocabulary strings and missing required fields are errors.
/// Unknown object keys are ignored.
///
/// # Errors
///
/// Returns the underlying `serde_json::Error` if the bytes do not match `T`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_request() {
        let request = LookupRequest {
            client: ClientInfo {
                client_id: "id".to_string(),
                client_version: "0.0.1".to_string(),
            },
            threat_info: ThreatInfo {
                threat_types: vec![ThreatType::PotentiallyHarmfulApplication],
                platform_types: vec![PlatformType::Android, PlatformType::Chrome],
                threat_entry_types: vec![ThreatEntryType::Url, ThreatEntryType::Executable],
                threat_entries: vec![ThreatEntry::for_url("https://example.org/path?q=1")],
            },
        };
        let bytes = encode(&request).unwrap();
        let decoded: LookupRequest = decode(&bytes).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_decode_ignores_unknown_keys() {
        let envelope: ErrorEnvelope = decode(
            br#"{"error":{"status":"PERMISSION_DENIED","message":"no","code":403,"details":[]},"extra":1}"#,
        )
        .unwrap();
        assert_eq!(envelope.error.code, 403);
    }

    #[test]
    fn test_decode_rejects_non_json() {
        assert!(decode::<MatchesEnvelope>(b"<html>").is_err());
    }

    // Property-based tests using proptest
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    fn threat_types() -> impl Strategy<Value = Vec<ThreatType>> {
        let all: Vec<ThreatType> = ThreatType::iter().collect();
        let len = all.len();
        prop::sample::subsequence(all, 1..=len)
    }

    fn platform_types() -> impl Strategy<Value = Vec<PlatformType>> {
        let all: Vec<PlatformType> = PlatformType::iter().collect();
        let len = all.len();
        prop::sample::subsequence(all, 1..=len)
    }

    fn threat_entry_types() -> impl Strategy<Value = Vec<ThreatEntryType>> {
        let all: Vec<ThreatEntryType> = ThreatEntryType::iter().collect();
        let len = all.len();
        prop::sample::subsequence(all, 1..=len)
    }

    fn entry_url() -> impl Strategy<Value = String> {
        ("[a-z]{1,12}", "[a-z0-9/._-]{0,20}")
            .prop_map(|(host, path)| format!("https://{}.example/{}", host, path))
    }

    fn metadata() -> impl Strategy<Value = Option<ThreatEntryMetadata>> {
        prop::option::of(
            prop::collection::vec(("[a-z_]{1,16}", "[A-Za-z0-9=+/]{0,16}"), 0..4).prop_map(
                |pairs| ThreatEntryMetadata {
                    entries: pairs
                        .into_iter()
                        .map(|(key, value)| MetadataEntry { key, value })
                        .collect(),
                },
            ),
        )
    }

    fn threat_match() -> impl Strategy<Value = ThreatMatch> {
        (
            prop::sample::select(ThreatType::iter().collect::<Vec<_>>()),
            prop::sample::select(PlatformType::iter().collect::<Vec<_>>()),
            prop::sample::select(ThreatEntryType::iter().collect::<Vec<_>>()),
            entry_url(),
            metadata(),
            0u32..86_400,
        )
            .prop_map(
                |(threat_type, platform_type, threat_entry_type, url, metadata, secs)| {
                    ThreatMatch {
                        threat_type,
                        platform_type,
                        threat_entry_type,
                        threat: ThreatEntry::for_url(url),
                        threat_entry_metadata: metadata,
                        cache_duration: format!("{}s", secs),
                    }
                },
            )
    }

    proptest! {
        #[test]
        fn test_request_round_trip_any_lists(
            threat_types in threat_types(),
            platform_types in platform_types(),
            threat_entry_types in threat_entry_types(),
            urls in prop::collection::vec(entry_url(), 1..16),
            client_id in "[A-Za-z0-9._-]{1,24}",
            client_version in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
        ) {
            let request = LookupRequest {
                client: ClientInfo { client_id, client_version },
                threat_info: ThreatInfo {
                    threat_types,
                    platform_types,
                    threat_entry_types,
                    threat_entries: urls.into_iter().map(ThreatEntry::for_url).collect(),
                },
            };
            let bytes = encode(&request).unwrap();
            let decoded: LookupRequest = decode(&bytes).unwrap();
            prop_assert_eq!(decoded, request);
        }

        #[test]
        fn test_matches_round_trip_any_matches(
            matches in prop::collection::vec(threat_match(), 1..8),
        ) {
            let envelope = MatchesEnvelope { matches };
            let bytes = encode(&envelope).unwrap();
            let decoded: MatchesEnvelope = decode(&bytes).unwrap();
            prop_assert_eq!(decoded, envelope);
        }

        #[test]
        fn test_absent_metadata_is_omitted(m in threat_match()) {
            let value = serde_json::to_value(&m).unwrap();
            prop_assert_eq!(
                value.get("threatEntryMetadata").is_some(),
                m.threat_entry_metadata.is_some()
            );
        }
    }
}
