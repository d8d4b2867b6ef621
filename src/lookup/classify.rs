//! Response classification.
//!
//! A response body is matched against the known envelopes in a fixed
//! priority order: error envelope, then matches envelope. A body matching
//! neither is clean. That includes malformed bodies and bodies with unknown
//! vocabulary values, which keeps compatibility with the lenient behavior
//! clients of this API have always had.

use log::debug;

use crate::config::MAX_BODY_PREVIEW_CHARS;
use crate::error_handling::SafeBrowsingError;
use crate::schema::{decode, ErrorDetail, ErrorEnvelope, MatchesEnvelope, ThreatMatch};

/// Outcome of a lookup that produced a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// No URL matched any configured list.
    Clean,
    /// At least one URL matched, in service order.
    Matches(Vec<ThreatMatch>),
    /// The service rejected the request.
    ApiError(ErrorDetail),
}

impl LookupResult {
    /// `true` only for [`LookupResult::Clean`].
    pub fn is_clean(&self) -> bool {
        matches!(self, LookupResult::Clean)
    }

    /// Converts the outcome into a yes/no verdict.
    ///
    /// # Errors
    ///
    /// `ThreatFound` for matches and `Api` for service errors.
    pub fn into_verdict(self) -> Result<(), SafeBrowsingError> {
        match self {
            LookupResult::Clean => Ok(()),
            LookupResult::Matches(matches) => Err(SafeBrowsingError::ThreatFound(matches)),
            LookupResult::ApiError(detail) => Err(SafeBrowsingError::Api(detail)),
        }
    }
}

type Classifier = fn(&[u8]) -> Option<LookupResult>;

/// Tried in order; the first classifier that recognises the body wins.
const CLASSIFIERS: [Classifier; 2] = [api_error, threat_matches];

/// Classifies a response body.
pub fn classify_response(body: &[u8]) -> LookupResult {
    if let Some(result) = CLASSIFIERS.iter().find_map(|classify| classify(body)) {
        return result;
    }
    if !is_empty_object(body) {
        let text = String::from_utf8_lossy(body);
        let preview: String = text.chars().take(MAX_BODY_PREVIEW_CHARS).collect();
        debug!(
            "Response matched neither error nor matches envelope, treating as clean: {}",
            preview
        );
    }
    LookupResult::Clean
}

fn api_error(body: &[u8]) -> Option<LookupResult> {
    decode::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| LookupResult::ApiError(envelope.error))
}

fn threat_matches(body: &[u8]) -> Option<LookupResult> {
    decode::<MatchesEnvelope>(body)
        .ok()
        .filter(|envelope| !envelope.matches.is_empty())
        .map(|envelope| LookupResult::Matches(envelope.matches))
}

fn is_empty_object(body: &[u8]) -> bool {
    decode::<serde_json::Map<String, serde_json::Value>>(body)
        .map(|map| map.is_empty())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ErrorKind;
    use crate::schema::{PlatformType, ThreatEntry, ThreatEntryType, ThreatType};

    const ONE_MATCH: &str = r#"{"matches":[{
        "threatType":"SOCIAL_ENGINEERING",
        "platformType":"ANY_PLATFORM",
        "threatEntryType":"URL",
        "threat":{"url":"http://phish.example/"},
        "cacheDuration":"300s"
    }]}"#;

    #[test]
    fn test_empty_object_is_clean() {
        assert_eq!(classify_response(b"{}"), LookupResult::Clean);
    }

    #[test]
    fn test_single_match() {
        let result = classify_response(ONE_MATCH.as_bytes());
        assert_eq!(
            result,
            LookupResult::Matches(vec![ThreatMatch {
                threat_type: ThreatType::SocialEngineering,
                platform_type: PlatformType::Any,
                threat_entry_type: ThreatEntryType::Url,
                threat: ThreatEntry::for_url("http://phish.example/"),
                threat_entry_metadata: None,
                cache_duration: "300s".to_string(),
            }])
        );
    }

    #[test]
    fn test_error_envelope() {
        let result = classify_response(br#"{"error":{"status":"X","message":"Y","code":7}}"#);
        assert_eq!(
            result,
            LookupResult::ApiError(ErrorDetail {
                status: "X".to_string(),
                message: "Y".to_string(),
                code: 7,
            })
        );
    }

    #[test]
    fn test_error_envelope_takes_priority_over_matches() {
        let body = r#"{
            "error":{"status":"X","message":"Y","code":7},
            "matches":[{
                "threatType":"MALWARE",
                "platformType":"ANY_PLATFORM",
                "threatEntryType":"URL",
                "threat":{"url":"http://bad.example/"},
                "cacheDuration":"300s"
            }]
        }"#;
        assert!(matches!(
            classify_response(body.as_bytes()),
            LookupResult::ApiError(_)
        ));
    }

    // Lenient by contract: anything unrecognised is reported as clean.
    #[test]
    fn test_unrecognised_bodies_are_clean() {
        assert_eq!(
            classify_response(br#"{"unexpected":"field"}"#),
            LookupResult::Clean
        );
        assert_eq!(classify_response(b"not json"), LookupResult::Clean);
        assert_eq!(classify_response(b""), LookupResult::Clean);
        assert_eq!(classify_response(br#"{"matches":[]}"#), LookupResult::Clean);
        // A match with a value outside the vocabulary fails to decode
        let unknown = ONE_MATCH.replace("SOCIAL_ENGINEERING", "CRYPTOJACKING");
        assert_eq!(classify_response(unknown.as_bytes()), LookupResult::Clean);
    }

    #[test]
    fn test_into_verdict() {
        assert!(LookupResult::Clean.into_verdict().is_ok());
        let threat = classify_response(ONE_MATCH.as_bytes()).into_verdict().unwrap_err();
        assert_eq!(threat.kind(), ErrorKind::ThreatFound);
        let api = classify_response(br#"{"error":{"status":"X","message":"Y","code":7}}"#)
            .into_verdict()
            .unwrap_err();
        assert_eq!(api.kind(), ErrorKind::ApiError);
    }
}
