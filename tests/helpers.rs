// Shared test helpers for mock lookup servers and sample payloads.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use safe_browsing::LookupConfig;
use serde_json::{json, Value};
use wiremock::MockServer;

/// Path of the lookup endpoint on the mock server.
#[allow(dead_code)]
pub const LOOKUP_PATH: &str = "/v4/threatMatches:find";

/// API key used by every test config.
#[allow(dead_code)]
pub const API_KEY: &str = "test-api-key_123";

/// Creates a config that points at `server` and carries `API_KEY`.
#[allow(dead_code)]
pub fn test_config(server: &MockServer) -> LookupConfig {
    LookupConfig {
        endpoint: format!("{}{}", server.uri(), LOOKUP_PATH),
        client_id: "safe_browsing_test".to_string(),
        client_version: "1.0.0".to_string(),
        timeout_seconds: 5,
        ..LookupConfig::default()
    }
    .with_api_key(API_KEY)
}

/// An endpoint on localhost where nothing is listening.
#[allow(dead_code)]
pub fn unreachable_endpoint() -> String {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind ephemeral port")
        .local_addr()
        .expect("Failed to read local address")
        .port();
    format!("http://127.0.0.1:{}{}", port, LOOKUP_PATH)
}

/// A well-formed single-match response body for `url`.
#[allow(dead_code)]
pub fn one_match_body(url: &str) -> Value {
    json!({
        "matches": [{
            "threatType": "MALWARE",
            "platformType": "ANY_PLATFORM",
            "threatEntryType": "URL",
            "threat": {"url": url},
            "threatEntryMetadata": {
                "entries": [{"key": "malware_threat_type", "value": "landing"}]
            },
            "cacheDuration": "300s"
        }]
    })
}
