//! CLI outcome reporting and exit codes.

use crate::error_handling::SafeBrowsingError;
use crate::lookup::LookupResult;

/// Every URL is clean.
pub const EXIT_CLEAN: i32 = 0;
/// The lookup could not be completed or the service returned an error.
pub const EXIT_ERROR: i32 = 1;
/// At least one URL matched a threat list.
pub const EXIT_THREATS_FOUND: i32 = 2;

/// Maps a lookup outcome to the process exit code.
pub fn exit_code(outcome: &Result<LookupResult, SafeBrowsingError>) -> i32 {
    match outcome {
        Ok(LookupResult::Clean) => EXIT_CLEAN,
        Ok(LookupResult::Matches(_)) => EXIT_THREATS_FOUND,
        Ok(LookupResult::ApiError(_)) => EXIT_ERROR,
        Err(SafeBrowsingError::ThreatFound(_)) => EXIT_THREATS_FOUND,
        Err(_) => EXIT_ERROR,
    }
}

/// One line per result for terminal output.
pub fn summarize(outcome: &Result<LookupResult, SafeBrowsingError>, checked: usize) -> Vec<String> {
    match outcome {
        Ok(LookupResult::Clean) => vec![format!(
            "✅ No threats found ({} URL{} checked)",
            checked,
            if checked == 1 { "" } else { "s" }
        )],
        Ok(LookupResult::Matches(matches)) => matches
            .iter()
            .map(|m| {
                format!(
                    "⚠️  {} {} ({}, {})",
                    m.url().unwrap_or("<unknown entry>"),
                    m.threat_type,
                    m.platform_type,
                    m.threat_entry_type
                )
            })
            .collect(),
        Ok(LookupResult::ApiError(detail)) => vec![format!(
            "❌ Safe Browsing API error {} ({}): {}",
            detail.code, detail.status, detail.message
        )],
        Err(e) => vec![format!("❌ {}", e)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ErrorDetail, PlatformType, ThreatEntry, ThreatEntryType, ThreatMatch, ThreatType};

    fn one_match() -> Vec<ThreatMatch> {
        vec![ThreatMatch {
            threat_type: ThreatType::Malware,
            platform_type: PlatformType::Windows,
            threat_entry_type: ThreatEntryType::Url,
            threat: ThreatEntry::for_url("http://bad.example/"),
            threat_entry_metadata: None,
            cache_duration: "300s".to_string(),
        }]
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&Ok(LookupResult::Clean)), EXIT_CLEAN);
        assert_eq!(
            exit_code(&Ok(LookupResult::Matches(one_match()))),
            EXIT_THREATS_FOUND
        );
        assert_eq!(
            exit_code(&Err(SafeBrowsingError::ThreatFound(one_match()))),
            EXIT_THREATS_FOUND
        );
        assert_eq!(
            exit_code(&Ok(LookupResult::ApiError(ErrorDetail {
                status: "INVALID_ARGUMENT".to_string(),
                message: "bad key".to_string(),
                code: 400,
            }))),
            EXIT_ERROR
        );
        assert_eq!(
            exit_code(&Err(SafeBrowsingError::Configuration("no key".into()))),
            EXIT_ERROR
        );
    }

    #[test]
    fn test_summarize() {
        assert_eq!(
            summarize(&Ok(LookupResult::Clean), 1),
            vec!["✅ No threats found (1 URL checked)".to_string()]
        );
        let lines = summarize(&Ok(LookupResult::Matches(one_match())), 1);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("http://bad.example/ MALWARE (WINDOWS, URL)"));
        let lines = summarize(&Err(SafeBrowsingError::Transport(None)), 3);
        assert_eq!(lines, vec!["❌ Transport error: unknown error".to_string()]);
    }
}
