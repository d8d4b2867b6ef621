//! Command-line options.

use std::path::PathBuf;

use clap::Parser;

use crate::config::constants::{
    API_KEY_ENV, CLIENT_ID_ENV, CLIENT_VERSION_ENV, DEFAULT_CLIENT_ID, DEFAULT_CLIENT_VERSION,
    DEFAULT_OPENER, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, SAFE_BROWSING_ENDPOINT,
};
use crate::config::types::{LogFormat, LogLevel, LookupConfig};
use crate::schema::{PlatformType, ThreatEntryType, ThreatType};

/// Command-line options for the `safe_browsing` binary.
///
/// List options accept repeated flags or comma-separated values. When a list
/// is omitted the library default applies.
#[derive(Debug, Parser)]
#[command(
    name = "safe_browsing",
    version,
    about = "Checks URLs against Google Safe Browsing before opening them"
)]
pub struct Opt {
    /// URLs to check (https:// is assumed when no scheme is given)
    pub urls: Vec<String>,

    /// File with one URL per line (blank lines and # comments are skipped)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Google API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Client identifier reported to the service
    #[arg(long, env = CLIENT_ID_ENV, default_value = DEFAULT_CLIENT_ID)]
    pub client_id: String,

    /// Client version reported to the service
    #[arg(long, env = CLIENT_VERSION_ENV, default_value = DEFAULT_CLIENT_VERSION)]
    pub client_version: String,

    /// Threat types to check (e.g. MALWARE,SOCIAL_ENGINEERING)
    #[arg(long = "threat-type", value_delimiter = ',')]
    pub threat_types: Vec<ThreatType>,

    /// Platform types to check (e.g. ANY_PLATFORM)
    #[arg(long = "platform-type", value_delimiter = ',')]
    pub platform_types: Vec<PlatformType>,

    /// Threat entry types to check (e.g. URL,EXECUTABLE)
    #[arg(long = "threat-entry-type", value_delimiter = ',')]
    pub threat_entry_types: Vec<ThreatEntryType>,

    /// Lookup endpoint
    #[arg(long, default_value = SAFE_BROWSING_ENDPOINT)]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Open the URL when it is clean (single URL only)
    #[arg(long)]
    pub open: bool,

    /// Program used by --open
    #[arg(long, default_value = DEFAULT_OPENER)]
    pub opener: String,
}

impl Opt {
    /// Builds the lookup configuration from the parsed options.
    pub fn lookup_config(&self) -> LookupConfig {
        let defaults = LookupConfig::default();
        LookupConfig {
            api_key: self.api_key.clone(),
            client_id: self.client_id.clone(),
            client_version: self.client_version.clone(),
            threat_types: non_empty_or(&self.threat_types, defaults.threat_types),
            platform_types: non_empty_or(&self.platform_types, defaults.platform_types),
            threat_entry_types: non_empty_or(
                &self.threat_entry_types,
                defaults.threat_entry_types,
            ),
            endpoint: self.endpoint.clone(),
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
        }
    }
}

fn non_empty_or<T: Clone>(values: &[T], fallback: Vec<T>) -> Vec<T> {
    if values.is_empty() {
        fallback
    } else {
        values.to_vec()
    }
}
