//! Lookup vocabularies.
//!
//! Every value serializes to the exact uppercase string the Safe Browsing API
//! expects. Parsing a string outside the vocabulary is an error, both through
//! serde and through `FromStr` (the latter is case-insensitive so CLI users can
//! type `malware`).

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Category of harmful content.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ThreatType {
    /// Unknown.
    #[serde(rename = "THREAT_TYPE_UNSPECIFIED")]
    #[strum(serialize = "THREAT_TYPE_UNSPECIFIED")]
    Unspecified,
    /// Malware threat type.
    #[serde(rename = "MALWARE")]
    #[strum(serialize = "MALWARE")]
    Malware,
    /// Social engineering (phishing) threat type.
    #[serde(rename = "SOCIAL_ENGINEERING")]
    #[strum(serialize = "SOCIAL_ENGINEERING")]
    SocialEngineering,
    /// Unwanted software threat type.
    #[serde(rename = "UNWANTED_SOFTWARE")]
    #[strum(serialize = "UNWANTED_SOFTWARE")]
    UnwantedSoftware,
    /// Potentially harmful application threat type.
    #[serde(rename = "POTENTIALLY_HARMFUL_APPLICATION")]
    #[strum(serialize = "POTENTIALLY_HARMFUL_APPLICATION")]
    PotentiallyHarmfulApplication,
}

/// Platform a threat applies to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum PlatformType {
    /// Unknown platform.
    #[serde(rename = "PLATFORM_TYPE_UNSPECIFIED")]
    #[strum(serialize = "PLATFORM_TYPE_UNSPECIFIED")]
    Unspecified,
    /// Threat posed to Windows.
    #[serde(rename = "WINDOWS")]
    #[strum(serialize = "WINDOWS")]
    Windows,
    /// Threat posed to Linux.
    #[serde(rename = "LINUX")]
    #[strum(serialize = "LINUX")]
    Linux,
    /// Threat posed to Android.
    #[serde(rename = "ANDROID")]
    #[strum(serialize = "ANDROID")]
    Android,
    /// Threat posed to macOS.
    #[serde(rename = "OSX")]
    #[strum(serialize = "OSX")]
    Osx,
    /// Threat posed to iOS.
    #[serde(rename = "IOS")]
    #[strum(serialize = "IOS")]
    Ios,
    /// Threat posed to at least one of the defined platforms.
    #[serde(rename = "ANY_PLATFORM")]
    #[strum(serialize = "ANY_PLATFORM")]
    Any,
    /// Threat posed to all defined platforms.
    #[serde(rename = "ALL_PLATFORMS")]
    #[strum(serialize = "ALL_PLATFORMS")]
    All,
    /// Threat posed to Chrome.
    #[serde(rename = "CHROME")]
    #[strum(serialize = "CHROME")]
    Chrome,
}

/// Kind of artifact being checked.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ThreatEntryType {
    /// Unspecified.
    #[serde(rename = "THREAT_ENTRY_TYPE_UNSPECIFIED")]
    #[strum(serialize = "THREAT_ENTRY_TYPE_UNSPECIFIED")]
    Unspecified,
    /// A URL.
    #[serde(rename = "URL")]
    #[strum(serialize = "URL")]
    Url,
    /// An executable program.
    #[serde(rename = "EXECUTABLE")]
    #[strum(serialize = "EXECUTABLE")]
    Executable,
}
