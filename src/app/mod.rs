//! Command-line application helpers.
//!
//! This module provides URL normalization, URL input collection, and outcome
//! reporting used by the `safe_browsing` binary.

pub mod input;
pub mod outcome;
pub mod url;

// Re-export public API
pub use input::collect_urls;
pub use outcome::{exit_code, summarize, EXIT_CLEAN, EXIT_ERROR, EXIT_THREATS_FOUND};
pub use url::validate_and_normalize_url;
