//! Error handling.
//!
//! This module provides:
//! - The lookup error taxonomy (`SafeBrowsingError`, `ErrorKind`)
//! - Initialization and configuration validation errors
//! - Transport error categorization for logs
//!
//! Threat matches are reported through the same error type when a caller asks
//! for a yes/no verdict, but they are a successful lookup, not a failure of
//! the mechanism; `LookupResult` keeps them separate.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{ConfigValidationError, ErrorKind, InitializationError, SafeBrowsingError};
