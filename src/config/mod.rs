//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, defaults, timeouts)
//! - The lookup configuration struct and logging enums
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::Opt;
pub use constants::*;
pub use types::{LogFormat, LogLevel, LookupConfig};
