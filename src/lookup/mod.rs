//! Threat lookups.
//!
//! This module provides:
//! - Request assembly from URLs and a `LookupConfig`
//! - The HTTP exchange with the lookup endpoint
//! - Response classification into a `LookupResult`
//!
//! A lookup is one request and one result. There is no retry, caching or
//! batching across calls.

mod classify;
mod client;
mod request;

// Re-export public API
pub use classify::{classify_response, LookupResult};
pub use client::SafeBrowsingClient;
pub use request::{build_request, lookup_url};
