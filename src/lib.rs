//! safe_browsing library: check URLs against Google Safe Browsing
//!
//! This library asks the Safe Browsing Lookup API (v4) whether URLs are known
//! malware, phishing, unwanted software or potentially harmful application
//! hosts, and can gate opening a URL on a clean result.
//!
//! # Example
//!
//! ```no_run
//! use safe_browsing::{LookupConfig, LookupResult, SafeBrowsingClient};
//! use url::Url;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LookupConfig::default().with_api_key("YOUR_API_KEY");
//! let client = SafeBrowsingClient::new(config)?;
//!
//! let url = Url::parse("http://malware.testing.google.test/testing/malware/")?;
//! match client.check_url(&url).await? {
//!     LookupResult::Clean => println!("{url} looks safe"),
//!     LookupResult::Matches(matches) => println!("{} threat(s) found", matches.len()),
//!     LookupResult::ApiError(detail) => eprintln!("service error: {}", detail.message),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups are async and require a Tokio runtime. Synchronous callers can use
//! the [`blocking`] adapter from a thread outside the runtime.

#![warn(missing_docs)]

pub mod app;
pub mod blocking;
pub mod config;
mod error_handling;
pub mod initialization;
pub mod lookup;
pub mod open;
pub mod schema;

// Re-export public API
pub use config::{LogFormat, LogLevel, LookupConfig};
pub use error_handling::{
    categorize_reqwest_error, ConfigValidationError, ErrorKind, InitializationError,
    SafeBrowsingError,
};
pub use lookup::{LookupResult, SafeBrowsingClient};
pub use open::{check_and_open, open_or_present, CommandOpener, OpenOptions, Presenter, UrlOpener};
