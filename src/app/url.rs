//! URL validation and normalization utilities.

use log::warn;
use url::Url;

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes a URL given on the command line.
///
/// Adds an https:// prefix if the input has no http(s) scheme, then checks
/// that the result parses and uses http or https. Rejects inputs longer than
/// `MAX_URL_LENGTH`. Logs a warning and returns `None` for anything rejected.
pub fn validate_and_normalize_url(url: &str) -> Option<Url> {
    let url = url.trim();
    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            url.chars().take(50).collect::<String>()
        );
        return None;
    }

    let normalized = if !url.starts_with("http://") && !url.starts_with("https://") {
        format!("https://{url}")
    } else {
        url.to_string()
    };

    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping normalized URL exceeding maximum length ({} > {})",
            normalized.len(),
            MAX_URL_LENGTH
        );
        return None;
    }

    match Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" if parsed.host().is_some() => Some(parsed),
            _ => {
                warn!("Skipping unsupported URL: {url}");
                None
            }
        },
        Err(_) => {
            warn!("Skipping invalid URL: {url}");
            None
        }
    }
}
