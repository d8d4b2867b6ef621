//! URL input collection for the CLI.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use url::Url;

use super::url::validate_and_normalize_url;

/// Collects URLs from positional arguments followed by an optional file.
///
/// File lines are trimmed; blank lines and `#` comments are skipped. Invalid
/// URLs are logged and dropped.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub async fn collect_urls(args: &[String], file: Option<&Path>) -> Result<Vec<Url>> {
    let mut urls: Vec<Url> = args
        .iter()
        .filter_map(|arg| validate_and_normalize_url(arg))
        .collect();

    if let Some(path) = file {
        let handle = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open URL file {}", path.display()))?;
        let mut lines = BufReader::new(handle).lines();
        while let Some(line) = lines
            .next_line()
            .await
            .with_context(|| format!("Failed to read URL file {}", path.display()))?
        {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(url) = validate_and_normalize_url(line) {
                urls.push(url);
            }
        }
    }

    Ok(urls)
}
