//! Blocking verdicts for synchronous callers.
//!
//! The lookup runs on a Tokio runtime; the calling thread waits on a one-shot
//! channel that the lookup completes. The handle must belong to a runtime
//! that some other thread is driving: a multi-thread runtime, or a
//! `current_thread` runtime whose `block_on` is running elsewhere. An idle
//! `current_thread` runtime never polls the lookup and the wait never ends.
//!
//! Never call these from within an asynchronous context (inside `block_on`
//! or an async task). Tokio detects that case and panics.

use log::debug;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use url::Url;

use crate::error_handling::SafeBrowsingError;
use crate::lookup::SafeBrowsingClient;

/// Checks `url` and blocks until the verdict arrives.
///
/// Returns `Ok(true)` when the URL is clean.
///
/// # Errors
///
/// Every non-clean outcome: lookup errors, `ThreatFound`, `Api`. A lookup
/// task that ends without reporting (e.g. runtime shut down) yields
/// `Transport(None)`.
///
/// # Panics
///
/// Panics when called from within an asynchronous execution context.
pub fn is_safe(
    handle: &Handle,
    client: &SafeBrowsingClient,
    url: &Url,
) -> Result<bool, SafeBrowsingError> {
    let (tx, rx) = oneshot::channel();
    {
        let _runtime = handle.enter();
        client.check_urls_detached(vec![url.clone()], move |result| {
            let _ = tx.send(result);
        });
    }

    match rx.blocking_recv() {
        Ok(result) => result?.into_verdict().map(|()| true),
        Err(_) => Err(SafeBrowsingError::Transport(None)),
    }
}

/// Like [`is_safe`], collapsing every non-clean outcome to `false`.
pub fn is_safe_lossy(handle: &Handle, client: &SafeBrowsingClient, url: &Url) -> bool {
    is_safe(handle, client, url).unwrap_or_else(|e| {
        debug!("{} is not considered safe: {}", url, e);
        false
    })
}
