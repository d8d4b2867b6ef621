//! Gating "open this URL" on a clean lookup.
//!
//! The opener and the in-app presenter are collaborators supplied by the host
//! application. Nothing here touches UI state; if the host needs its main
//! thread, its opener/presenter implementations redispatch.

mod command;

use std::collections::BTreeMap;
use std::future::Future;

use log::debug;
use url::Url;

use crate::error_handling::SafeBrowsingError;
use crate::lookup::SafeBrowsingClient;

pub use command::CommandOpener;

/// Options forwarded to a [`UrlOpener`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenOptions {
    /// Only open the URL if an installed app claims it as a universal link.
    pub universal_links_only: bool,
    /// Opener-specific options, passed through untouched.
    pub extra: BTreeMap<String, String>,
}

/// Opens URLs outside the application (browser, external app, ...).
pub trait UrlOpener: Send + Sync {
    /// Opens `url` and reports whether it was opened.
    fn open(&self, url: &Url, options: &OpenOptions) -> impl Future<Output = bool> + Send;
}

/// Shows a URL inside the application, e.g. an embedded browser view.
pub trait Presenter: Send + Sync {
    /// Presents `url`; resolves once it is on screen.
    fn present(&self, url: &Url) -> impl Future<Output = ()> + Send;
}

/// Looks `url` up and opens it only when the lookup is clean.
///
/// Returns whether the opener succeeded. The opener is never called for
/// threats or failed lookups.
///
/// # Errors
///
/// Any lookup error, plus `ThreatFound` and `Api` for non-clean results.
pub async fn check_and_open<O: UrlOpener>(
    client: &SafeBrowsingClient,
    opener: &O,
    url: &Url,
    options: &OpenOptions,
) -> Result<bool, SafeBrowsingError> {
    client.check_url(url).await?.into_verdict()?;
    let opened = opener.open(url, options).await;
    if !opened {
        debug!("Opener declined clean URL {}", url);
    }
    Ok(opened)
}

/// Opens a clean `url` as a universal link, falling back to `presenter`.
///
/// A clean URL that no app claims is not unsafe, so it is shown in-app
/// instead of leaving the application. Returns `Ok(true)` once the URL is
/// opened or presented.
///
/// # Errors
///
/// Same as [`check_and_open`]; the presenter is not used on errors.
pub async fn open_or_present<O: UrlOpener, P: Presenter>(
    client: &SafeBrowsingClient,
    opener: &O,
    presenter: &P,
    url: &Url,
) -> Result<bool, SafeBrowsingError> {
    let options = OpenOptions {
        universal_links_only: true,
        ..OpenOptions::default()
    };
    if check_and_open(client, opener, url, &options).await? {
        return Ok(true);
    }
    debug!("No universal link handler for {}, presenting in-app", url);
    presenter.present(url).await;
    Ok(true)
}
