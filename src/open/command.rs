//! Opener backed by a system command.

use log::warn;
use url::Url;

use super::{OpenOptions, UrlOpener};
use crate::config::DEFAULT_OPENER;

/// Opens URLs by running `program [args...] <url>`.
///
/// Success is the command's exit status. `universal_links_only` cannot be
/// honoured by a desktop handler and is ignored.
#[derive(Debug, Clone)]
pub struct CommandOpener {
    program: String,
    args: Vec<String>,
}

impl CommandOpener {
    /// Uses `program` with no extra arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Adds an argument placed before the URL.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// The platform's default URL handler (`open` on macOS, `xdg-open` elsewhere).
    pub fn system() -> Self {
        Self::new(DEFAULT_OPENER)
    }
}

impl UrlOpener for CommandOpener {
    async fn open(&self, url: &Url, _options: &OpenOptions) -> bool {
        match tokio::process::Command::new(&self.program)
            .args(&self.args)
            .arg(url.as_str())
            .status()
            .await
        {
            Ok(status) => status.success(),
            Err(e) => {
                warn!("Failed to run opener '{}': {}", self.program, e);
                false
            }
        }
    }
}
