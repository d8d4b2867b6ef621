//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `safe_browsing` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use safe_browsing::app::{collect_urls, exit_code, summarize, EXIT_CLEAN, EXIT_ERROR};
use safe_browsing::config::Opt;
use safe_browsing::initialization::init_logger_with;
use safe_browsing::{check_and_open, CommandOpener, OpenOptions, SafeBrowsingClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load SAFE_BROWSING_* variables from .env (current dir, then next to the executable)
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = opt.lookup_config();
    if let Err(e) = config.validate() {
        eprintln!("safe_browsing error: {}", e);
        process::exit(EXIT_ERROR);
    }

    let urls = collect_urls(&opt.urls, opt.file.as_deref()).await?;
    if urls.is_empty() {
        eprintln!("safe_browsing error: no valid URLs to check");
        process::exit(EXIT_ERROR);
    }

    let client = SafeBrowsingClient::new(config).context("Failed to initialize HTTP client")?;

    if opt.open {
        if urls.len() != 1 {
            eprintln!("safe_browsing error: --open takes exactly one URL");
            process::exit(EXIT_ERROR);
        }
        let opener = CommandOpener::new(opt.opener.clone());
        let outcome = check_and_open(&client, &opener, &urls[0], &OpenOptions::default()).await;
        match outcome {
            Ok(true) => println!("✅ Opened {}", urls[0]),
            Ok(false) => {
                eprintln!("safe_browsing error: {} is clean but could not be opened", urls[0]);
                process::exit(EXIT_ERROR);
            }
            Err(e) => {
                let outcome = Err(e);
                for line in summarize(&outcome, 1) {
                    println!("{line}");
                }
                process::exit(exit_code(&outcome));
            }
        }
        return Ok(());
    }

    let outcome = client.check_urls(&urls).await;
    for line in summarize(&outcome, urls.len()) {
        println!("{line}");
    }
    let code = exit_code(&outcome);
    if code != EXIT_CLEAN {
        process::exit(code);
    }
    Ok(())
}
