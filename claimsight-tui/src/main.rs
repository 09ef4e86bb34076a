//! Claimsight: insurance claim amount prediction.
//!
//! Terminal entry point.

use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use claimsight_core::{defaults, AppConfig};
use claimsight_tui::App;

const LOG_FILE: &str = "claimsight.log";

fn main() -> Result<()> {
    // Logs go to a file: writing to the terminal would corrupt the
    // alternate-screen TUI.
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)
        .with_context(|| format!("opening log file {LOG_FILE}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    tracing::info!("starting claimsight");

    let config = AppConfig::load(Path::new(defaults::DEFAULT_CONFIG_FILENAME))?;
    let mut app = App::new(config)?;
    app.run()?;

    tracing::info!("claimsight shut down");
    Ok(())
}
