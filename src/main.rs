//! Contact Book - Main entry point
//!
//! Starts an interactive session on stdin/stdout. Logs go to stderr so they
//! never interleave with the prompt.

use anyhow::{Context, Result};
use contact_book::{Config, JsonFileRepository, Session};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Using data file {:?}", config.data_file);

    let repository = JsonFileRepository::new(config.data_file.clone());
    let mut session = Session::start(repository)
        .with_context(|| format!("Failed to load address book from {:?}", config.data_file))?;

    let stdin = io::stdin();
    session
        .run(stdin.lock(), io::stdout().lock())
        .context("Session ended with an error")?;

    info!("Contact book shutdown complete");
    Ok(())
}
