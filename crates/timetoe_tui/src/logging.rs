//! File-backed tracing setup.

use crate::config::TuiConfig;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to the configured log file.
///
/// Logs go to a file so they never draw over the alternate screen.
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_logging(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}
