//! timetoe - tic-tac-toe with time travel in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use timetoe_tui::{Cli, TuiConfig, init_logging, run};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(&cli).context("Failed to load configuration")?;
    init_logging(&config)?;

    info!(?config, "Configuration resolved");
    run(&config)
}
