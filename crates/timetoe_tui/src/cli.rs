//! Command-line interface for timetoe.

use clap::Parser;
use std::path::PathBuf;

/// timetoe - tic-tac-toe with a clickable move history
#[derive(Parser, Debug, Default)]
#[command(name = "timetoe")]
#[command(about = "Tic-tac-toe in the terminal with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File to write logs to (overrides config)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "timetoe=trace" (overrides config; RUST_LOG wins)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Disable mouse capture
    #[arg(long)]
    pub no_mouse: bool,

    /// Hide square numbers on empty squares
    #[arg(long)]
    pub no_hints: bool,
}
