//! Command-line interface for strictly_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Tic-Tac-Toe - hot-seat tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Settings file holding the persisted theme (overrides config)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Log file path (overrides config)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
