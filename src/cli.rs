//! Command-line interface for noughts.

use clap::{Parser, Subcommand};

/// Noughts - two-player tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults apply if it doesn't exist)
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Prefill the X name field
        #[arg(long)]
        x_name: Option<String>,

        /// Prefill the O name field
        #[arg(long)]
        o_name: Option<String>,
    },

    /// Play a list of moves without a UI and print each result
    Script {
        /// Name for X (blank uses the configured default)
        #[arg(long, default_value = "")]
        x_name: String,

        /// Name for O (blank uses the configured default)
        #[arg(long, default_value = "")]
        o_name: String,

        /// Print one JSON object per move instead of text
        #[arg(long)]
        json: bool,

        /// Moves as row,col pairs, e.g. 0,0 1,1 0,1
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
