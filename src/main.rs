//! Noughts - unified CLI
//!
//! Terminal tic-tac-toe and a headless move runner.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::cli::{Cli, Command};
use noughts::{NoughtsConfig, script, tui};
use noughts_core::GameEngine;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = NoughtsConfig::load_or_default(Some(cli.config.as_path()))?;

    match cli.command {
        Command::Play { x_name, o_name } => tui::run_tui(config, x_name, o_name),
        Command::Script {
            x_name,
            o_name,
            json,
            moves,
        } => run_script(&config, &x_name, &o_name, json, &moves),
    }
}

/// Play the given moves and print one line per move.
#[instrument(skip(config, moves), fields(move_count = moves.len()))]
fn run_script(
    config: &NoughtsConfig,
    x_name: &str,
    o_name: &str,
    json: bool,
    moves: &[String],
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let moves = moves
        .iter()
        .map(|text| script::parse_move(text))
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid move list")?;

    let mut engine = GameEngine::new();
    engine.start_round(config.name_for_x(x_name), config.name_for_o(o_name));

    info!("Running scripted moves");
    let steps = script::run_moves(&mut engine, &moves);

    let stdout = std::io::stdout();
    script::write_steps(&mut stdout.lock(), &steps, json)?;
    Ok(())
}
