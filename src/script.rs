//! Headless play: run a list of moves and report each result.

use crate::presenter;
use derive_more::{Display, Error};
use noughts_core::{GameEngine, MarkResult};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, instrument, warn};

/// One move and what the engine made of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptStep {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Engine result.
    pub result: MarkResult,
    /// Human-readable description of the result.
    pub message: String,
}

/// Parses a move written as `row,col`.
#[instrument]
pub fn parse_move(text: &str) -> Result<(usize, usize), ScriptError> {
    let (row, col) = text
        .split_once(',')
        .ok_or_else(|| ScriptError::new(format!("Expected row,col but got '{}'", text)))?;

    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| ScriptError::new(format!("Invalid number '{}' in '{}': {}", part, text, e)))
    };
    Ok((parse(row)?, parse(col)?))
}

/// Plays `moves` in order against `engine`.
///
/// Rejected moves are reported and skipped, just as a stray click would be.
#[instrument(skip(engine))]
pub fn run_moves(engine: &mut GameEngine, moves: &[(usize, usize)]) -> Vec<ScriptStep> {
    moves
        .iter()
        .map(|&(row, col)| {
            let result = engine.attempt_mark(row, col);
            if let MarkResult::Rejected(reason) = &result {
                warn!(row, col, %reason, "Scripted move rejected");
            }
            let message = presenter::describe(engine, &result);
            debug!(row, col, %message, "Scripted move played");
            ScriptStep {
                row,
                col,
                result,
                message,
            }
        })
        .collect()
}

/// Writes steps as text lines or as JSON lines.
#[instrument(skip(out, steps), fields(count = steps.len()))]
pub fn write_steps(
    out: &mut impl Write,
    steps: &[ScriptStep],
    json: bool,
) -> Result<(), ScriptError> {
    for step in steps {
        let line = if json {
            serde_json::to_string(step)
                .map_err(|e| ScriptError::new(format!("Failed to encode step: {}", e)))?
        } else {
            format!("{},{}: {}", step.row, step.col, step.message)
        };
        writeln!(out, "{}", line)
            .map_err(|e| ScriptError::new(format!("Failed to write output: {}", e)))?;
    }
    Ok(())
}

/// Script error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
