//! Maps engine state to text shown to players.
//!
//! The engine never formats anything for people; this module is the single
//! place that turns marks and results into words.

use noughts_core::{Cell, GameEngine, Mark, MarkResult, Outcome, RoundState};

/// Text for a draw.
pub const DRAW_TEXT: &str = "draw";

/// Glyph drawn for a cell.
pub fn glyph(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => " ",
        Cell::Marked(Mark::X) => "X",
        Cell::Marked(Mark::O) => "O",
    }
}

/// `"[X] Ann wins"`.
pub fn win_text(engine: &GameEngine, mark: Mark) -> String {
    format!("[{}] {} wins", mark, engine.player(mark).name())
}

/// `"Ann (X) to move"`.
pub fn turn_text(engine: &GameEngine) -> String {
    let player = engine.current_player();
    format!("{} ({}) to move", player.name(), player.mark())
}

/// One-line summary of the round as it stands.
pub fn status_text(engine: &GameEngine) -> String {
    match engine.state() {
        RoundState::InProgress => turn_text(engine),
        RoundState::Over(Outcome::Win { mark, .. }) => win_text(engine, *mark),
        RoundState::Over(Outcome::Draw) => DRAW_TEXT.to_string(),
    }
}

/// Describes the result of a mark, given the engine state after it.
pub fn describe(engine: &GameEngine, result: &MarkResult) -> String {
    match result {
        MarkResult::Rejected(reason) => format!("rejected: {}", reason),
        MarkResult::Continue(_) => turn_text(engine),
        MarkResult::Win { mark, cells } => {
            let cells: Vec<String> = cells.iter().map(ToString::to_string).collect();
            format!("{} on {}", win_text(engine, *mark), cells.join(" "))
        }
        MarkResult::Draw => DRAW_TEXT.to_string(),
    }
}
