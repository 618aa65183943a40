//! Win detection.

use crate::board::Board;
use crate::line::Line;
use crate::types::{Cell, Coord, Mark};
use tracing::{debug, instrument};

/// Finds the line completed by `mark` at `at`.
///
/// Only the lines through `at` can have been completed by the move, so at
/// most four lines are inspected, in the order row, column, main diagonal,
/// anti-diagonal. The first full line wins.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, at: Coord, mark: Mark) -> Option<Line> {
    let found = Line::through(at).find(|line| is_complete(board, line, mark));
    if let Some(line) = &found {
        debug!(kind = ?line.kind(), "Line completed");
    }
    found
}

/// Scans all 8 lines for one held entirely by a single mark.
///
/// Used where no move is known, such as checking a board from scratch.
#[instrument(skip(board))]
pub fn completed_line(board: &Board) -> Option<(Mark, Line)> {
    Line::all().find_map(|line| match board.line(&line) {
        [Cell::Marked(mark), ..] if is_complete(board, &line, mark) => Some((mark, line)),
        _ => None,
    })
}

fn is_complete(board: &Board, line: &Line, mark: Mark) -> bool {
    board
        .line(line)
        .iter()
        .all(|cell| *cell == Cell::Marked(mark))
}
