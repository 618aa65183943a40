//! Draw detection.

use super::win::completed_line;
use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && completed_line(board).is_none()
}
