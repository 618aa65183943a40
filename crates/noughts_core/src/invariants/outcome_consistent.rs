//! Outcome consistency: the recorded state matches the board.

use super::Invariant;
use crate::engine::{Outcome, Round, RoundState};
use crate::rules;
use crate::types::{Cell, Mark};
use strum::IntoEnumIterator;

/// Invariant: the round's state agrees with what is on the board.
///
/// - `Over(Win)` names three cells that all hold the winner's mark, and only
///   the winner has `has_won` set.
/// - `Over(Draw)` means a full board with no completed line.
/// - `InProgress` means no completed line and at least one empty cell.
pub struct OutcomeConsistentInvariant;

impl Invariant<Round> for OutcomeConsistentInvariant {
    fn holds(round: &Round) -> bool {
        let board = round.board();
        match round.state() {
            RoundState::InProgress => {
                Mark::iter().all(|mark| !round.player(mark).has_won())
                    && rules::completed_line(board).is_none()
                    && !board.is_full()
            }
            RoundState::Over(Outcome::Draw) => {
                Mark::iter().all(|mark| !round.player(mark).has_won()) && rules::is_draw(board)
            }
            RoundState::Over(Outcome::Win { mark, cells }) => {
                cells.iter().all(|c| board.get(*c) == Cell::Marked(*mark))
                    && round.player(*mark).has_won()
                    && !round.player(mark.opponent()).has_won()
            }
        }
    }

    fn description() -> &'static str {
        "Round state matches the board (win cells hold the winner, draw means full with no line)"
    }
}
