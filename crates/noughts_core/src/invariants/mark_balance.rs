//! Mark balance: X moves first and turns alternate.

use super::Invariant;
use crate::engine::{Round, RoundState};
use crate::types::Mark;
use tracing::warn;

/// Invariant: X has placed as many marks as O, or one more.
///
/// While the round is in progress the turn belongs to X exactly when the
/// counts are equal.
pub struct MarkBalanceInvariant;

impl Invariant<Round> for MarkBalanceInvariant {
    fn holds(round: &Round) -> bool {
        let x_count = round.board().count(Mark::X);
        let o_count = round.board().count(Mark::O);

        if x_count != o_count && x_count != o_count + 1 {
            warn!(x_count, o_count, "Mark counts out of balance");
            return false;
        }

        match round.state() {
            RoundState::InProgress => {
                let expected = if x_count == o_count { Mark::X } else { Mark::O };
                round.turn() == expected
            }
            RoundState::Over(_) => true,
        }
    }

    fn description() -> &'static str {
        "X moves first and marks alternate (X count - O count is 0 or 1)"
    }
}
