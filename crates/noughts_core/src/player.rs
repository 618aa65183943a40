//! Players taking part in a round.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Name used for X when none is supplied.
pub const DEFAULT_X_NAME: &str = "Player 1";

/// Name used for O when none is supplied.
pub const DEFAULT_O_NAME: &str = "Player 2";

/// A named participant bound to one mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    mark: Mark,
    name: String,
    has_won: bool,
}

impl Player {
    /// Creates a player who has not won.
    pub fn new(mark: Mark, name: impl Into<String>) -> Self {
        Self {
            mark,
            name: name.into(),
            has_won: false,
        }
    }

    /// The player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this player won the current round.
    pub fn has_won(&self) -> bool {
        self.has_won
    }

    pub(crate) fn set_won(&mut self) {
        self.has_won = true;
    }

    pub(crate) fn reset_win(&mut self) {
        self.has_won = false;
    }
}
