//! Round lifecycle, turn alternation and outcome detection.

use super::board::Board;
use super::invariants::{InvariantSet, RoundInvariants};
use super::player::{DEFAULT_O_NAME, DEFAULT_X_NAME, Player};
use super::rules;
use super::types::{Coord, Mark, SIZE};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// `mark` completed the line through `cells`.
    Win {
        /// Winning mark.
        mark: Mark,
        /// The completed line, in natural order.
        cells: [Coord; SIZE],
    },
    /// Board filled with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winning mark if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            Outcome::Draw => None,
        }
    }
}

/// Where a round is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    /// Marks are being accepted.
    InProgress,
    /// Terminal until the next round starts.
    Over(Outcome),
}

/// Why a mark was refused. Every rejection leaves the round untouched.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::Error,
)]
pub enum Rejection {
    /// The coordinates do not name a cell.
    #[display("({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The cell already holds a mark.
    #[display("cell {at} is already marked")]
    Occupied {
        /// The occupied cell.
        at: Coord,
    },
    /// The round has already been won or drawn.
    #[display("the round is over")]
    RoundOver,
}

/// Result of [`GameEngine::attempt_mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkResult {
    /// Nothing changed.
    Rejected(Rejection),
    /// Mark placed; the turn passes to the carried mark.
    Continue(Mark),
    /// Mark placed and completed a line.
    Win {
        /// Winning mark.
        mark: Mark,
        /// The completed line, in natural order.
        cells: [Coord; SIZE],
    },
    /// Mark placed and filled the board with no line.
    Draw,
}

impl MarkResult {
    /// Checks if the mark was placed.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MarkResult::Rejected(_))
    }
}

/// Mutable state of one game: board, players, turn and outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    board: Board,
    players: [Player; 2],
    turn: Mark,
    state: RoundState,
}

impl Round {
    fn new(name_x: String, name_o: String) -> Self {
        Self {
            board: Board::new(),
            players: [Player::new(Mark::X, name_x), Player::new(Mark::O, name_o)],
            turn: Mark::X,
            state: RoundState::InProgress,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player holding `mark`.
    pub fn player(&self, mark: Mark) -> &Player {
        &self.players[slot(mark)]
    }

    /// Mark whose turn it is. After the round ends this stays on the mark
    /// that made the final move.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Lifecycle state.
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Checks if the round has been won or drawn.
    pub fn is_over(&self) -> bool {
        matches!(self.state, RoundState::Over(_))
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn player_mut(&mut self, mark: Mark) -> &mut Player {
        &mut self.players[slot(mark)]
    }
}

fn slot(mark: Mark) -> usize {
    match mark {
        Mark::X => 0,
        Mark::O => 1,
    }
}

/// Tic-tac-toe game engine.
///
/// Owns exactly one [`Round`]. Instances are independent; nothing is shared
/// between engines.
#[derive(Debug, Clone)]
pub struct GameEngine {
    round: Round,
}

impl GameEngine {
    /// Creates an engine with a round in progress between the default players.
    #[instrument]
    pub fn new() -> Self {
        Self {
            round: Round::new(DEFAULT_X_NAME.to_string(), DEFAULT_O_NAME.to_string()),
        }
    }

    /// Starts a fresh round, abandoning any round in progress.
    ///
    /// X moves first. Never fails.
    #[instrument(skip_all)]
    pub fn start_round(&mut self, name_x: impl Into<String>, name_o: impl Into<String>) {
        let name_x = name_x.into();
        let name_o = name_o.into();
        info!(%name_x, %name_o, "Round started");
        self.round = Round::new(name_x, name_o);
    }

    /// Starts a fresh round with the same players.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.round.board.reset();
        for player in &mut self.round.players {
            player.reset_win();
        }
        self.round.turn = Mark::X;
        self.round.state = RoundState::InProgress;
        info!("Round restarted");
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Rejected without any change if the coordinates are off the board, the
    /// round is over, or the cell is taken. Otherwise the mark is placed and
    /// the result reports a win, a draw, or the mark that moves next. A win
    /// is checked before a full board, so a winning ninth mark is a win.
    #[instrument(skip(self), fields(turn = %self.round.turn))]
    pub fn attempt_mark(&mut self, row: usize, col: usize) -> MarkResult {
        let Some(at) = Coord::new(row, col) else {
            return reject(Rejection::OutOfBounds { row, col });
        };
        if self.round.is_over() {
            return reject(Rejection::RoundOver);
        }
        if !self.round.board.is_empty_at(at) {
            return reject(Rejection::Occupied { at });
        }

        let mark = self.round.turn;
        self.round.board.set(at, mark);

        let result = if let Some(line) = rules::winning_line(&self.round.board, at, mark) {
            let cells = line.coords();
            self.round.player_mut(mark).set_won();
            self.round.state = RoundState::Over(Outcome::Win { mark, cells });
            info!(%mark, ?cells, "Round won");
            MarkResult::Win { mark, cells }
        } else if self.round.board.is_full() {
            self.round.state = RoundState::Over(Outcome::Draw);
            info!("Round drawn");
            MarkResult::Draw
        } else {
            self.round.turn = mark.opponent();
            debug!(next = %self.round.turn, "Turn passed");
            MarkResult::Continue(self.round.turn)
        };

        debug_assert!(
            RoundInvariants::check_all(&self.round).is_ok(),
            "round invariant violated after mark at {at}"
        );
        result
    }

    /// The player whose turn it is. Only meaningful while in progress.
    pub fn current_player(&self) -> &Player {
        self.round.player(self.round.turn)
    }

    /// The player holding `mark`.
    pub fn player(&self, mark: Mark) -> &Player {
        self.round.player(mark)
    }

    /// The current round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// The board of the current round.
    pub fn board(&self) -> &Board {
        self.round.board()
    }

    /// Lifecycle state of the current round.
    pub fn state(&self) -> &RoundState {
        self.round.state()
    }

    /// Checks if the current round has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.round.is_over()
    }

    /// The completed line, if the round was won.
    pub fn winning_cells(&self) -> Option<[Coord; SIZE]> {
        match self.round.state {
            RoundState::Over(Outcome::Win { cells, .. }) => Some(cells),
            _ => None,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn reject(reason: Rejection) -> MarkResult {
    debug!(%reason, "Mark rejected");
    MarkResult::Rejected(reason)
}
