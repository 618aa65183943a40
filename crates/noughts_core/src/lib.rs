//! Tic-tac-toe game logic.
//!
//! Two pieces make up the core:
//!
//! - **[`Board`]**: the 3x3 grid and its row, column and diagonal views.
//! - **[`GameEngine`]**: the round lifecycle. It owns one [`Round`],
//!   alternates turns, and decides wins and draws.
//!
//! Nothing here renders or formats text for players. A presentation layer
//! calls [`GameEngine::start_round`] and [`GameEngine::attempt_mark`] and
//! maps the returned [`MarkResult`] to whatever it shows.
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameEngine, Mark, MarkResult};
//!
//! let mut engine = GameEngine::new();
//! engine.start_round("Ann", "Bo");
//!
//! assert_eq!(engine.attempt_mark(1, 1), MarkResult::Continue(Mark::O));
//! assert!(!engine.attempt_mark(1, 1).is_accepted());
//! assert_eq!(engine.current_player().name(), "Bo");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod invariants;
mod line;
mod player;
pub mod rules;
mod types;

// Crate-level exports - Board
pub use board::Board;

// Crate-level exports - Engine
pub use engine::{GameEngine, MarkResult, Outcome, Rejection, Round, RoundState};

// Crate-level exports - Invariants
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    OutcomeConsistentInvariant, RoundInvariants,
};

// Crate-level exports - Lines
pub use line::{Line, LineKind};

// Crate-level exports - Players
pub use player::{DEFAULT_O_NAME, DEFAULT_X_NAME, Player};

// Crate-level exports - Domain types
pub use types::{Cell, Coord, Diagonal, Mark, OutOfBounds, SIZE};
