//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Kept apart from board
//! storage so the engine and the invariant checks share one definition.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{completed_line, winning_line};
