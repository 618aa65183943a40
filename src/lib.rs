//! Noughts - two-player tic-tac-toe.
//!
//! The game rules live in [`noughts_core`]. This crate is the presentation
//! around them.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for default names and logging
//! - **Presenter**: marks and results to text (`"[X] Ann wins"`, `"draw"`)
//! - **TUI**: name entry and the board, driven by keys and mouse clicks
//! - **Script**: headless play for a list of `row,col` moves
//!
//! # Example
//!
//! ```
//! use noughts::script::run_moves;
//! use noughts_core::{GameEngine, MarkResult};
//!
//! let mut engine = GameEngine::new();
//! engine.start_round("Ann", "Bo");
//! let steps = run_moves(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
//!
//! assert!(matches!(steps[4].result, MarkResult::Win { .. }));
//! assert_eq!(steps[4].message, "[X] Ann wins on (0, 0) (0, 1) (0, 2)");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod presenter;
pub mod script;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, NoughtsConfig};

// Crate-level exports - Script runner
pub use script::{ScriptError, ScriptStep};
