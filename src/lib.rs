//! Tic-tac-toe game model.
//!
//! The authoritative board and turn state for a point-and-click tic-tac-toe
//! frontend. The frontend owns pixels and click events; this crate owns the
//! rules: which presses count, whose turn it is, and when the game ends.
//!
//! Stray input (clicks outside the grid, on occupied squares, or after the
//! game has ended) is dropped with a diagnostic rather than surfaced as an
//! error, so a frontend can forward every click unfiltered.
//!
//! # Example
//!
//! ```
//! use ttt_core::{Game, GameState, Mark};
//!
//! let mut game = Game::new();
//! game.press_at_location(0, 0);
//! assert_eq!(game.mark_at_location(0, 0), Ok(Mark::X));
//! assert_eq!(game.game_state(), GameState::OTurn);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod rules;
mod types;

// Crate-level exports - game engine
pub use game::Game;

// Crate-level exports - rule evaluation
pub use rules::{is_full, mark_has_line, winning_mark};

// Crate-level exports - domain types
pub use types::{Board, GameState, Location, Mark, OutOfBounds};
