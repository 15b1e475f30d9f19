//! The game engine: move validation, turn alternation, and game-over
//! detection on top of the board model.

use crate::rules;
use crate::types::{Board, GameState, Location, Mark, OutOfBounds};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Owns the authoritative board and game state. The board mutates only
/// through [`Game::press_at_location`] and [`Game::reset`]; every other
/// operation is a read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    state: GameState,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: GameState::XTurn,
        }
    }

    /// Clears the board and hands the first turn back to X.
    ///
    /// Unconditionally discards any game in progress. Idempotent.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.state = GameState::XTurn;
    }

    /// Reports a press on the square at `row`/`col` (both zero-based).
    ///
    /// The current player's mark is placed and the turn passes to the
    /// opponent, then the game state is re-evaluated for a win or tie.
    ///
    /// Presses outside the grid, on an occupied square, or after the game
    /// has ended are dropped with a diagnostic. A pointer frontend forwards
    /// every click, so stray input is expected and is not an error.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn press_at_location(&mut self, row: usize, col: usize) {
        let Some(location) = Location::new(row, col) else {
            warn!(row, col, "press outside the board ignored");
            return;
        };
        if !self.board.is_empty(location) {
            info!(row, col, "press on a non-empty square ignored");
            return;
        }
        match self.state {
            GameState::XTurn => {
                self.board.set(location, Mark::X);
                self.state = GameState::OTurn;
            }
            GameState::OTurn => {
                self.board.set(location, Mark::O);
                self.state = GameState::XTurn;
            }
            _ => {
                info!(row, col, "press after game over ignored");
                return;
            }
        }
        self.check_for_game_over();
    }

    /// Overwrites the turn state if the game is now over.
    fn check_for_game_over(&mut self) {
        if self.state.is_terminal() {
            return; // Game has been won already.
        }
        if rules::mark_has_line(&self.board, Mark::X) {
            self.state = GameState::XWin;
        } else if rules::mark_has_line(&self.board, Mark::O) {
            self.state = GameState::OWin;
        } else if rules::is_full(&self.board) {
            self.state = GameState::Tie;
        }
    }

    /// Returns the mark in the square at `row`/`col`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if either coordinate falls outside the grid.
    pub fn mark_at_location(&self, row: usize, col: usize) -> Result<Mark, OutOfBounds> {
        Location::new(row, col)
            .map(|location| self.board.get(location))
            .ok_or(OutOfBounds { row, col })
    }

    /// Returns the current game state.
    pub fn game_state(&self) -> GameState {
        self.state
    }

    /// Returns a read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
