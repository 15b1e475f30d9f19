//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Contents of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Unclaimed square.
    #[strum(serialize = "-")]
    Empty,
    /// Mark placed by player X (moves first).
    X,
    /// Mark placed by player O.
    O,
}

/// Current state of the game.
///
/// `XTurn` and `OTurn` are the only states that accept moves. The other
/// three are terminal; nothing but [`crate::Game::reset`] leaves them.
///
/// The `Display` labels are the status-banner strings shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GameState {
    /// X to move (initial state).
    #[strum(serialize = "X's turn")]
    XTurn,
    /// O to move.
    #[strum(serialize = "O's turn")]
    OTurn,
    /// X completed a line.
    #[strum(serialize = "X Wins!")]
    XWin,
    /// O completed a line.
    #[strum(serialize = "O Wins!")]
    OWin,
    /// Board filled with no line completed.
    #[strum(serialize = "Tie game")]
    Tie,
}

impl GameState {
    /// Returns true while the game still accepts moves.
    pub fn is_in_progress(self) -> bool {
        matches!(self, GameState::XTurn | GameState::OTurn)
    }

    /// Returns true once the game has ended in a win or a tie.
    pub fn is_terminal(self) -> bool {
        !self.is_in_progress()
    }
}

/// A validated coordinate on the board.
///
/// Row and column are zero-based. Constructing a `Location` proves both
/// coordinates are in range, so board access through one never re-validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    row: u8,
    col: u8,
}

impl Location {
    /// All nine locations in square-index order (left to right, top to bottom).
    pub const ALL: [Location; 9] = [
        Location::at(0, 0),
        Location::at(0, 1),
        Location::at(0, 2),
        Location::at(1, 0),
        Location::at(1, 1),
        Location::at(1, 2),
        Location::at(2, 0),
        Location::at(2, 1),
        Location::at(2, 2),
    ];

    // Callers uphold the bounds.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a location, or `None` if either coordinate is outside the grid.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < Board::NUM_ROWS && col < Board::NUM_COLS {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Creates a location from a flat square index (0-8).
    ///
    /// This is the layout click targets use in the frontend: square `i`
    /// maps to row `i / 3`, column `i % 3`.
    pub fn from_square_index(index: usize) -> Option<Self> {
        if index < Board::NUM_ROWS * Board::NUM_COLS {
            Self::new(index / Board::NUM_COLS, index % Board::NUM_COLS)
        } else {
            None
        }
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Flat row-major square index (0-8).
    pub fn square_index(self) -> usize {
        self.row as usize * Board::NUM_COLS + self.col as usize
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Mark; 9],
}

impl Board {
    /// Number of rows in the game board.
    pub const NUM_ROWS: usize = 3;

    /// Number of columns in the game board.
    pub const NUM_COLS: usize = 3;

    /// Creates a new board with every square empty.
    pub fn new() -> Self {
        Self {
            squares: [Mark::Empty; 9],
        }
    }

    /// Gets the mark at the given location.
    pub fn get(&self, location: Location) -> Mark {
        self.squares[location.square_index()]
    }

    /// Sets the mark at the given location.
    pub(crate) fn set(&mut self, location: Location, mark: Mark) {
        self.squares[location.square_index()] = mark;
    }

    /// Checks if the square at the location is empty.
    pub fn is_empty(&self, location: Location) -> bool {
        self.get(location) == Mark::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Mark; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..Self::NUM_ROWS {
            for col in 0..Self::NUM_COLS {
                let mark = self.squares[row * Self::NUM_COLS + col];
                result.push_str(&mark.to_string());
                if col < Self::NUM_COLS - 1 {
                    result.push('|');
                }
            }
            if row < Self::NUM_ROWS - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned when a read targets a square outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("location out of bounds: row = {row}, col = {col}")]
pub struct OutOfBounds {
    /// Row requested by the caller.
    pub row: usize,
    /// Column requested by the caller.
    pub col: usize,
}

impl std::error::Error for OutOfBounds {}
