//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Location, Mark};

const LINES: [[Location; 3]; 8] = [
    // Rows
    [Location::at(0, 0), Location::at(0, 1), Location::at(0, 2)],
    [Location::at(1, 0), Location::at(1, 1), Location::at(1, 2)],
    [Location::at(2, 0), Location::at(2, 1), Location::at(2, 2)],
    // Columns
    [Location::at(0, 0), Location::at(1, 0), Location::at(2, 0)],
    [Location::at(0, 1), Location::at(1, 1), Location::at(2, 1)],
    [Location::at(0, 2), Location::at(1, 2), Location::at(2, 2)],
    // Diagonals
    [Location::at(0, 0), Location::at(1, 1), Location::at(2, 2)],
    [Location::at(2, 0), Location::at(1, 1), Location::at(0, 2)],
];

/// Checks whether `mark` occupies a complete line.
///
/// A line is any of the 3 rows, 3 columns, or 2 diagonals. `Mark::Empty`
/// never forms a line, even on an empty board.
pub fn mark_has_line(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    LINES
        .iter()
        .any(|line| line.iter().all(|&location| board.get(location) == mark))
}

/// Returns the mark holding a completed line, if any.
///
/// `X` is checked before `O`, so a corrupt board showing two complete
/// lines reports `X`. In reachable play only the mark just placed can
/// have completed a line.
pub fn winning_mark(board: &Board) -> Option<Mark> {
    if mark_has_line(board, Mark::X) {
        Some(Mark::X)
    } else if mark_has_line(board, Mark::O) {
        Some(Mark::O)
    } else {
        None
    }
}
