//! Tests for the board coordinate type.

use ttt_core::{Board, Location};

#[test]
fn test_square_index() {
    assert_eq!(Location::new(0, 0).unwrap().square_index(), 0);
    assert_eq!(Location::new(1, 1).unwrap().square_index(), 4);
    assert_eq!(Location::new(2, 2).unwrap().square_index(), 8);
}

#[test]
fn test_from_square_index() {
    assert_eq!(Location::from_square_index(0), Location::new(0, 0));
    assert_eq!(Location::from_square_index(4), Location::new(1, 1));
    assert_eq!(Location::from_square_index(5), Location::new(1, 2));
    assert_eq!(Location::from_square_index(8), Location::new(2, 2));
    assert_eq!(Location::from_square_index(9), None);
}

#[test]
fn test_new_rejects_out_of_range() {
    assert_eq!(Location::new(Board::NUM_ROWS, 0), None);
    assert_eq!(Location::new(0, Board::NUM_COLS), None);
    assert_eq!(Location::new(5, 5), None);
}

#[test]
fn test_all_covers_the_board_in_order() {
    assert_eq!(Location::ALL.len(), Board::NUM_ROWS * Board::NUM_COLS);
    for (index, location) in Location::ALL.into_iter().enumerate() {
        assert_eq!(location.square_index(), index);
        assert_eq!(Location::from_square_index(index), Some(location));
    }
}

#[test]
fn test_display() {
    let location = Location::new(2, 1).unwrap();
    assert_eq!(location.to_string(), "(2, 1)");
    assert_eq!(location.row(), 2);
    assert_eq!(location.col(), 1);
}
