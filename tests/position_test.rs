//! Tests for tic-tac-toe position enum.

use noughts::{Move, Mark, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_index_matches_declaration_order() {
    for (index, pos) in Position::ALL.iter().enumerate() {
        assert_eq!(pos.to_index(), index);
    }
}

#[test]
fn test_move_display_names_the_cell() {
    assert_eq!(Move::new(Mark::O, 2).to_string(), "O -> Top-right");
    assert_eq!(Position::BottomCenter.to_string(), "Bottom-center");
}
