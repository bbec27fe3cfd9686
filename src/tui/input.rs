//! Keyboard helpers: cursor movement and digit keys.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// Moves cursor based on arrow keys. Edges stop the cursor.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up if row > 0 => (row - 1, col),
        KeyCode::Down if row < 2 => (row + 1, col),
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Right if col < 2 => (row, col + 1),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps keys `1`-`9` to cells 0-8, laid out like the board.
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| (digit as usize).checked_sub(1))
            .filter(|cell| *cell < 9),
        _ => None,
    }
}
