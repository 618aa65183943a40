//! Keyboard helpers for board navigation.

use crossterm::event::KeyCode;
use noughts_core::Coord;

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left => col.checked_sub(1).map(|col| (row, col)),
        KeyCode::Right => Some((row, col + 1)),
        KeyCode::Up => row.checked_sub(1).map(|row| (row, col)),
        KeyCode::Down => Some((row + 1, col)),
        _ => None,
    };
    target
        .and_then(|(row, col)| Coord::new(row, col))
        .unwrap_or(cursor)
}

/// Maps the number keys 1-9 to cells in reading order.
pub fn digit_cell(c: char) -> Option<Coord> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Coord::from_index)
}
