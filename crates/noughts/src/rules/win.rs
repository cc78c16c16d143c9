//! Win detection logic.

use crate::position::Position;
use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// The 8 fixed lines that decide the game: 3 rows, 3 columns, 2 diagonals.
///
/// Static configuration, not mutable state.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark occupies all three cells of any
/// winning line, `None` otherwise. Under legal play at most one mark can
/// hold a line, so the first match decides.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in WINNING_LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return match cell {
                Cell::Marked(mark) => Some(mark),
                Cell::Empty => None,
            };
        }
    }

    None
}
