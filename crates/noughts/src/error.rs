//! Errors raised when a move cannot be applied.

use crate::position::Position;

/// Error returned by move application.
///
/// Every variant is recoverable: a rejected move leaves the game state
/// unchanged, and callers may simply ignore the action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position already holds a mark.
    #[display("Cell at {} is already occupied", _0)]
    Occupied(Position),

    /// The game has already been decided.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
