//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::error::MoveError;
use crate::game::GameState;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::position::Position;
use crate::types::{Cell, GameStatus};
use strum::IntoEnumIterator;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must not already be decided.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks that the game is still in progress.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.status() == GameStatus::InProgress {
            Ok(())
        } else {
            Err(MoveError::GameOver)
        }
    }
}

/// Precondition: The cell at the move's position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks that the target cell holds no mark.
    #[instrument(skip(game))]
    pub fn check(pos: &Position, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(*pos) {
            Ok(())
        } else {
            Err(MoveError::Occupied(*pos))
        }
    }
}

/// Composite precondition: a move is legal if the game is undecided and
/// the target cell is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(pos: &Position, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        CellIsEmpty::check(pos, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move application.
///
/// Preconditions:
/// - Game must be in progress
/// - Cell must be empty
///
/// Postconditions:
/// - Board remains monotonic: marks placed before the move are untouched
/// - Exactly one cell changed
/// - All board invariants hold
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(game: &GameState, action: &Position) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let mut changed = 0;
        for pos in Position::iter() {
            let old = before.board().get(pos);
            let new = after.board().get(pos);
            if old != new {
                if old != Cell::Empty {
                    return Err(MoveError::InvariantViolation(format!(
                        "cell at {pos} was overwritten"
                    )));
                }
                changed += 1;
            }
        }
        if changed != 1 {
            return Err(MoveError::InvariantViolation(format!(
                "{changed} cells changed in a single move"
            )));
        }

        BoardInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {descriptions}"))
        })
    }
}
