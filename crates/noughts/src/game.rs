//! Game state and turn management.

use crate::contracts::{Contract, MoveContract};
use crate::error::MoveError;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Cell, GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Authoritative board and turn state for one game.
///
/// A `GameState` is an owned value: callers may hold any number of
/// independent games, and nothing here is process-global. All mutation
/// flows through [`GameState::apply_move`] and [`GameState::reset`];
/// the status is computed from the board on demand and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Mark,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
        }
    }

    /// Reinitializes the game wholesale: all cells empty, X to move.
    ///
    /// There is no partial-undo path; callers re-sync their visuals from
    /// scratch after a reset.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that will be placed next.
    ///
    /// A terminal move freezes the turn, so after a win or draw this still
    /// names the side that ended the game.
    pub fn current_turn(&self) -> Mark {
        self.turn
    }

    /// Computes the game status from the board.
    ///
    /// Pure query: win check over the 8 winning lines first, then the
    /// full-board draw check, otherwise in progress.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = rules::check_winner(&self.board) {
            GameStatus::Won(winner)
        } else if rules::is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Places the current turn's mark at the given position.
    ///
    /// Returns the status resulting from the move. The turn flips to the
    /// other side only when the game continues; a winning or drawing move
    /// leaves the turn on the side that made it.
    ///
    /// Contract enforcement: preconditions are checked always,
    /// postconditions in debug builds only.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game is already decided, or
    /// [`MoveError::Occupied`] if the cell holds a mark. Rejected moves
    /// leave the state unchanged.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        MoveContract::pre(self, &pos)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(pos, Cell::Marked(self.turn));

        let status = self.status();
        if status == GameStatus::InProgress {
            self.turn = self.turn.opponent();
        } else {
            debug!(%status, board = %self.board, "Game over");
        }

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(status)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
