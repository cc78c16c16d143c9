//! Noughts - pure tic-tac-toe game logic.
//!
//! This crate is the rules engine for a two-player 3x3 grid game: it owns
//! the board and the turn, enforces move legality, and reports win/draw
//! outcomes. It contains no rendering or input handling.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Cell`], [`Board`], [`GameStatus`] - pure data.
//! - **Engine**: [`GameState`] - the single mutation authority. All changes
//!   go through [`GameState::apply_move`] and [`GameState::reset`].
//! - **Rules**: [`rules`] - pure win/draw detection over the board.
//! - **Contracts**: [`MoveContract`] - Hoare-style pre/postconditions that
//!   validate moves and, in debug builds, verify board invariants.
//!
//! # Presentation contract
//!
//! A frontend drives the engine as follows: translate each user action on a
//! cell into exactly one [`GameState::apply_move`] call, read the returned
//! [`GameStatus`], and on `InProgress` refresh the turn indicator from
//! [`GameState::current_turn`]; on `Won` or `Draw` show a banner and stop
//! translating cell input until a restart action calls [`GameState::reset`].
//! Rejected moves are recoverable no-ops - the engine re-validates even when
//! the frontend already disables occupied cells.
//!
//! # Example
//!
//! ```
//! use noughts::{GameState, GameStatus, Mark, Position};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.current_turn(), Mark::X);
//!
//! let status = game.apply_move(Position::Center)?;
//! assert_eq!(status, GameStatus::InProgress);
//! assert_eq!(game.current_turn(), Mark::O);
//! # Ok::<(), noughts::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod game;
mod invariants;
mod position;
pub mod rules;
mod types;

pub use contracts::{CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract};
pub use error::MoveError;
pub use game::GameState;
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    SingleWinnerInvariant, TurnParityInvariant,
};
pub use position::Position;
pub use rules::WINNING_LINES;
pub use types::{Board, Cell, GameStatus, Mark};
