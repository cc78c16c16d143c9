//! Turn parity invariant: the stored turn matches the mark counts.

use super::Invariant;
use crate::game::GameState;
use crate::types::{GameStatus, Mark};

/// Invariant: while the game is in progress, the turn follows the counts.
///
/// Equal mark counts mean X is to move; X ahead by one means O is to
/// move. A terminal move freezes the turn, so the check is vacuous once
/// the game is decided.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(game: &GameState) -> bool {
        if game.status() != GameStatus::InProgress {
            return true;
        }

        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);

        match game.current_turn() {
            Mark::X => x == o,
            Mark::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "While in progress, equal counts mean X to move; X ahead by one means O to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Cell;

    #[test]
    fn test_fresh_game_holds() {
        let game = GameState::new();
        assert!(TurnParityInvariant::holds(&game));
    }

    #[test]
    fn test_holds_while_alternating() {
        let mut game = GameState::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomLeft] {
            game.apply_move(pos).unwrap();
            assert!(TurnParityInvariant::holds(&game));
        }
    }

    #[test]
    fn test_frozen_turn_after_win_holds() {
        let mut game = GameState::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight, // X wins top row
        ] {
            game.apply_move(pos).unwrap();
        }

        // Turn stays on X even though X is ahead by one
        assert_eq!(game.current_turn(), Mark::X);
        assert!(TurnParityInvariant::holds(&game));
    }

    #[test]
    fn test_stale_turn_violates() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();

        // X placed a mark but the turn failed to flip
        game.turn = Mark::X;

        assert!(!TurnParityInvariant::holds(&game));
    }

    #[test]
    fn test_corrupted_count_violates() {
        let mut game = GameState::new();

        // Board shows an X move while the turn still claims X is up
        game.board.set(Position::TopLeft, Cell::Marked(Mark::X));

        assert!(!TurnParityInvariant::holds(&game));
    }
}
