//! Mark balance invariant: X moves first, sides alternate.

use super::Invariant;
use crate::game::GameState;
use crate::types::Mark;

/// Invariant: X count minus O count is 0 or 1.
///
/// X always moves first and the sides alternate strictly, so at any point
/// X has placed either as many marks as O or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);

        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X moves first, so X count minus O count is 0 or 1"
    }
}
