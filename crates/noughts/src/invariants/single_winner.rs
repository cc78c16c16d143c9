//! Single winner invariant: both sides can never hold completed lines.

use super::Invariant;
use crate::game::GameState;
use crate::rules::WINNING_LINES;
use crate::types::{Cell, Mark};

/// Invariant: at most one side holds a completed line.
///
/// A move can only complete a line for the mark just placed, so under
/// legal play X and O never hold winning lines simultaneously. One side
/// completing two lines with a single move is legal and allowed.
pub struct SingleWinnerInvariant;

impl SingleWinnerInvariant {
    fn has_line(game: &GameState, mark: Mark) -> bool {
        WINNING_LINES.iter().any(|line| {
            line.iter()
                .all(|pos| game.board().get(*pos) == Cell::Marked(mark))
        })
    }
}

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(game: &GameState) -> bool {
        !(Self::has_line(game, Mark::X) && Self::has_line(game, Mark::O))
    }

    fn description() -> &'static str {
        "At most one side holds a completed line"
    }
}
