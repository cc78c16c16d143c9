//! Application state: the engine plus the status line derived from it.

use noughts::{GameState, GameStatus, Position};
use tracing::{debug, instrument};

/// Frontend state wrapping the rules engine.
pub struct App {
    game: GameState,
    banner: String,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        let game = GameState::new();
        let banner = turn_message(&game);
        Self { game, banner }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the current status banner.
    pub fn banner(&self) -> &str {
        &self.banner
    }

    /// Handles a cell selection from the input layer.
    ///
    /// Each distinct user action calls the engine exactly once. Rejected
    /// moves (occupied cell, decided game) are logged and ignored; the
    /// engine re-validates even though occupied cells are rendered as such.
    #[instrument(skip(self))]
    pub fn select(&mut self, pos: Position) {
        match self.game.apply_move(pos) {
            Ok(GameStatus::InProgress) => self.banner = turn_message(&self.game),
            Ok(GameStatus::Won(mark)) => {
                debug!(board = %self.game.board(), "Game won");
                self.banner = format!("{mark} wins! Press 'r' to restart or 'q' to quit.");
            }
            Ok(GameStatus::Draw) => {
                debug!(board = %self.game.board(), "Game drawn");
                self.banner = "Draw! Press 'r' to restart or 'q' to quit.".to_string();
            }
            Err(e) => debug!(error = %e, "Move ignored"),
        }
    }

    /// Restarts the game and re-syncs all visuals.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.banner = turn_message(&self.game);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn turn_message(game: &GameState) -> String {
    format!(
        "Player {}'s turn. Press 1-9 to place a mark.",
        game.current_turn()
    )
}
