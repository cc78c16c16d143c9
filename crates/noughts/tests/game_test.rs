//! Tests for game state, turn management, and terminal detection.

use noughts::{GameState, GameStatus, Mark, MoveError, Position, WINNING_LINES};
use strum::IntoEnumIterator;

/// X wins the top row: X@0, O@3, X@1, O@4, X@2.
fn top_row_win() -> GameState {
    let mut game = GameState::new();
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ] {
        game.apply_move(pos).unwrap();
    }
    game
}

#[test]
fn test_fresh_game() {
    let game = GameState::new();
    assert_eq!(game.current_turn(), Mark::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(game.board().cells().iter().all(|c| *c == noughts::Cell::Empty));
}

#[test]
fn test_turn_alternates_on_non_terminal_moves() {
    let mut game = GameState::new();
    let moves = [
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
        Position::TopRight,
        Position::MiddleLeft,
    ];

    for (n, pos) in moves.iter().enumerate() {
        // Nth move (0-indexed): X on even, O on odd
        let expected = if n % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(game.current_turn(), expected);

        let status = game.apply_move(*pos).unwrap();
        assert_eq!(status, GameStatus::InProgress);
    }

    assert_eq!(game.current_turn(), Mark::O);
}

#[test]
fn test_top_row_win_scenario() {
    let game = top_row_win();
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_winning_move_freezes_turn() {
    let game = top_row_win();
    // The winning side's mark is the one reported; the turn never flipped
    assert_eq!(game.current_turn(), Mark::X);
}

#[test]
fn test_apply_move_returns_resulting_status() {
    let mut game = GameState::new();
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
    ] {
        assert_eq!(game.apply_move(pos).unwrap(), GameStatus::InProgress);
    }
    assert_eq!(
        game.apply_move(Position::TopRight).unwrap(),
        GameStatus::Won(Mark::X)
    );
}

#[test]
fn test_draw_scenario() {
    // X O X / X O O / O X X - full board, no line for either side
    let mut game = GameState::new();
    let moves = [
        Position::TopLeft,      // X
        Position::Center,       // O
        Position::TopRight,     // X
        Position::TopCenter,    // O
        Position::MiddleLeft,   // X
        Position::MiddleRight,  // O
        Position::BottomCenter, // X
        Position::BottomLeft,   // O
        Position::BottomRight,  // X
    ];

    for pos in &moves[..8] {
        assert_eq!(game.apply_move(*pos).unwrap(), GameStatus::InProgress);
    }
    assert_eq!(
        game.apply_move(Position::BottomRight).unwrap(),
        GameStatus::Draw
    );
    assert_eq!(game.status(), GameStatus::Draw);
    // The drawing side's turn is frozen
    assert_eq!(game.current_turn(), Mark::X);
}

#[test]
fn test_occupied_cell_rejected() {
    let mut game = GameState::new();
    game.apply_move(Position::TopLeft).unwrap();

    let board_before = game.board().clone();
    let result = game.apply_move(Position::TopLeft);

    assert_eq!(result, Err(MoveError::Occupied(Position::TopLeft)));
    // Board unchanged, turn still O
    assert_eq!(game.board(), &board_before);
    assert_eq!(game.current_turn(), Mark::O);
}

#[test]
fn test_moves_after_win_rejected() {
    let mut game = top_row_win();
    let board_before = game.board().clone();

    let open: Vec<_> = Position::iter()
        .filter(|pos| game.board().is_empty(*pos))
        .collect();
    for pos in open {
        assert_eq!(game.apply_move(pos), Err(MoveError::GameOver));
    }

    // Repeated attempts never change board or turn
    assert_eq!(game.board(), &board_before);
    assert_eq!(game.current_turn(), Mark::X);
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_win_detection_all_lines() {
    for line in WINNING_LINES {
        let mut game = GameState::new();
        let mut spare = Position::iter().filter(|pos| !line.contains(pos));
        let o_moves = [spare.next().unwrap(), spare.next().unwrap()];

        // X fills the line with legal alternating O moves elsewhere
        assert_eq!(game.apply_move(line[0]).unwrap(), GameStatus::InProgress);
        assert_eq!(game.apply_move(o_moves[0]).unwrap(), GameStatus::InProgress);
        assert_eq!(game.apply_move(line[1]).unwrap(), GameStatus::InProgress);
        assert_eq!(game.apply_move(o_moves[1]).unwrap(), GameStatus::InProgress);

        // The move completing the line wins immediately
        assert_eq!(game.apply_move(line[2]).unwrap(), GameStatus::Won(Mark::X));
    }
}

#[test]
fn test_status_is_a_pure_query() {
    let mut game = GameState::new();
    game.apply_move(Position::Center).unwrap();

    let snapshot = game.clone();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game, snapshot);
}

#[test]
fn test_reset_after_win() {
    let mut game = top_row_win();
    game.reset();

    assert_eq!(game.current_turn(), Mark::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(Position::iter().all(|pos| game.board().is_empty(pos)));
}

#[test]
fn test_reset_mid_game() {
    let mut game = GameState::new();
    game.apply_move(Position::Center).unwrap();
    game.apply_move(Position::TopLeft).unwrap();

    game.reset();

    assert_eq!(game, GameState::new());
}

#[test]
fn test_independent_game_instances() {
    let mut a = GameState::new();
    let b = GameState::new();

    a.apply_move(Position::Center).unwrap();

    // No shared state between games
    assert!(b.board().is_empty(Position::Center));
    assert_eq!(b.current_turn(), Mark::X);
}

#[test]
fn test_status_serializes_with_winner() {
    let game = top_row_win();
    let json = serde_json::to_value(game.status()).unwrap();
    assert_eq!(json, serde_json::json!({ "Won": "X" }));
}
