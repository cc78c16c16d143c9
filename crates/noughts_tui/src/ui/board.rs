//! Board rendering.

use noughts::{Cell, GameState, GameStatus, Mark, Position};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

const ROWS: [[Position; 3]; 3] = [
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
];

/// Renders the 3x3 board.
pub fn render_board(f: &mut Frame, area: Rect, game: &GameState) {
    let board_area = center_rect(area, 40, 12);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], game, ROWS[0]);
    render_separator(f, rows[1]);
    render_row(f, rows[2], game, ROWS[1]);
    render_separator(f, rows[3]);
    render_row(f, rows[4], game, ROWS[2]);
}

fn render_row(f: &mut Frame, area: Rect, game: &GameState, row: [Position; 3]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_cell(f, cols[0], game, row[0]);
    render_vertical_sep(f, cols[1]);
    render_cell(f, cols[2], game, row[1]);
    render_vertical_sep(f, cols[3]);
    render_cell(f, cols[4], game, row[2]);
}

fn render_cell(f: &mut Frame, area: Rect, game: &GameState, pos: Position) {
    let (text, style) = match game.board().get(pos) {
        // Empty cells preview the mark about to be placed, the terminal
        // analog of the original hover indicator
        Cell::Empty => (
            format!("{}", pos.to_index() + 1),
            if game.status() == GameStatus::InProgress {
                Style::default().fg(mark_color(game.current_turn()))
            } else {
                Style::default().fg(Color::DarkGray)
            },
        ),
        Cell::Marked(mark) => (
            mark.to_string(),
            Style::default()
                .fg(mark_color(mark))
                .add_modifier(Modifier::BOLD),
        ),
    };
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    }
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep =
        Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
