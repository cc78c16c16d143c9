//! UI rendering using ratatui.

mod board;

use super::app::App;
use noughts::GameStatus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use board::render_board;

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Noughts & Crosses")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_board(f, chunks[1], app.game());

    let banner_style = match app.game().status() {
        GameStatus::InProgress => Style::default().fg(Color::Yellow),
        GameStatus::Won(_) | GameStatus::Draw => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    };
    let banner = Paragraph::new(app.banner())
        .style(banner_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(banner, chunks[2]);

    let help = Paragraph::new("Press 1-9 for moves | R: Restart | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
