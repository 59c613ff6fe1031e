use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{render_board, BoardOverlay, Palette};
use crate::game::GameEngine;

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    overlay: &BoardOverlay,
    palette: &Palette,
    message: &Option<String>,
) {
    // Dimensions are capped at MAX_DIMENSION, so this always fits
    let board_height = u16::try_from(engine.rows() + 3).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, palette, chunks[0]);
    render_board(frame, engine.board(), overlay, palette, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Banner text: whose turn it is, or who won
pub fn status_line(engine: &GameEngine) -> String {
    match engine.winner() {
        Some(winner) => format!("{} WON!", winner.name()),
        None if engine.board().is_full() => "Board full! Press R to play again".to_string(),
        None => format!("{}'s Turn", engine.current_player().name()),
    }
}

fn render_header(frame: &mut Frame, engine: &GameEngine, palette: &Palette, area: Rect) {
    let player = engine.winner().unwrap_or(engine.current_player());
    let header = Paragraph::new(status_line(engine))
        .style(
            Style::default()
                .fg(palette.player(player))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter: Drop  |  1-9: Drop in column  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
