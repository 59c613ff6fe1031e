use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::debug;

use super::animation::{DropAnimation, Flash};
use super::board_widget::{BoardOverlay, Palette};
use crate::config::AppConfig;
use crate::error::{ConfigError, MoveError};
use crate::game::GameEngine;

/// Poll interval for input while idle; short enough to keep animations smooth.
const TICK: Duration = Duration::from_millis(16);

pub struct App {
    engine: GameEngine,
    palette: Palette,
    drop_rate: Duration,
    flash_rate: Duration,
    selected_column: usize,
    animation: Option<DropAnimation>,
    flash: Option<Flash>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let engine = GameEngine::with_dimensions(config.board.rows, config.board.columns)?;
        Ok(App {
            selected_column: engine.columns() / 2, // Start in middle
            engine,
            palette: Palette::from_config(&config.colors)?,
            drop_rate: Duration::from_millis(config.animation.drop_rate_ms),
            flash_rate: Duration::from_millis(config.animation.flash_rate_ms),
            animation: None,
            flash: None,
            should_quit: false,
            message: None,
        })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            let now = Instant::now();
            self.tick(now);
            terminal
                .draw(|f| self.render(f, now))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key, Instant::now());
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.engine.columns() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column as i64, now);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as i64 - '1' as i64;
                if let Ok(col) = usize::try_from(column) {
                    if col < self.engine.columns() {
                        self.selected_column = col;
                    }
                }
                self.drop_piece(column, now);
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    /// Start a drop; the token is committed by [`App::tick`] once it has fallen
    fn drop_piece(&mut self, column: i64, now: Instant) {
        match self.engine.begin_drop(column) {
            Ok(landing) => {
                self.animation = Some(DropAnimation::new(landing, now, self.drop_rate));
            }
            Err(err) => {
                debug!(%err, "drop rejected");
                self.message = Some(match err {
                    MoveError::ColumnFull(_) => "Column is full!".to_string(),
                    MoveError::InvalidColumn { .. } => "Invalid column!".to_string(),
                    MoveError::GameAlreadyWon => {
                        "Game over! Press 'r' to restart.".to_string()
                    }
                    MoveError::DropInProgress | MoveError::NoDropInProgress => {
                        "Wait for the token to land!".to_string()
                    }
                });
            }
        }
    }

    /// Advance time: commit a drop whose animation has finished
    pub fn tick(&mut self, now: Instant) {
        let Some(animation) = self.animation else {
            return;
        };
        if !animation.is_finished(now) {
            return;
        }
        self.animation = None;

        match self.engine.finish_drop() {
            Ok(outcome) => {
                if let Some(win) = outcome.win {
                    self.flash = Some(Flash::new(now, self.flash_rate));
                    self.message = Some(format!("{} wins! Press 'r' to play again.", win.winner.name()));
                } else if self.engine.board().is_full() {
                    self.message = Some("It's a draw!".to_string());
                }
            }
            Err(err) => debug!(%err, "animation finished without a pending drop"),
        }
    }

    fn restart(&mut self) {
        // Any animation in flight is abandoned along with the engine state
        self.engine.restart();
        self.animation = None;
        self.flash = None;
        self.selected_column = self.engine.columns() / 2;
        self.message = Some("New game started!".to_string());
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame, now: Instant) {
        let overlay = BoardOverlay {
            selected_column: self.selected_column,
            falling: self
                .animation
                .map(|a| (a.current_position(now), a.player())),
            win: self.engine.win_line(),
            flash_lit: self.flash.map_or(true, |f| f.is_lit(now)),
            turn: self.engine.current_player(),
        };
        super::game_view::render(frame, &self.engine, &overlay, &self.palette, &self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, EnginePhase, Player};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(&AppConfig::default()).unwrap()
    }

    #[test]
    fn test_new_app_starts_in_middle() {
        let app = app();
        assert_eq!(app.selected_column(), 3);
        assert_eq!(app.engine().phase(), EnginePhase::Idle);
    }

    #[test]
    fn test_column_selection_is_bounded() {
        let mut app = app();
        let now = Instant::now();
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Right), now);
        }
        assert_eq!(app.selected_column(), 6);
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Left), now);
        }
        assert_eq!(app.selected_column(), 0);
    }

    #[test]
    fn test_drop_commits_after_animation() {
        let mut app = app();
        let start = Instant::now();
        app.handle_key(key(KeyCode::Enter), start);

        assert!(app.is_animating());
        assert_eq!(app.engine().phase(), EnginePhase::Dropping);
        assert_eq!(app.engine().board().get(5, 3), Some(Cell::Empty));

        app.tick(start + Duration::from_millis(100));
        assert!(app.is_animating());

        // Six rows at 50ms each
        app.tick(start + Duration::from_millis(300));
        assert!(!app.is_animating());
        assert_eq!(app.engine().board().get(5, 3), Some(Cell::Player1));
        assert_eq!(app.engine().current_player(), Player::Player2);
    }

    #[test]
    fn test_second_drop_rejected_while_falling() {
        let mut app = app();
        let start = Instant::now();
        app.handle_key(key(KeyCode::Char('1')), start);
        app.handle_key(key(KeyCode::Char('2')), start);

        assert_eq!(app.message(), Some("Wait for the token to land!"));
        assert_eq!(app.engine().pending_drop().map(|l| l.column), Some(0));
    }

    #[test]
    fn test_restart_abandons_animation() {
        let mut app = app();
        let start = Instant::now();
        app.handle_key(key(KeyCode::Enter), start);
        app.handle_key(key(KeyCode::Char('r')), start);

        assert!(!app.is_animating());
        app.tick(start + Duration::from_secs(1));
        assert_eq!(app.engine().board().filled(), 0);
        assert_eq!(app.engine().current_player(), Player::Player1);
    }

    #[test]
    fn test_win_through_keys() {
        let mut app = app();
        let mut now = Instant::now();
        for digit in ['1', '2', '1', '2', '1', '2', '1'] {
            app.handle_key(key(KeyCode::Char(digit)), now);
            now += Duration::from_secs(1);
            app.tick(now);
        }
        assert_eq!(app.engine().winner(), Some(Player::Player1));
        assert_eq!(app.message(), Some("Player 1 wins! Press 'r' to play again."));

        app.handle_key(key(KeyCode::Char('3')), now);
        assert_eq!(app.message(), Some("Game over! Press 'r' to restart."));
    }

    #[test]
    fn test_out_of_range_digit() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('9')), Instant::now());
        assert_eq!(app.message(), Some("Invalid column!"));
        assert_eq!(app.selected_column(), 3);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')), Instant::now());
        assert!(app.should_quit());
    }
}
