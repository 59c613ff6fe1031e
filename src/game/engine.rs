use tracing::{debug, info};

use super::board::{Board, Position};
use super::player::Player;
use super::win::{find_win, WinLine};
use crate::error::{ConfigError, MoveError};

/// Where the engine sits in its drop cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    /// Awaiting a drop
    Idle,
    /// A drop has been resolved but not yet committed; further drops are rejected
    Dropping,
    /// Terminal until [`GameEngine::restart`]
    Won,
}

/// Resolved destination of a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

impl Landing {
    pub fn position(&self) -> Position {
        Position::new(self.row, self.column)
    }
}

/// Result of a committed drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropOutcome {
    pub landing: Landing,
    pub win: Option<WinLine>,
}

/// Owns the board, turn, win result and busy flag. All mutation goes through
/// [`drop_token`](GameEngine::drop_token), the two-phase
/// [`begin_drop`](GameEngine::begin_drop)/[`finish_drop`](GameEngine::finish_drop)
/// pair, and [`restart`](GameEngine::restart).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    win: Option<WinLine>,
    pending: Option<Landing>,
}

impl GameEngine {
    /// Engine on the classic 6x7 board, Player 1 to move
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    pub fn with_dimensions(rows: usize, columns: usize) -> Result<Self, ConfigError> {
        Ok(Self::from_board(Board::with_dimensions(rows, columns)?))
    }

    fn from_board(board: Board) -> Self {
        GameEngine {
            board,
            current_player: Player::Player1,
            win: None,
            pending: None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn columns(&self) -> usize {
        self.board.columns()
    }

    /// Player whose move is next. Stays on the winner once the game is won.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn win_line(&self) -> Option<&WinLine> {
        self.win.as_ref()
    }

    pub fn winner(&self) -> Option<Player> {
        self.win.map(|w| w.winner)
    }

    pub fn is_won(&self) -> bool {
        self.win.is_some()
    }

    /// The busy flag: true between `begin_drop` and `finish_drop`
    pub fn is_dropping(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_drop(&self) -> Option<Landing> {
        self.pending
    }

    pub fn phase(&self) -> EnginePhase {
        if self.pending.is_some() {
            EnginePhase::Dropping
        } else if self.win.is_some() {
            EnginePhase::Won
        } else {
            EnginePhase::Idle
        }
    }

    /// Drop the current player's token into `column` and resolve it in one step.
    pub fn drop_token(&mut self, column: i64) -> Result<DropOutcome, MoveError> {
        self.begin_drop(column)?;
        self.finish_drop()
    }

    /// Validate a drop and resolve its landing row, entering `Dropping`.
    ///
    /// The board is untouched until [`finish_drop`](GameEngine::finish_drop);
    /// callers may animate the fall in between.
    pub fn begin_drop(&mut self, column: i64) -> Result<Landing, MoveError> {
        if self.pending.is_some() {
            return Err(MoveError::DropInProgress);
        }
        if self.win.is_some() {
            return Err(MoveError::GameAlreadyWon);
        }
        let col = usize::try_from(column)
            .ok()
            .filter(|&c| c < self.columns())
            .ok_or(MoveError::InvalidColumn {
                column,
                columns: self.columns(),
            })?;
        let row = self
            .board
            .landing_row(col)
            .ok_or(MoveError::ColumnFull(col))?;

        let landing = Landing {
            row,
            column: col,
            player: self.current_player,
        };
        debug!(row, column = col, player = landing.player.name(), "drop started");
        self.pending = Some(landing);
        Ok(landing)
    }

    /// Commit the pending drop, check for a win and pass the turn.
    pub fn finish_drop(&mut self) -> Result<DropOutcome, MoveError> {
        let landing = self.pending.take().ok_or(MoveError::NoDropInProgress)?;
        self.board.set(landing.position(), landing.player.to_cell());

        let win = find_win(&self.board);
        match &win {
            Some(line) => {
                info!(
                    winner = line.winner.name(),
                    direction = line.direction.name(),
                    "game won"
                );
                self.win = win;
            }
            None => self.current_player = self.current_player.other(),
        }
        debug!(
            row = landing.row,
            column = landing.column,
            filled = self.board.filled(),
            "drop committed"
        );

        Ok(DropOutcome { landing, win })
    }

    /// Reset to an empty board with Player 1 to move. Legal in every phase;
    /// a pending drop is discarded.
    pub fn restart(&mut self) {
        if let Some(landing) = self.pending {
            debug!(column = landing.column, "pending drop abandoned by restart");
        }
        self.board.clear();
        self.current_player = Player::Player1;
        self.win = None;
        self.pending = None;
        info!("game restarted");
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
