//! Core Connect Four game logic: board representation, player types, win
//! detection and the engine state machine.

mod board;
mod engine;
mod player;
mod win;

pub use board::{Board, Cell, Position, DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_DIMENSION, WIN_LENGTH};
pub use engine::{DropOutcome, EnginePhase, GameEngine, Landing};
pub use player::Player;
pub use win::{find_win, scan_direction, Direction, WinLine};

pub use crate::error::MoveError;
