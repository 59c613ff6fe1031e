//! Four-in-a-row detection over the whole board.

use super::board::{Board, Position, WIN_LENGTH};
use super::player::Player;

/// Line orientation, as a step from one cell of a window to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `\` walked top-left to bottom-right
    DownRight,
    /// `/` walked top-right to bottom-left
    DownLeft,
    Horizontal,
    /// Walked bottom to top, so a stacked column reports its lowest token first
    Vertical,
}

impl Direction {
    /// Priority in which directions are checked when several lines complete at once
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::DownRight,
        Direction::DownLeft,
        Direction::Horizontal,
        Direction::Vertical,
    ];

    /// (row step, column step)
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (-1, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::DownRight => "down-right diagonal",
            Direction::DownLeft => "down-left diagonal",
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
        }
    }
}

/// A completed line: who made it and the four cells, start cell first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    pub winner: Player,
    pub direction: Direction,
    pub cells: [Position; WIN_LENGTH],
}

impl WinLine {
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Cells of the window starting at `start` along `direction`, if it fits on the board.
fn window(board: &Board, start: Position, direction: Direction) -> Option<[Position; WIN_LENGTH]> {
    let (dr, dc) = direction.delta();
    let mut cells = [start; WIN_LENGTH];
    for (step, slot) in cells.iter_mut().enumerate() {
        let row = start.row.checked_add_signed(dr * step as isize)?;
        let column = start.column.checked_add_signed(dc * step as isize)?;
        board.index(row, column)?;
        *slot = Position::new(row, column);
    }
    Some(cells)
}

/// First winning window in `direction`, start cells visited in raster order.
pub fn scan_direction(board: &Board, direction: Direction) -> Option<WinLine> {
    for (index, &cell) in board.cells().iter().enumerate() {
        let Some(winner) = Player::from_cell(cell) else {
            continue;
        };
        let start = board.position(index)?;
        let Some(cells) = window(board, start, direction) else {
            continue;
        };
        if cells.iter().all(|&p| board.cell_at(p) == Some(cell)) {
            return Some(WinLine {
                winner,
                direction,
                cells,
            });
        }
    }
    None
}

/// Scan every direction in [`Direction::SCAN_ORDER`] and report the first line found.
pub fn find_win(board: &Board) -> Option<WinLine> {
    Direction::SCAN_ORDER
        .iter()
        .find_map(|&direction| scan_direction(board, direction))
}
