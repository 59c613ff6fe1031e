use crate::error::ConfigError;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 7;

/// Number of aligned tokens needed to win. Not configurable.
pub const WIN_LENGTH: usize = 4;

/// Largest accepted row or column count.
pub const MAX_DIMENSION: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Grid coordinate. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Position { row, column }
    }
}

/// Row-major grid of cells, stored flat at `row * columns + column`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the classic 6x7 dimensions
    pub fn new() -> Self {
        Board {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLUMNS],
        }
    }

    /// Create an empty board of arbitrary size. Each dimension must be in
    /// `1..=MAX_DIMENSION`.
    pub fn with_dimensions(rows: usize, columns: usize) -> Result<Self, ConfigError> {
        if !(1..=MAX_DIMENSION).contains(&rows) || !(1..=MAX_DIMENSION).contains(&columns) {
            return Err(ConfigError::Validation(format!(
                "board dimensions must be between 1 and {MAX_DIMENSION} (got {rows}x{columns})"
            )));
        }
        let len = rows.checked_mul(columns).ok_or_else(|| {
            ConfigError::Validation(format!("board of {rows}x{columns} cells is too large"))
        })?;
        Ok(Board {
            rows,
            columns,
            cells: vec![Cell::Empty; len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// All cells in raster order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Flat index of a coordinate, or `None` if it lies off the board
    pub fn index(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }

    /// Inverse of [`Board::index`]
    pub fn position(&self, index: usize) -> Option<Position> {
        (index < self.cells.len()).then(|| Position::new(index / self.columns, index % self.columns))
    }

    /// Get the cell at a specific position.
    /// Out-of-range coordinates return `None` rather than being clamped.
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        self.index(row, column).map(|i| self.cells[i])
    }

    pub fn cell_at(&self, pos: Position) -> Option<Cell> {
        self.get(pos.row, pos.column)
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        self.landing_row(column).is_none()
    }

    /// Row a token dropped into `column` would come to rest in.
    ///
    /// Scans top-down for the first occupied cell and lands just above it,
    /// or on the bottom row when the column is empty. `None` when the column
    /// is full or off the board.
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= self.columns {
            return None;
        }
        for row in 0..self.rows {
            if !self.cells[row * self.columns + column].is_empty() {
                return row.checked_sub(1);
            }
        }
        Some(self.rows - 1)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of occupied cells
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        if let Some(i) = self.index(pos.row, pos.column) {
            self.cells[i] = cell;
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
