use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::{parse_hex_color, ColorConfig};
use crate::error::ConfigError;
use crate::game::{Board, Cell, Player, Position, WinLine};

/// Terminal colors resolved from the configured hex values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub empty: Color,
    pub player1: Color,
    pub player2: Color,
}

impl Palette {
    pub fn from_config(colors: &ColorConfig) -> Result<Self, ConfigError> {
        let rgb = |value: &str| parse_hex_color(value).map(|(r, g, b)| Color::Rgb(r, g, b));
        Ok(Palette {
            empty: rgb(&colors.empty)?,
            player1: rgb(&colors.player1)?,
            player2: rgb(&colors.player2)?,
        })
    }

    pub fn player(&self, player: Player) -> Color {
        match player {
            Player::Player1 => self.player1,
            Player::Player2 => self.player2,
        }
    }

    pub fn cell(&self, cell: Cell) -> Color {
        Player::from_cell(cell).map_or(self.empty, |p| self.player(p))
    }
}

/// Everything the board needs beyond the committed cells.
#[derive(Debug, Clone, Copy)]
pub struct BoardOverlay<'a> {
    pub selected_column: usize,
    /// Token drawn mid-fall; not yet on the board
    pub falling: Option<(Position, Player)>,
    pub win: Option<&'a WinLine>,
    /// Whether winning cells are drawn in their color on this frame
    pub flash_lit: bool,
    pub turn: Player,
}

/// Color shown for one cell on this frame
pub fn cell_color(board: &Board, pos: Position, overlay: &BoardOverlay, palette: &Palette) -> Color {
    if let Some((falling_at, player)) = overlay.falling {
        if falling_at == pos {
            return palette.player(player);
        }
    }
    let cell = board.cell_at(pos).unwrap_or(Cell::Empty);
    match overlay.win {
        Some(win) if win.contains(pos) && !overlay.flash_lit => palette.empty,
        _ => palette.cell(cell),
    }
}

pub fn render_board(frame: &mut Frame, board: &Board, overlay: &BoardOverlay, palette: &Palette, area: Rect) {
    let columns = board.columns();
    let mut lines = Vec::new();

    // Drop row: one button per column in the mover's color
    let mut drop_line = vec![Span::raw(" ")];
    for col in 0..columns {
        let style = Style::default().fg(palette.player(overlay.turn));
        if col == overlay.selected_column {
            drop_line.push(Span::styled(" ▼ ", style.add_modifier(Modifier::BOLD)));
        } else {
            drop_line.push(Span::styled(format!("{:^3}", col + 1), style));
        }
    }
    drop_line.push(Span::raw(" "));
    lines.push(Line::from(drop_line));

    lines.push(Line::from(format!("╔{}╗", "═".repeat(columns * 3))));
    for row in 0..board.rows() {
        let mut spans = vec![Span::raw("║")];
        for col in 0..columns {
            let pos = Position::new(row, col);
            let color = cell_color(board, pos, overlay, palette);
            let occupied = color != palette.empty
                || overlay.falling.is_some_and(|(p, _)| p == pos);
            let symbol = if occupied { " ● " } else { " ○ " };
            spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        spans.push(Span::raw("║"));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(format!("╚{}╝", "═".repeat(columns * 3))));

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
