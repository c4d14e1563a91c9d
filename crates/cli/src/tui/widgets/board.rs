//! Board widget for rendering the tic-tac-toe grid.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use tictactoe_core::{board::Board, mark::Mark, square::Square};

/// Widget for rendering the tic-tac-toe grid.
pub struct BoardWidget<'a> {
    /// The game board to render
    board: &'a Board,
    /// Cursor position (row, col)
    cursor: (usize, usize),
    /// Last move played
    last_move: Option<Square>,
    /// Suggested move to highlight
    hint: Option<Square>,
    /// Whether to mark open cells with a dot
    show_open_cells: bool,
}

impl<'a> BoardWidget<'a> {
    /// Creates a new board widget.
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            cursor: (0, 0),
            last_move: None,
            hint: None,
            show_open_cells: true,
        }
    }

    /// Sets the cursor position.
    pub fn cursor(mut self, row: usize, col: usize) -> Self {
        self.cursor = (row, col);
        self
    }

    /// Sets the last move.
    pub fn last_move(mut self, sq: Option<Square>) -> Self {
        self.last_move = sq;
        self
    }

    /// Sets the hint square.
    pub fn hint(mut self, sq: Option<Square>) -> Self {
        self.hint = sq;
        self
    }

    /// Sets whether to mark open cells.
    pub fn show_open_cells(mut self, show: bool) -> Self {
        self.show_open_cells = show;
        self
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Minimum size check
        if area.width < 16 || area.height < 9 {
            return;
        }

        // Column headers
        let header = Line::from(vec![
            Span::raw("    "),
            Span::styled("a", Style::default().fg(Color::Cyan)),
            Span::raw("   "),
            Span::styled("b", Style::default().fg(Color::Cyan)),
            Span::raw("   "),
            Span::styled("c", Style::default().fg(Color::Cyan)),
        ]);
        buf.set_line(area.x, area.y, &header, area.width);

        // Top border
        let top_border = "  ┌───┬───┬───┐";
        buf.set_string(area.x, area.y + 1, top_border, Style::default());

        // Board rows
        for row in 0..3 {
            let y = area.y + 2 + (row as u16) * 2;

            // Row number and cells
            let row_num = format!("{} │", row + 1);
            buf.set_string(area.x, y, &row_num, Style::default().fg(Color::Cyan));

            for col in 0..3 {
                let sq = Square::from_usize_unchecked(row * 3 + col);
                let mark = self.board.get(sq);
                let is_cursor = self.cursor == (row, col);
                let is_last_move = self.last_move == Some(sq);
                let is_hint = self.hint == Some(sq);

                // Determine cell content and style
                let (content, mut style) = match mark {
                    Mark::X => (" X ", Style::default().fg(Color::Green)),
                    Mark::O => (" O ", Style::default().fg(Color::Yellow)),
                    Mark::Empty if self.show_open_cells => {
                        (" · ", Style::default().fg(Color::DarkGray))
                    }
                    Mark::Empty => ("   ", Style::default()),
                };

                // Apply hint highlight
                if is_hint {
                    style = style.bg(Color::Rgb(20, 60, 60));
                }

                // Apply cursor highlight
                if is_cursor {
                    style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
                }

                // Apply last move highlight
                if is_last_move {
                    style = style.bg(Color::Rgb(50, 50, 80));
                }

                let x = area.x + 3 + (col as u16) * 4;
                buf.set_string(x, y, content, style);

                // Cell separator
                if col < 2 {
                    buf.set_string(x + 3, y, "│", Style::default());
                }
            }

            // Right border
            buf.set_string(area.x + 14, y, "│", Style::default());

            // Row separator
            if row < 2 {
                let separator = "  ├───┼───┼───┤";
                buf.set_string(area.x, y + 1, separator, Style::default());
            }
        }

        // Bottom border
        let bottom_border = "  └───┴───┴───┘";
        buf.set_string(area.x, area.y + 7, bottom_border, Style::default());

        // Cursor position indicator
        let cursor_sq = Square::from_usize_unchecked(self.cursor.0 * 3 + self.cursor.1);
        let cursor_info = format!("  Cursor: {cursor_sq}");
        buf.set_string(
            area.x,
            area.y + 8,
            &cursor_info,
            Style::default().fg(Color::Cyan),
        );
    }
}
