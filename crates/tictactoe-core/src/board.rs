//! Tic-tac-toe board representation.

use std::fmt;
use std::str::FromStr;

use crate::constants::WINNING_LINES;
use crate::mark::Mark;
use crate::square::{Square, TOTAL_SQUARES};

/// Represents a tic-tac-toe board as an array of marks.
///
/// The `Board` struct contains one mark per cell in row-major order (A1 to
/// C3). It is a plain value type: placing and clearing marks never allocates,
/// and copies are cheap enough for search code to work on scratch copies.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Board {
    cells: [Mark; TOTAL_SQUARES],
}

impl Default for Board {
    /// Creates an empty board.
    fn default() -> Self {
        Board {
            cells: [Mark::Empty; TOTAL_SQUARES],
        }
    }
}

impl Board {
    /// Creates a new empty `Board`.
    ///
    /// # Returns
    /// A new `Board` instance with all cells empty.
    pub fn new() -> Board {
        Default::default()
    }

    /// Gets the mark at a specific square.
    ///
    /// # Arguments
    /// * `sq` - The square to check.
    ///
    /// # Returns
    /// The mark at the specified square.
    #[inline]
    pub fn get(&self, sq: Square) -> Mark {
        self.cells[sq.index()]
    }

    /// Places a mark on a square, overwriting whatever is there.
    ///
    /// # Arguments
    /// * `sq` - The square to write.
    /// * `mark` - The mark to place.
    #[inline]
    pub fn set(&mut self, sq: Square, mark: Mark) {
        self.cells[sq.index()] = mark;
    }

    /// Clears a square back to empty.
    ///
    /// # Arguments
    /// * `sq` - The square to clear.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.cells[sq.index()] = Mark::Empty;
    }

    /// Checks if a given square is empty.
    ///
    /// # Arguments
    /// * `sq` - The square to check.
    ///
    /// # Returns
    /// `true` if the square is empty, `false` otherwise.
    #[inline]
    pub fn is_square_empty(&self, sq: Square) -> bool {
        self.get(sq) == Mark::Empty
    }

    /// Checks whether the given mark has completed a winning line.
    ///
    /// All eight lines (three rows, three columns, two diagonals) are
    /// examined.
    ///
    /// # Arguments
    /// * `mark` - The mark to check for.
    ///
    /// # Returns
    /// `true` if any winning line is fully occupied by `mark`.
    #[inline]
    pub fn has_win(&self, mark: Mark) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&sq| self.get(sq) == mark))
    }

    /// Returns the mark that has completed a line, if any.
    ///
    /// # Returns
    /// `Some(Mark::X)` or `Some(Mark::O)` if that side has a winning line,
    /// `None` otherwise.
    #[inline]
    pub fn winner(&self) -> Option<Mark> {
        if self.has_win(Mark::X) {
            Some(Mark::X)
        } else if self.has_win(Mark::O) {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// Checks if every cell is occupied.
    ///
    /// # Returns
    /// `true` if no cell is empty, `false` otherwise.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&m| m != Mark::Empty)
    }

    /// Returns the number of cells holding the given mark.
    ///
    /// # Returns
    /// The number of cells holding `mark`.
    #[inline]
    pub fn get_mark_count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }

    /// Returns the number of empty cells on the board.
    ///
    /// # Returns
    /// The number of empty cells.
    #[inline]
    pub fn get_empty_count(&self) -> usize {
        self.get_mark_count(Mark::Empty)
    }

    /// Infers the side to move from the mark counts.
    ///
    /// X always moves first, so X either matches O's count (X to move) or
    /// leads by exactly one (O to move).
    ///
    /// # Returns
    /// `Some(Mark::X)` or `Some(Mark::O)` for reachable positions, `None`
    /// when the counts cannot occur in a legal game.
    pub fn infer_side_to_move(&self) -> Option<Mark> {
        let x = self.get_mark_count(Mark::X);
        let o = self.get_mark_count(Mark::O);
        if x == o {
            Some(Mark::X)
        } else if x == o + 1 {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// Returns the board as a flat 9-character string from A1 to C3.
    ///
    /// # Returns
    /// A string of `X`, `O` and `-` characters.
    pub fn to_board_string(&self) -> String {
        self.cells.iter().map(|m| m.to_char()).collect()
    }
}

/// Error type for parsing a board from its string representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    /// Wrong number of characters (must be 9)
    InvalidLength(usize),
    /// A character outside the `X`/`O`/`-` alphabet
    InvalidMark(char),
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::InvalidLength(n) => {
                write!(f, "Invalid board length {n}: must be 9 characters")
            }
            BoardParseError::InvalidMark(c) => {
                write!(f, "Invalid mark '{c}': must be X, O, '-' or '.'")
            }
        }
    }
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses a 9-character board string into a `Board`.
    ///
    /// Characters are interpreted cell by cell from A1 to C3:
    /// - `X` or `x` for an X mark
    /// - `O` or `o` for an O mark
    /// - `-` or `.` for an empty cell
    ///
    /// # Arguments
    /// * `s` - The string to parse.
    ///
    /// # Returns
    /// * `Ok(Board)` - The parsed board.
    /// * `Err(BoardParseError)` - If the string has the wrong length or an
    ///   unknown character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.chars().count() != TOTAL_SQUARES {
            return Err(BoardParseError::InvalidLength(s.chars().count()));
        }

        let mut board = Board::new();
        for (i, c) in s.chars().enumerate() {
            let mark = match c {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '-' | '.' => Mark::Empty,
                _ => return Err(BoardParseError::InvalidMark(c)),
            };
            board.set(Square::from_usize_unchecked(i), mark);
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Formats the board as three rows of mark characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::with_capacity(TOTAL_SQUARES + 3);
        for (i, sq) in Square::iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                s.push('\n');
            }
            s.push(self.get(sq).to_char());
        }
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.get_empty_count(), 9);
        assert_eq!(board.get_mark_count(Mark::X), 0);
        assert_eq!(board.get_mark_count(Mark::O), 0);
        assert!(!board.is_full());
        assert_eq!(board.winner(), None);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_set_get_clear() {
        let mut board = Board::new();
        assert!(board.is_square_empty(Square::B2));

        board.set(Square::B2, Mark::X);
        assert_eq!(board.get(Square::B2), Mark::X);
        assert!(!board.is_square_empty(Square::B2));
        assert_eq!(board.get_mark_count(Mark::X), 1);
        assert_eq!(board.get_empty_count(), 8);

        board.clear(Square::B2);
        assert!(board.is_square_empty(Square::B2));
        assert_eq!(board.get_empty_count(), 9);
    }

    #[test]
    fn test_has_win_all_lines() {
        for line in WINNING_LINES {
            let mut board = Board::new();
            for sq in line {
                board.set(sq, Mark::O);
            }
            assert!(board.has_win(Mark::O), "line {line:?} not detected");
            assert!(!board.has_win(Mark::X));
            assert_eq!(board.winner(), Some(Mark::O));
        }

        for line in WINNING_LINES {
            let mut board = Board::new();
            for sq in line {
                board.set(sq, Mark::X);
            }
            assert!(board.has_win(Mark::X), "line {line:?} not detected");
            assert_eq!(board.winner(), Some(Mark::X));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Square::A1, Mark::X);
        board.set(Square::B1, Mark::X);
        board.set(Square::C1, Mark::O);
        assert!(!board.has_win(Mark::X));
        assert!(!board.has_win(Mark::O));
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_is_full() {
        let board: Board = "XOXXXOOXO".parse().unwrap();
        assert!(board.is_full());
        assert_eq!(board.get_empty_count(), 0);
        // Known drawn position
        assert_eq!(board.winner(), None);

        let board: Board = "XOXXXOOX-".parse().unwrap();
        assert!(!board.is_full());
    }

    #[test]
    fn test_infer_side_to_move() {
        assert_eq!(Board::new().infer_side_to_move(), Some(Mark::X));

        let board: Board = "X--------".parse().unwrap();
        assert_eq!(board.infer_side_to_move(), Some(Mark::O));

        let board: Board = "X---O----".parse().unwrap();
        assert_eq!(board.infer_side_to_move(), Some(Mark::X));

        // Two X moves in a row cannot happen
        let board: Board = "XX-------".parse().unwrap();
        assert_eq!(board.infer_side_to_move(), None);

        // O cannot lead X
        let board: Board = "O--------".parse().unwrap();
        assert_eq!(board.infer_side_to_move(), None);
    }

    #[test]
    fn test_from_str() {
        let board: Board = "XX-OO----".parse().unwrap();
        assert_eq!(board.get(Square::A1), Mark::X);
        assert_eq!(board.get(Square::B1), Mark::X);
        assert_eq!(board.get(Square::C1), Mark::Empty);
        assert_eq!(board.get(Square::A2), Mark::O);
        assert_eq!(board.get(Square::B2), Mark::O);
        assert_eq!(board.get(Square::C3), Mark::Empty);

        // Lowercase and dots are accepted
        let board: Board = "xx.oo....".parse().unwrap();
        assert_eq!(board.to_board_string(), "XX-OO----");

        // Surrounding whitespace is ignored
        let board: Board = " XX-OO---- ".parse().unwrap();
        assert_eq!(board.to_board_string(), "XX-OO----");
    }

    #[test]
    fn test_from_str_errors() {
        assert_eq!(
            "XX-OO---".parse::<Board>().unwrap_err(),
            BoardParseError::InvalidLength(8)
        );
        assert_eq!(
            "XX-OO-----".parse::<Board>().unwrap_err(),
            BoardParseError::InvalidLength(10)
        );
        assert_eq!(
            "XX-OO---Z".parse::<Board>().unwrap_err(),
            BoardParseError::InvalidMark('Z')
        );
    }

    #[test]
    fn test_board_string_round_trip() {
        let s = "X-O-XO--X";
        let board: Board = s.parse().unwrap();
        assert_eq!(board.to_board_string(), s);
        assert_eq!(board.to_string(), "X-O\n-XO\n--X");
    }

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            BoardParseError::InvalidLength(3).to_string(),
            "Invalid board length 3: must be 9 characters"
        );
        assert_eq!(
            BoardParseError::InvalidMark('q').to_string(),
            "Invalid mark 'q': must be X, O, '-' or '.'"
        );
    }
}
