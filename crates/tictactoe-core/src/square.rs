use std::fmt;
use std::str::FromStr;

/// Represents a cell on a tic-tac-toe board, ranging from A1 to C3.
///
/// The board uses algebraic notation where files (columns) are labeled A-C
/// and ranks (rows) are labeled 1-3. The board is indexed as follows:
///
/// ```text
///   A B C
/// 1 0 1 2
/// 2 3 4 5
/// 3 6 7 8
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1,
    A2, B2, C2,
    A3, B3, C3,
}

/// Constants for board dimensions
pub const BOARD_SIZE: usize = 3;
pub const TOTAL_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

impl Square {
    /// Converts the `Square` into a `usize` index.
    ///
    /// # Returns
    ///
    /// A `usize` value representing the row-major index of the `Square` (0-8).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a `usize` value into a `Square` enum without bounds checking.
    ///
    /// # Arguments
    ///
    /// * `index` - The `usize` value to convert (0-8).
    ///
    /// # Returns
    ///
    /// The corresponding `Square` variant.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `index` >= 9.
    #[inline]
    pub fn from_usize_unchecked(index: usize) -> Square {
        debug_assert!(
            index < TOTAL_SQUARES,
            "Index out of bounds for Square enum. index: {index:?}"
        );
        unsafe { std::mem::transmute(index as u8) }
    }

    /// Safely converts a `usize` value into a `Square` enum.
    ///
    /// # Arguments
    /// * `index` - The `usize` value to convert.
    ///
    /// # Returns
    /// `Some(Square)` if the index is valid (0-8), `None` otherwise.
    #[inline]
    pub fn from_usize(index: usize) -> Option<Square> {
        if index < TOTAL_SQUARES {
            Some(Square::from_usize_unchecked(index))
        } else {
            None
        }
    }

    /// Returns the file (column) of this square.
    ///
    /// # Returns
    ///
    /// The file index (0-2) where 0 represents file A and 2 represents file C.
    #[inline]
    pub fn file(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Returns the rank (row) of this square.
    ///
    /// # Returns
    ///
    /// The rank index (0-2) where 0 represents rank 1 and 2 represents rank 3.
    #[inline]
    pub fn rank(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Creates a `Square` from file and rank coordinates.
    ///
    /// # Arguments
    ///
    /// * `file` - The file index (0-2) where 0 is file A and 2 is file C.
    /// * `rank` - The rank index (0-2) where 0 is rank 1 and 2 is rank 3.
    ///
    /// # Returns
    ///
    /// The corresponding `Square` variant.
    ///
    /// # Panics
    ///
    /// Panics if either `file` or `rank` is >= 3.
    pub fn from_file_rank(file: u8, rank: u8) -> Square {
        assert!(file < BOARD_SIZE as u8, "Invalid file: {file}");
        assert!(rank < BOARD_SIZE as u8, "Invalid rank: {rank}");
        Self::from_usize_unchecked(rank as usize * BOARD_SIZE + file as usize)
    }

    /// Returns an iterator over all 9 squares on the board.
    ///
    /// The iterator yields squares in order from A1 to C3, following the
    /// row-major index order (0-8).
    ///
    /// # Returns
    /// An iterator that yields all 9 board squares.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..TOTAL_SQUARES).map(Square::from_usize_unchecked)
    }
}

/// Error type for square-related operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid square string format (must be 2 characters)
    InvalidFormat,
    /// Invalid file character (must be a-c or A-C)
    InvalidFile(char),
    /// Invalid rank character (must be 1-3)
    InvalidRank(char),
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidFormat => write!(
                f,
                "Invalid square format: must be 2 characters (e.g., 'a1')"
            ),
            SquareError::InvalidFile(c) => write!(f, "Invalid file '{c}': must be a-c or A-C"),
            SquareError::InvalidRank(c) => write!(f, "Invalid rank '{c}': must be 1-3"),
        }
    }
}

impl std::error::Error for SquareError {}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses a string into a `Square` enum.
    ///
    /// The string must be in algebraic notation (e.g., "a1", "c3").
    /// Both uppercase and lowercase letters are accepted.
    ///
    /// # Arguments
    ///
    /// * `s` - The string to parse.
    ///
    /// # Returns
    ///
    /// * `Ok(Square)` - The parsed square if the string is valid.
    /// * `Err(SquareError)` - If the string is not a valid square representation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Compare char count, not byte length; "é" is one char but two bytes.
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 2 {
            return Err(SquareError::InvalidFormat);
        }

        let file_char = chars[0].to_ascii_lowercase();
        let rank_char = chars[1];

        if !('a'..='c').contains(&file_char) {
            return Err(SquareError::InvalidFile(chars[0]));
        }

        if !('1'..='3').contains(&rank_char) {
            return Err(SquareError::InvalidRank(rank_char));
        }

        let file = file_char as u8 - b'a';
        let rank = rank_char as u8 - b'1';
        Ok(Square::from_usize_unchecked(
            rank as usize * BOARD_SIZE + file as usize,
        ))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.file() as u8 + b'a';
        let rank = self.rank() as u8 + b'1';

        write!(f, "{}{}", file as char, rank as char)
    }
}
