/// Represents a mark in the game.
///
/// The `Mark` enum has three variants:
///
/// * `Empty` - Represents an empty cell on the board.
/// * `X` - The human player's mark. X always moves first.
/// * `O` - The computer player's mark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    /// Converts the mark to its corresponding character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Mark::Empty`
    /// * `'X'` for `Mark::X`
    /// * `'O'` for `Mark::O`
    pub fn to_char(self) -> char {
        match self {
            Mark::Empty => '-',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Returns the opposite mark.
    ///
    /// # Returns
    ///
    /// * `Mark::O` for `Mark::X`
    /// * `Mark::X` for `Mark::O`
    /// * `Mark::Empty` for `Mark::Empty`
    pub fn opposite(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }
}
