//! Move generation for tic-tac-toe positions.

use arrayvec::ArrayVec;
use std::slice;

use crate::board::Board;
use crate::square::Square;

/// Maximum number of moves possible in a tic-tac-toe position.
const MAX_MOVES: usize = 9;

/// Container for all legal moves in a position.
///
/// A legal move is any empty cell. Moves are generated in ascending index
/// order (A1 to C3), which is what makes lowest-index tie-breaking in the
/// search deterministic.
#[derive(Clone, Debug)]
pub struct MoveList {
    /// List of moves.
    moves: ArrayVec<Square, MAX_MOVES>,
}

impl MoveList {
    /// Generates all legal moves on the given board.
    ///
    /// # Arguments
    ///
    /// * `board` - The current board
    ///
    /// # Returns
    ///
    /// A new MoveList containing every empty cell in ascending index order.
    #[inline]
    pub fn new(board: &Board) -> MoveList {
        let mut moves = ArrayVec::new();
        for sq in Square::iter() {
            if board.is_square_empty(sq) {
                moves.push(sq);
            }
        }
        MoveList { moves }
    }

    /// Returns the number of legal moves in this position.
    ///
    /// # Returns
    ///
    /// The count of legal moves.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    /// Checks whether the position has no legal moves.
    ///
    /// # Returns
    ///
    /// `true` if the board is full.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the first move in the list, if any exists.
    ///
    /// # Returns
    ///
    /// The lowest-indexed empty cell, or None if no legal moves exist.
    #[inline]
    pub fn first(&self) -> Option<Square> {
        self.moves.first().copied()
    }

    /// Returns an iterator over all moves in the list.
    ///
    /// # Returns
    ///
    /// An iterator yielding the moves in ascending index order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Square> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Square;
    type IntoIter = slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mark::Mark;

    #[test]
    fn test_empty_board_has_nine_moves() {
        let board = Board::new();
        let moves = MoveList::new(&board);
        assert_eq!(moves.count(), 9);
        assert!(!moves.is_empty());
        assert_eq!(moves.first(), Some(Square::A1));
    }

    #[test]
    fn test_occupied_cells_are_excluded() {
        let mut board = Board::new();
        board.set(Square::A1, Mark::X);
        board.set(Square::B2, Mark::O);

        let moves = MoveList::new(&board);
        assert_eq!(moves.count(), 7);
        assert!(!moves.iter().any(|&sq| sq == Square::A1));
        assert!(!moves.iter().any(|&sq| sq == Square::B2));
        assert_eq!(moves.first(), Some(Square::B1));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board: Board = "XOXXXOOXO".parse().unwrap();
        let moves = MoveList::new(&board);
        assert_eq!(moves.count(), 0);
        assert!(moves.is_empty());
        assert_eq!(moves.first(), None);
    }

    #[test]
    fn test_generation_order_is_ascending() {
        let board: Board = "-X--O----".parse().unwrap();
        let moves = MoveList::new(&board);
        let indices: Vec<usize> = moves.iter().map(|sq| sq.index()).collect();
        assert_eq!(indices, vec![0, 2, 3, 5, 6, 7, 8]);
        assert!(indices.is_sorted());
    }
}
