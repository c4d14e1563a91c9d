//! Game tree search engine.
//!
//! The engine walks the complete game tree with plain minimax: no pruning,
//! no move ordering, no caching. Scores are O-centric (`SCORE_WIN` when O
//! has a line, `SCORE_LOSS` when X has one), O maximizes and X minimizes,
//! and equal scores never replace an earlier candidate, so the chosen move
//! is always the lowest-indexed cell among the best.

use crate::board::Board;
use crate::constants::{SCORE_DRAW, SCORE_INF, SCORE_LOSS, SCORE_WIN};
use crate::mark::Mark;
use crate::move_list::MoveList;
use crate::square::Square;
use crate::types::Score;

/// Result of a search operation.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Game-theoretic score of the position, from O's point of view.
    pub score: Score,
    /// The selected move. `None` when the position is already decided.
    pub best_move: Option<Square>,
    /// Number of positions evaluated, the root included.
    pub n_nodes: u64,
}

/// Main search engine structure.
pub struct Search {
    n_nodes: u64,
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}

impl Search {
    /// Creates a new search engine.
    pub fn new() -> Search {
        Search { n_nodes: 0 }
    }

    /// Runs an exhaustive search on the given board position.
    ///
    /// The caller's board is never modified; the recursion places and
    /// clears marks on a scratch copy.
    ///
    /// # Arguments
    ///
    /// * `board` - The position to search.
    /// * `to_move` - The mark to move. O maximizes, X minimizes.
    ///
    /// # Returns
    ///
    /// A `SearchResult` with the best move, its score and the node count.
    /// On a position that is already won, lost or full, `best_move` is
    /// `None` and the score is the terminal score of the board itself.
    pub fn run(&mut self, board: &Board, to_move: Mark) -> SearchResult {
        self.n_nodes = 0;

        let mut scratch = *board;
        let (best_move, score) = self.minimax(&mut scratch, to_move);
        debug_assert_eq!(scratch, *board, "place/clear pairs must balance");

        SearchResult {
            score,
            best_move,
            n_nodes: self.n_nodes,
        }
    }

    /// Evaluates a position by full recursion and picks the move for
    /// `to_move`.
    ///
    /// Terminal positions are scored from the board content alone; the
    /// to-move parameter plays no part in the leaf values. The checks run
    /// in a fixed order: O's win, then X's win, then the full board.
    fn minimax(&mut self, board: &mut Board, to_move: Mark) -> (Option<Square>, Score) {
        self.n_nodes += 1;

        if board.has_win(Mark::O) {
            return (None, SCORE_WIN);
        }
        if board.has_win(Mark::X) {
            return (None, SCORE_LOSS);
        }
        if board.is_full() {
            return (None, SCORE_DRAW);
        }

        let maximizing = to_move == Mark::O;
        let mut best_move = None;
        let mut best_score = if maximizing { -SCORE_INF } else { SCORE_INF };

        for &sq in MoveList::new(board).iter() {
            board.set(sq, to_move);
            let (_, score) = self.minimax(board, to_move.opposite());
            board.clear(sq);

            // Strict improvement only: ties keep the earlier, lower index.
            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_move = Some(sq);
            }
        }

        (best_move, best_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(board_string: &str, to_move: Mark) -> SearchResult {
        let board: Board = board_string.parse().unwrap();
        Search::new().run(&board, to_move)
    }

    #[test]
    fn test_terminal_o_win_scores_plus_ten_for_either_side() {
        // O holds the top row; the to-move argument must not matter.
        for side in [Mark::X, Mark::O] {
            let result = search("OOO-XX-X-", side);
            assert_eq!(result.score, SCORE_WIN);
            assert_eq!(result.best_move, None);
            assert_eq!(result.n_nodes, 1);
        }
    }

    #[test]
    fn test_terminal_x_win_scores_minus_ten_for_either_side() {
        for side in [Mark::X, Mark::O] {
            let result = search("XXX-OO---", side);
            assert_eq!(result.score, SCORE_LOSS);
            assert_eq!(result.best_move, None);
            assert_eq!(result.n_nodes, 1);
        }
    }

    #[test]
    fn test_full_board_without_line_scores_zero() {
        let result = search("XOXXXOOXO", Mark::X);
        assert_eq!(result.score, SCORE_DRAW);
        assert_eq!(result.best_move, None);
        assert_eq!(result.n_nodes, 1);
    }

    #[test]
    fn test_win_check_precedes_full_board_check() {
        // Full board where X completed a line on the last move.
        let result = search("XXXOOXOXO", Mark::O);
        assert_eq!(result.score, SCORE_LOSS);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_finds_immediate_win_for_x() {
        // X completes the top row at c1.
        let result = search("XX-OO----", Mark::X);
        assert_eq!(result.best_move, Some(Square::C1));
        assert_eq!(result.score, SCORE_LOSS);
    }

    #[test]
    fn test_finds_immediate_win_for_o() {
        // O completes the bottom row at c3; every other move loses to
        // X taking the a1-c3 diagonal.
        let result = search("X-X-X-OO-", Mark::O);
        assert_eq!(result.best_move, Some(Square::C3));
        assert_eq!(result.score, SCORE_WIN);
    }

    #[test]
    fn test_o_blocks_immediate_loss() {
        // X threatens the middle row at c2; blocking is O's only
        // non-losing reply and holds the draw.
        let result = search("O--XX----", Mark::O);
        assert_eq!(result.best_move, Some(Square::C2));
        assert_eq!(result.score, SCORE_DRAW);
    }

    #[test]
    fn test_x_blocks_immediate_loss() {
        // O threatens the top row at c1. The block also sets up a double
        // threat on the c1-a3 diagonal and the c file, winning for X.
        let result = search("OO--X---X", Mark::X);
        assert_eq!(result.best_move, Some(Square::C1));
        assert_eq!(result.score, SCORE_LOSS);
    }

    #[test]
    fn test_center_opening_is_answered_in_the_corner() {
        // Corner replies hold the draw, edge replies lose; a1 is the
        // lowest-indexed corner.
        let result = search("----X----", Mark::O);
        assert_eq!(result.best_move, Some(Square::A1));
        assert_eq!(result.score, SCORE_DRAW);
    }

    #[test]
    fn test_empty_board_search_visits_the_whole_tree() {
        let result = search("---------", Mark::X);
        // Every opening move holds a draw, so the first cell is kept.
        assert_eq!(result.best_move, Some(Square::A1));
        assert_eq!(result.score, SCORE_DRAW);
        // Root plus every reachable continuation.
        assert_eq!(result.n_nodes, 549_946);
    }

    #[test]
    fn test_caller_board_is_untouched() {
        let board: Board = "X---O----".parse().unwrap();
        let copy = board;
        let _ = Search::new().run(&board, Mark::X);
        assert_eq!(board, copy);
    }
}
