//! Game state management for tic-tac-toe.
//!
//! This module provides the `GameState` struct which maintains the current
//! game position and handles core game logic such as validating and applying
//! moves, win and draw detection, and undo.

use crate::board::Board;
use crate::constants::MAX_PLY;
use crate::mark::Mark;
use crate::square::Square;

/// The status of a game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameStatus {
    /// The game is still being played.
    InProgress,
    /// The given mark has completed a winning line.
    Won(Mark),
    /// The board is full and neither mark has a line.
    Draw,
}

/// Represents the state of a tic-tac-toe game.
///
/// This is the core game state manager that handles move validation and
/// execution, win/draw detection, move history tracking, and undo.
///
/// Invalid moves are ignored rather than reported: `apply_move` on an
/// occupied cell, out of turn, or after the game has ended leaves the state
/// untouched and simply returns the current status. Front ends that want to
/// explain a rejection can ask `is_legal_move` first.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The current board position.
    board: Board,
    /// Which mark moves next. Meaningless once the game has ended.
    side_to_move: Mark,
    /// The current status, kept in sync by `apply_move`.
    status: GameStatus,
    /// Move history: (square, mark that moved).
    history: Vec<(Square, Mark)>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game on an empty board.
    ///
    /// X is the human player and always moves first.
    ///
    /// # Returns
    ///
    /// A new `GameState` in the starting position.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            side_to_move: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::with_capacity(MAX_PLY),
        }
    }

    /// Creates a new game state from an existing board position.
    ///
    /// This is useful for setting up specific positions for analysis. The
    /// status is recomputed from the board content, so an already decided
    /// position is recognized as such.
    ///
    /// # Arguments
    ///
    /// * `board` - The board position to start from
    /// * `side_to_move` - Which mark moves next
    ///
    /// # Returns
    ///
    /// A new `GameState` with the specified position.
    pub fn from_board(board: Board, side_to_move: Mark) -> Self {
        let status = Self::compute_status(&board);
        Self {
            board,
            side_to_move,
            status,
            history: Vec::with_capacity(MAX_PLY),
        }
    }

    /// Derives the status of a board position.
    ///
    /// The win check runs before the draw check so that a full board with a
    /// completed line counts as a win, not a draw.
    fn compute_status(board: &Board) -> GameStatus {
        if let Some(winner) = board.winner() {
            GameStatus::Won(winner)
        } else if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns a reference to the current board position.
    ///
    /// # Returns
    ///
    /// A reference to the `Board`
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which mark's turn it is to move.
    ///
    /// # Returns
    ///
    /// The `Mark` that moves next (X or O)
    pub fn side_to_move(&self) -> Mark {
        self.side_to_move
    }

    /// Returns the current status of the game.
    ///
    /// # Returns
    ///
    /// The `GameStatus` as of the last applied move
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Checks if the game has ended.
    ///
    /// # Returns
    ///
    /// `true` if the game has been won or drawn, `false` otherwise
    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Checks if placing a mark on the given square would be accepted.
    ///
    /// # Arguments
    ///
    /// * `sq` - The square to check
    ///
    /// # Returns
    ///
    /// `true` if the game is in progress and the square is empty
    pub fn is_legal_move(&self, sq: Square) -> bool {
        self.status == GameStatus::InProgress && self.board.is_square_empty(sq)
    }

    /// Attempts to place a mark and updates the game state.
    ///
    /// The move is ignored when the game has ended, when `mark` is not the
    /// side to move, or when the square is occupied; the state is left
    /// exactly as it was. An accepted move is recorded in the history, the
    /// status is recomputed (win check before draw check), and on an
    /// unfinished game the turn passes to the opposite mark.
    ///
    /// # Arguments
    ///
    /// * `sq` - The square to place the mark on
    /// * `mark` - The mark being placed
    ///
    /// # Returns
    ///
    /// The status after the attempt. For a rejected move this is the
    /// unchanged current status.
    pub fn apply_move(&mut self, sq: Square, mark: Mark) -> GameStatus {
        if self.status != GameStatus::InProgress
            || mark != self.side_to_move
            || !self.board.is_square_empty(sq)
        {
            return self.status;
        }

        self.history.push((sq, mark));
        self.board.set(sq, mark);

        if self.board.has_win(mark) {
            self.status = GameStatus::Won(mark);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.side_to_move = mark.opposite();
        }

        self.status
    }

    /// Resets the game to the starting position.
    ///
    /// The board is cleared, X is to move, and the history is discarded.
    /// Resetting an already fresh game is a no-op.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.side_to_move = Mark::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    /// Returns the last move played.
    ///
    /// # Returns
    ///
    /// `Some(Square)` of the most recent accepted move, or `None` if no
    /// moves have been played yet
    pub fn last_move(&self) -> Option<Square> {
        self.history.last().map(|(sq, _)| *sq)
    }

    /// Returns a reference to the move history.
    ///
    /// # Returns
    ///
    /// A slice of `(square, mark)` pairs in the order the moves were played
    pub fn move_history(&self) -> &[(Square, Mark)] {
        &self.history
    }

    /// Returns the number of moves played so far.
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    /// Undoes the last move if possible.
    ///
    /// Clearing the move's cell restores the previous position, the mover
    /// becomes the side to move again, and the game reopens if the undone
    /// move had ended it.
    ///
    /// # Returns
    ///
    /// `true` if a move was undone, `false` if there was nothing to undo
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some((sq, mark)) => {
                self.board.clear(sq);
                self.side_to_move = mark;
                self.status = GameStatus::InProgress;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut GameState, moves: &[usize]) {
        for (i, &index) in moves.iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            let sq = Square::from_usize(index).unwrap();
            game.apply_move(sq, mark);
        }
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.side_to_move(), Mark::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_game_over());
        assert_eq!(game.last_move(), None);
        assert_eq!(game.moves_played(), 0);
        assert_eq!(game.board().get_empty_count(), 9);
    }

    #[test]
    fn test_apply_move() {
        let mut game = GameState::new();
        let status = game.apply_move(Square::B2, Mark::X);
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(game.board().get(Square::B2), Mark::X);
        assert_eq!(game.side_to_move(), Mark::O);
        assert_eq!(game.last_move(), Some(Square::B2));
    }

    #[test]
    fn test_out_of_turn_move_is_ignored() {
        let mut game = GameState::new();

        // O cannot move first
        let status = game.apply_move(Square::B2, Mark::O);
        assert_eq!(status, GameStatus::InProgress);
        assert!(game.board().is_square_empty(Square::B2));
        assert_eq!(game.side_to_move(), Mark::X);
        assert_eq!(game.moves_played(), 0);

        // Empty is never a side to move
        game.apply_move(Square::B2, Mark::Empty);
        assert!(game.board().is_square_empty(Square::B2));
    }

    #[test]
    fn test_occupied_cell_move_is_ignored() {
        let mut game = GameState::new();
        game.apply_move(Square::A1, Mark::X);

        let status = game.apply_move(Square::A1, Mark::O);
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(game.board().get(Square::A1), Mark::X);
        assert_eq!(game.side_to_move(), Mark::O);
        assert_eq!(game.moves_played(), 1);
    }

    #[test]
    fn test_side_to_move_alternates() {
        let mut game = GameState::new();
        assert_eq!(game.side_to_move(), Mark::X);

        game.apply_move(Square::A1, Mark::X);
        assert_eq!(game.side_to_move(), Mark::O);

        game.apply_move(Square::B2, Mark::O);
        assert_eq!(game.side_to_move(), Mark::X);
    }

    #[test]
    fn test_x_wins_top_row() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4]);
        assert_eq!(game.status(), GameStatus::InProgress);

        let status = game.apply_move(Square::C1, Mark::X);
        assert_eq!(status, GameStatus::Won(Mark::X));
        assert!(game.is_game_over());
    }

    #[test]
    fn test_x_wins_diagonal() {
        let mut game = GameState::new();
        play(&mut game, &[0, 1, 4, 2, 8]);
        assert_eq!(game.status(), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_o_wins_middle_row() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 8, 5]);
        assert_eq!(game.status(), GameStatus::Won(Mark::O));
    }

    #[test]
    fn test_move_after_game_over_is_ignored() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(game.status(), GameStatus::Won(Mark::X));

        let status = game.apply_move(Square::C2, Mark::O);
        assert_eq!(status, GameStatus::Won(Mark::X));
        assert!(game.board().is_square_empty(Square::C2));
        assert_eq!(game.moves_played(), 5);
    }

    #[test]
    fn test_draw_on_ninth_move() {
        let mut game = GameState::new();
        play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6]);
        assert_eq!(game.status(), GameStatus::InProgress);

        let status = game.apply_move(Square::C3, Mark::X);
        assert_eq!(status, GameStatus::Draw);
        assert!(game.board().is_full());
    }

    #[test]
    fn test_win_on_ninth_move_beats_draw() {
        // The ninth move both fills the board and completes the top row.
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 5, 7, 6, 8]);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.board().get_empty_count(), 1);

        let status = game.apply_move(Square::C1, Mark::X);
        assert_eq!(status, GameStatus::Won(Mark::X));
        assert!(game.board().is_full());
    }

    #[test]
    fn test_reset() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        assert!(game.is_game_over());

        game.reset();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.side_to_move(), Mark::X);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.moves_played(), 0);
        assert_eq!(game.last_move(), None);

        // Resetting a fresh game changes nothing
        game.reset();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.side_to_move(), Mark::X);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_undo() {
        let mut game = GameState::new();
        game.apply_move(Square::A1, Mark::X);
        game.apply_move(Square::B2, Mark::O);

        assert!(game.undo());
        assert!(game.board().is_square_empty(Square::B2));
        assert_eq!(game.side_to_move(), Mark::O);
        assert_eq!(game.last_move(), Some(Square::A1));

        assert!(game.undo());
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.side_to_move(), Mark::X);
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn test_undo_when_empty() {
        let mut game = GameState::new();
        assert!(!game.undo());
        assert_eq!(game.side_to_move(), Mark::X);
    }

    #[test]
    fn test_undo_reopens_finished_game() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(game.status(), GameStatus::Won(Mark::X));

        assert!(game.undo());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.side_to_move(), Mark::X);
        assert!(game.board().is_square_empty(Square::C1));

        // The reopened game can be finished again
        let status = game.apply_move(Square::C1, Mark::X);
        assert_eq!(status, GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_is_legal_move() {
        let mut game = GameState::new();
        assert!(game.is_legal_move(Square::A1));

        game.apply_move(Square::A1, Mark::X);
        assert!(!game.is_legal_move(Square::A1));
        assert!(game.is_legal_move(Square::B2));
    }

    #[test]
    fn test_no_moves_are_legal_after_game_over() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        assert!(game.is_game_over());
        for sq in Square::iter() {
            assert!(!game.is_legal_move(sq));
        }
    }

    #[test]
    fn test_move_history() {
        let mut game = GameState::new();
        play(&mut game, &[4, 0, 8]);

        let history = game.move_history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0], (Square::B2, Mark::X));
        assert_eq!(history[1], (Square::A1, Mark::O));
        assert_eq!(history[2], (Square::C3, Mark::X));

        // Rejected moves leave no trace
        game.apply_move(Square::B2, Mark::O);
        assert_eq!(game.move_history().len(), 3);
    }

    #[test]
    fn test_from_board() {
        let board: Board = "XX-OO----".parse().unwrap();
        let game = GameState::from_board(board, Mark::X);
        assert_eq!(game.side_to_move(), Mark::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.move_history().len(), 0);

        // A decided position is recognized as such
        let board: Board = "XXXOO----".parse().unwrap();
        let game = GameState::from_board(board, Mark::O);
        assert_eq!(game.status(), GameStatus::Won(Mark::X));

        let board: Board = "XOXXXOOXO".parse().unwrap();
        let game = GameState::from_board(board, Mark::X);
        assert_eq!(game.status(), GameStatus::Draw);
    }
}
