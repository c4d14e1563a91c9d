//! Game state management for the tic-tac-toe CLI.
//!
//! This module provides the `GameState` struct which wraps the core
//! game state and adds CLI-specific display capabilities.

use colored::Colorize;
use tictactoe_core::board::Board;
use tictactoe_core::game_state::{self, GameStatus};
use tictactoe_core::mark::Mark;
use tictactoe_core::square::Square;

/// Represents the state of a tic-tac-toe game with CLI-specific features.
///
/// This is a thin wrapper around the core `GameState` that adds colored
/// terminal display and the status strings shared by the front ends.
/// X is the human player, O is the computer.
pub struct GameState {
    /// Core game state with history and undo support
    core: game_state::GameState,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game on an empty board with X (the human) to move.
    pub fn new() -> Self {
        Self {
            core: game_state::GameState::new(),
        }
    }

    /// Creates a new game state from an existing board position.
    ///
    /// This is used by the `solve` subcommand to analyze arbitrary
    /// positions. A position that is already decided is recognized as such.
    ///
    /// # Arguments
    /// * `board` - The board position to start from
    /// * `side_to_move` - Which mark moves next
    ///
    /// # Returns
    /// A new `GameState` with the specified position
    pub fn from_board(board: Board, side_to_move: Mark) -> Self {
        Self {
            core: game_state::GameState::from_board(board, side_to_move),
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        self.core.board()
    }

    /// Returns which mark's turn it is to move.
    pub fn side_to_move(&self) -> Mark {
        self.core.side_to_move()
    }

    /// Returns the current status of the game.
    pub fn status(&self) -> GameStatus {
        self.core.status()
    }

    /// Checks if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.core.is_game_over()
    }

    /// Checks if placing a mark on the given square would be accepted.
    pub fn is_legal_move(&self, sq: Square) -> bool {
        self.core.is_legal_move(sq)
    }

    /// Attempts to place a mark and updates the game state.
    ///
    /// Invalid attempts (occupied cell, out of turn, finished game) are
    /// silently ignored by the core; the returned status tells the front
    /// end what the game looks like afterwards.
    pub fn apply_move(&mut self, sq: Square, mark: Mark) -> GameStatus {
        self.core.apply_move(sq, mark)
    }

    /// Undoes the last move if possible.
    ///
    /// # Returns
    /// `true` if a move was undone, `false` if there was nothing to undo
    pub fn undo(&mut self) -> bool {
        self.core.undo()
    }

    /// Resets the game to the starting position.
    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Returns the last move played.
    pub fn last_move(&self) -> Option<Square> {
        self.core.last_move()
    }

    /// Returns the move history as `(square, mark)` pairs.
    pub fn move_history(&self) -> &[(Square, Mark)] {
        self.core.move_history()
    }

    /// Returns the number of moves played so far.
    pub fn moves_played(&self) -> usize {
        self.core.moves_played()
    }

    /// Returns the status line for the current state.
    ///
    /// These are the strings every front end announces: whose turn it is
    /// while the game runs, and the result once it has ended.
    pub fn status_line(&self) -> &'static str {
        match self.status() {
            GameStatus::InProgress => {
                if self.side_to_move() == Mark::X {
                    "Your turn (X)"
                } else {
                    "AI thinking..."
                }
            }
            GameStatus::Won(Mark::X) => "You win!",
            GameStatus::Won(_) => "AI wins!",
            GameStatus::Draw => "It's a draw!",
        }
    }

    /// Prints a colored representation of the board to the terminal.
    ///
    /// This is designed for human players using a terminal interface.
    pub fn print(&self) {
        let board = self.core.board();
        let last_move = self.core.last_move();
        let in_progress = !self.is_game_over();

        // Header
        println!("      a   b   c");
        println!("    ┌───┬───┬───┐");

        // Board rows
        for rank in 0..3 {
            print!("  {} │", rank + 1);

            for file in 0..3 {
                let sq = Square::from_usize_unchecked(rank * 3 + file);
                let mark = board.get(sq);
                let is_last_move = Some(sq) == last_move;

                let symbol = match mark {
                    Mark::X if is_last_move => " X ".on_bright_black().bright_green(),
                    Mark::O if is_last_move => " O ".on_bright_black().bright_yellow(),
                    Mark::X => " X ".bright_green(),
                    Mark::O => " O ".bright_yellow(),
                    Mark::Empty if in_progress => " · ".bright_cyan(),
                    Mark::Empty => "   ".black(),
                };
                print!("{symbol}│");
            }

            // Side information
            match rank {
                0 => {
                    let line = self.status_line();
                    let status = match self.status() {
                        GameStatus::InProgress if self.side_to_move() == Mark::X => {
                            line.bright_green()
                        }
                        GameStatus::InProgress => line.bright_yellow(),
                        GameStatus::Won(Mark::X) => line.bright_green(),
                        GameStatus::Won(_) => line.bright_yellow(),
                        GameStatus::Draw => line.bright_cyan(),
                    };
                    println!("   {status}");
                }
                1 => println!("   Moves: {}", self.moves_played()),
                2 => {
                    if self.is_game_over() {
                        println!("   {}", "*** Game Over ***".bright_red());
                    } else {
                        println!();
                    }
                }
                _ => println!(),
            }

            if rank < 2 {
                println!("    ├───┼───┼───┤");
            }
        }

        // Footer
        println!("    └───┴───┴───┘");
    }
}
