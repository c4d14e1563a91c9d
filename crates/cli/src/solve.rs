//! The `solve` subcommand: best move and outcome for a given position.

use colored::Colorize;
use num_format::{Locale, ToFormattedString};
use tictactoe_core::board::Board;
use tictactoe_core::constants::{SCORE_LOSS, SCORE_WIN};
use tictactoe_core::mark::Mark;
use tictactoe_core::search::Search;

use crate::game::GameState;

/// Solves a position given as a 9-character board string.
///
/// The side to move is taken from `side` when present, otherwise inferred
/// from the mark counts (X moves first, so X is on move when the counts are
/// equal and O when X leads by one). Prints the board, the side to move,
/// the best move, the game-theoretic outcome and the node count.
pub fn solve(position: &str, side: Option<&str>) -> Result<(), String> {
    let board: Board = position.parse().map_err(|e| format!("{e}"))?;

    let to_move = match side {
        Some(s) => parse_side(s)?,
        None => board.infer_side_to_move().ok_or_else(|| {
            format!(
                "Cannot infer the side to move ({} X marks vs {} O marks); pass --side",
                board.get_mark_count(Mark::X),
                board.get_mark_count(Mark::O)
            )
        })?,
    };

    let game = GameState::from_board(board, to_move);
    game.print();
    println!();

    let result = Search::new().run(game.board(), to_move);

    let best_move = result
        .best_move
        .map_or("--".to_string(), |sq| sq.to_string());
    let outcome = match result.score {
        SCORE_WIN => "O wins with optimal play".bright_yellow(),
        SCORE_LOSS => "X wins with optimal play".bright_green(),
        _ => "draw with optimal play".bright_cyan(),
    };

    println!("Side to move: {}", to_move.to_char());
    println!("Best move:    {}", best_move.bright_cyan());
    println!("Outcome:      {outcome}");
    println!(
        "Nodes:        {}",
        result.n_nodes.to_formatted_string(&Locale::en)
    );

    Ok(())
}

fn parse_side(s: &str) -> Result<Mark, String> {
    match s {
        "x" | "X" => Ok(Mark::X),
        "o" | "O" => Ok(Mark::O),
        _ => Err(format!("Invalid side '{s}': must be x or o")),
    }
}
