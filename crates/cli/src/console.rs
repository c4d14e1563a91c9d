//! Line-oriented console mode for plain terminals.

use std::thread;
use std::time::Duration;

use num_format::{Locale, ToFormattedString};
use rustyline::{DefaultEditor, error::ReadlineError};
use tictactoe_core::game_state::GameStatus;
use tictactoe_core::mark::Mark;
use tictactoe_core::search::Search;
use tictactoe_core::square::Square;

use crate::game::GameState;

/// Runs the console read-eval loop.
///
/// The human enters cells in algebraic notation (`a1`..`c3`) or one of the
/// commands listed by `help`. After an accepted human move the computer
/// replies on the same line-oriented cadence, delayed by `delay_ms` so the
/// human perceives their own move first.
pub fn run(delay_ms: u64) -> Result<(), String> {
    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;
    let mut game = GameState::new();
    let mut search = Search::new();

    println!("Tic-Tac-Toe: you play X, the computer plays O.");
    println!("Enter a cell like b2, or a command (help, hint, undo, new, quit).");

    loop {
        println!();
        game.print();
        println!();

        if game.is_game_over() {
            match rl.readline("Play again? (y/n) ") {
                Ok(line) => {
                    if matches!(line.trim(), "y" | "Y" | "yes") {
                        game.reset();
                        continue;
                    }
                    break;
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    println!("Error: {err:?}");
                    break;
                }
            }
        }

        let readline = rl.readline("> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                let cmd = line.trim();
                if cmd.is_empty() {
                    continue;
                }

                match cmd {
                    "help" | "h" => print_help(),
                    "hint" | "i" => {
                        if let Some(sq) = search.run(game.board(), Mark::X).best_move {
                            println!("Hint: try {sq}");
                        }
                    }
                    "undo" | "u" => {
                        // Take back the computer's reply and the human move
                        // before it, so the human is on move again.
                        let mut undone = false;
                        for _ in 0..2 {
                            if game.undo() {
                                undone = true;
                            } else {
                                break;
                            }
                        }
                        if !undone {
                            println!("Nothing to undo.");
                        }
                    }
                    "new" | "n" => game.reset(),
                    "quit" | "q" => break,
                    _ => match cmd.parse::<Square>() {
                        Ok(sq) => {
                            if !game.is_legal_move(sq) {
                                println!("Illegal move: {cmd}");
                                continue;
                            }
                            let status = game.apply_move(sq, Mark::X);
                            if status != GameStatus::InProgress {
                                continue;
                            }

                            thread::sleep(Duration::from_millis(delay_ms));
                            let result = search.run(game.board(), Mark::O);
                            if let Some(reply) = result.best_move {
                                game.apply_move(reply, Mark::O);
                                println!(
                                    "Computer plays {} ({} nodes)",
                                    reply,
                                    result.n_nodes.to_formatted_string(&Locale::en)
                                );
                            }
                        }
                        Err(_) => println!("Unknown command: {cmd} (type 'help' for commands)"),
                    },
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {err:?}");
                break;
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  a1..c3   place your X on that cell");
    println!("  hint     suggest a move for you");
    println!("  undo     take back the last round");
    println!("  new      start a new game");
    println!("  quit     leave the game");
}
