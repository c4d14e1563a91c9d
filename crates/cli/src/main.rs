mod console;
mod game;
mod solve;
mod tui;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
struct GameParams {
    /// Pause in milliseconds before the computer's reply is revealed
    #[arg(long, default_value = "500")]
    delay_ms: u64,
}

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    #[command(flatten)]
    game_params: GameParams,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Print the best move for a given position
    Solve {
        /// 9-character board string over X/O/- from a1 to c3 (e.g. "XX-OO----")
        #[arg()]
        position: String,

        /// Side to move (x or o); inferred from the mark counts when omitted
        #[arg(long)]
        side: Option<String>,
    },
    /// Play in line-oriented console mode
    Console {
        #[command(flatten)]
        game_params: GameParams,
    },
}

fn main() {
    let args = Cli::parse();
    match args.command {
        Some(SubCommands::Solve { position, side }) => {
            if let Err(e) = solve::solve(&position, side.as_deref()) {
                eprintln!("Error solving position: {e}");
                std::process::exit(1);
            }
        }
        Some(SubCommands::Console { game_params }) => {
            if let Err(e) = console::run(game_params.delay_ms) {
                eprintln!("Console error: {e}");
                std::process::exit(1);
            }
        }
        None => {
            if let Err(e) = tui::run(args.game_params.delay_ms) {
                eprintln!("Failed to initialize UI: {e}");
                std::process::exit(1);
            }
        }
    }
}
