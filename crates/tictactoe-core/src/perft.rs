use crate::board::Board;
use crate::mark::Mark;
use crate::move_list::MoveList;
use crate::types::Depth;

/// Executes a perft run starting from the empty board.
///
/// Counts move paths of exactly `depth` plies, X moving first. Paths that
/// reach a decided position before the horizon are not extended and not
/// counted, so the figures double as a check on win detection and move
/// generation together.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the empty board. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The number of `depth`-ply move paths.
pub fn perft_root(depth: Depth) -> u64 {
    let board = Board::new();
    perft(&board, Mark::X, depth)
}

fn perft(board: &Board, to_move: Mark, depth: Depth) -> u64 {
    if depth == 0 {
        return 1;
    }
    if board.winner().is_some() {
        return 0;
    }

    let move_list = MoveList::new(board);
    let mut nodes = 0;
    for &sq in move_list.iter() {
        let mut next = *board;
        next.set(sq, to_move);
        nodes += perft(&next, to_move.opposite(), depth - 1);
    }
    nodes
}
