//! Global constants

use crate::square::Square;
use crate::types::Score;

/// Maximum number of plies in a game (one mark per cell).
pub const MAX_PLY: usize = 9;

/// Score for a position where O has completed a line.
pub const SCORE_WIN: Score = 10;

/// Score for a position where X has completed a line.
pub const SCORE_LOSS: Score = -10;

/// Score for a full board with no completed line.
pub const SCORE_DRAW: Score = 0;

/// Infinity score for search algorithms.
pub const SCORE_INF: Score = 1000;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const WINNING_LINES: [[Square; 3]; 8] = [
    [Square::A1, Square::B1, Square::C1],
    [Square::A2, Square::B2, Square::C2],
    [Square::A3, Square::B3, Square::C3],
    [Square::A1, Square::A2, Square::A3],
    [Square::B1, Square::B2, Square::B3],
    [Square::C1, Square::C2, Square::C3],
    [Square::A1, Square::B2, Square::C3],
    [Square::C1, Square::B2, Square::A3],
];
