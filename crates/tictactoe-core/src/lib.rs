pub mod board;
pub mod constants;
pub mod game_state;
pub mod mark;
pub mod move_list;
pub mod perft;
pub mod search;
pub mod square;
pub mod types;
