//! Custom widgets for the TUI.

mod board;

pub use board::BoardWidget;
