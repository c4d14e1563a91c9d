//! TUI (Terminal User Interface) module for the tic-tac-toe CLI.
//!
//! This module provides a full-featured terminal interface using ratatui,
//! supporting keyboard navigation, mouse input, and real-time game updates.

mod app;
mod event;
mod render;
mod widgets;

use app::App;

/// Runs the TUI, handling user input and game state.
pub fn run(delay_ms: u64) -> Result<(), String> {
    let app = App::new(delay_ms);

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();

    result.map_err(|e| e.to_string())
}
