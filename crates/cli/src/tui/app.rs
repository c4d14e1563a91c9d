//! Application state and main loop for the TUI.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use ratatui::DefaultTerminal;
use tictactoe_core::mark::Mark;
use tictactoe_core::search::{Search, SearchResult};
use tictactoe_core::square::Square;

use crate::game::GameState;

use super::event::{self, Event};
use super::render;

/// UI mode for handling different interaction states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal game play mode
    Normal,
    /// Confirming quit
    ConfirmQuit,
}

/// Main application state.
pub struct App {
    /// Current game state
    pub game: GameState,
    /// Pause before the computer's reply is revealed
    delay_ms: u64,
    /// Current UI mode
    pub ui_mode: UiMode,
    /// Cursor position on the board (0-2 for both row and col)
    pub cursor: (usize, usize),
    /// Whether the application should quit
    pub should_quit: bool,
    /// AI search result receiver
    ai_receiver: Option<Receiver<SearchResult>>,
    /// Whether the AI reply is pending
    pub ai_thinking: bool,
    /// Last AI search result for display
    pub last_ai_result: Option<SearchResult>,
    /// Suggested square from the last hint request
    pub hint: Option<Square>,
    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Creates a new App instance.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            game: GameState::new(),
            delay_ms,
            ui_mode: UiMode::Normal,
            cursor: (1, 1), // Start at center
            should_quit: false,
            ai_receiver: None,
            ai_thinking: false,
            last_ai_result: None,
            hint: None,
            status_message: None,
        }
    }

    /// Runs the main TUI loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> std::io::Result<()> {
        // Enable mouse capture
        crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture)?;

        loop {
            // Check for the AI reply
            self.check_ai_result();

            // Kick off the delayed reply when it's the computer's turn
            if !self.ai_thinking
                && !self.game.is_game_over()
                && self.game.side_to_move() == Mark::O
                && self.ui_mode == UiMode::Normal
            {
                self.start_ai_search();
            }

            // Draw the UI
            terminal.draw(|frame| render::render(frame, &self))?;

            // Handle events with timeout for responsive updates
            let timeout = if self.ai_thinking {
                Duration::from_millis(50)
            } else {
                Duration::from_millis(100)
            };

            if let Some(event) = event::poll_event(timeout)? {
                self.handle_event(event);
            }

            if self.should_quit {
                break;
            }
        }

        // Disable mouse capture on exit
        crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture)?;

        Ok(())
    }

    /// Handles an input event.
    fn handle_event(&mut self, event: Event) {
        match self.ui_mode {
            UiMode::Normal => self.handle_normal_event(event),
            UiMode::ConfirmQuit => self.handle_confirm_quit_event(event),
        }
    }

    /// Handles events in normal game mode.
    fn handle_normal_event(&mut self, event: Event) {
        match event {
            Event::ForceQuit => {
                self.should_quit = true;
            }
            Event::Quit => {
                self.ui_mode = UiMode::ConfirmQuit;
            }
            Event::CursorUp => {
                if self.cursor.0 > 0 {
                    self.cursor.0 -= 1;
                }
            }
            Event::CursorDown => {
                if self.cursor.0 < 2 {
                    self.cursor.0 += 1;
                }
            }
            Event::CursorLeft => {
                if self.cursor.1 > 0 {
                    self.cursor.1 -= 1;
                }
            }
            Event::CursorRight => {
                if self.cursor.1 < 2 {
                    self.cursor.1 += 1;
                }
            }
            Event::Select => {
                self.try_place_at_cursor();
            }
            Event::Click(row, col) => {
                if row < 3 && col < 3 {
                    self.cursor = (row, col);
                    self.try_place_at_cursor();
                }
            }
            Event::Undo => {
                self.undo_round();
            }
            Event::NewGame => {
                self.new_game();
            }
            Event::Hint => {
                self.show_hint();
            }
            _ => {}
        }
    }

    /// Handles events in quit confirmation mode.
    fn handle_confirm_quit_event(&mut self, event: Event) {
        match event {
            Event::ForceQuit | Event::Char('y') | Event::Char('Y') => {
                self.should_quit = true;
            }
            // Lowercase 'n' arrives as NewGame from the normal key map
            Event::NewGame | Event::Char('N') | Event::Quit => {
                self.ui_mode = UiMode::Normal;
            }
            _ => {}
        }
    }

    /// Tries to place the human's X at the current cursor position.
    fn try_place_at_cursor(&mut self) {
        if self.ai_thinking {
            self.status_message = Some("AI is thinking...".to_string());
            return;
        }

        if self.game.is_game_over() {
            self.status_message = Some("Game is over! Press N for a new game.".to_string());
            return;
        }

        if self.game.side_to_move() != Mark::X {
            return;
        }

        let sq = Square::from_usize_unchecked(self.cursor.0 * 3 + self.cursor.1);
        if self.game.is_legal_move(sq) {
            self.game.apply_move(sq, Mark::X);
            self.hint = None;
            self.status_message = None;
        } else {
            self.status_message = Some("Cell occupied".to_string());
        }
    }

    /// Undoes the last round (the computer's reply and the human's move).
    fn undo_round(&mut self) {
        if self.ai_thinking {
            self.status_message = Some("Cannot undo while AI is thinking".to_string());
            return;
        }

        let mut undone = false;
        for _ in 0..2 {
            if self.game.undo() {
                undone = true;
            } else {
                break;
            }
        }

        if undone {
            self.last_ai_result = None;
            self.hint = None;
            self.status_message = Some("Move undone".to_string());
        } else {
            self.status_message = Some("Nothing to undo".to_string());
        }
    }

    /// Starts a new game.
    fn new_game(&mut self) {
        // Drop any in-flight search; its reply belongs to the old game.
        self.ai_receiver = None;
        self.ai_thinking = false;
        self.game.reset();
        self.last_ai_result = None;
        self.hint = None;
        self.cursor = (1, 1);
        self.status_message = Some("New game started".to_string());
    }

    /// Suggests the engine's move for the human side.
    ///
    /// The search for X is instantaneous at this board size, so it runs
    /// inline rather than on a worker thread.
    fn show_hint(&mut self) {
        if self.ai_thinking {
            self.status_message = Some("AI is thinking...".to_string());
            return;
        }

        if self.game.is_game_over() {
            self.status_message = Some("Game is over!".to_string());
            return;
        }

        if self.game.side_to_move() != Mark::X {
            return;
        }

        if let Some(sq) = Search::new().run(self.game.board(), Mark::X).best_move {
            self.hint = Some(sq);
            self.status_message = Some(format!("Hint: {sq}"));
        }
    }

    /// Starts the delayed computer reply on a background thread.
    ///
    /// The worker sleeps for the configured delay, searches a copy of the
    /// board and sends the result back over the channel; the main loop
    /// polls for it each tick. The delay exists only so the human perceives
    /// their own move before the reply lands.
    fn start_ai_search(&mut self) {
        let board = *self.game.board();
        let delay = Duration::from_millis(self.delay_ms);

        let (tx, rx): (Sender<SearchResult>, Receiver<SearchResult>) = mpsc::channel();
        self.ai_receiver = Some(rx);
        self.ai_thinking = true;

        thread::spawn(move || {
            thread::sleep(delay);
            let result = Search::new().run(&board, Mark::O);
            let _ = tx.send(result);
        });
    }

    /// Checks for the AI reply and applies it.
    ///
    /// The reply goes through the same move-application path as human
    /// moves, so win/draw detection is not duplicated.
    fn check_ai_result(&mut self) {
        if let Some(ref rx) = self.ai_receiver
            && let Ok(result) = rx.try_recv()
        {
            self.ai_thinking = false;
            self.ai_receiver = None;

            if let Some(sq) = result.best_move {
                self.game.apply_move(sq, Mark::O);
            }
            self.last_ai_result = Some(result);
        }
    }
}
