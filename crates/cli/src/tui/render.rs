//! Rendering logic for the TUI.

use num_format::{Locale, ToFormattedString};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictactoe_core::game_state::GameStatus;
use tictactoe_core::mark::Mark;

use super::app::{App, UiMode};
use super::widgets::BoardWidget;

/// Main render function.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: title, content, help bar
    let main_layout = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(12),   // Content
        Constraint::Length(3), // Help bar
    ])
    .split(area);

    render_title(frame, main_layout[0]);
    render_content(frame, main_layout[1], app);
    render_help_bar(frame, main_layout[2], app);

    // Render overlays based on UI mode
    match app.ui_mode {
        UiMode::ConfirmQuit => render_quit_dialog(frame),
        UiMode::Normal => {}
    }
}

/// Renders the title bar.
fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Tic-Tac-Toe ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(title, area);
}

/// Renders the main content area (board + info panel).
fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let content_layout = Layout::horizontal([
        Constraint::Length(20), // Board area
        Constraint::Min(24),    // Info panel
    ])
    .split(area);

    render_board(frame, content_layout[0], app);
    render_info_panel(frame, content_layout[1], app);
}

/// Renders the game board.
fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Board ");

    let inner_area = board_block.inner(area);
    frame.render_widget(board_block, area);

    let board_widget = BoardWidget::new(app.game.board())
        .cursor(app.cursor.0, app.cursor.1)
        .last_move(app.game.last_move())
        .hint(app.hint)
        .show_open_cells(!app.game.is_game_over());

    frame.render_widget(board_widget, inner_area);
}

/// Renders the information panel.
fn render_info_panel(frame: &mut Frame, area: Rect, app: &App) {
    let info_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Info ");

    let inner_area = info_block.inner(area);
    frame.render_widget(info_block, area);

    let mut lines = Vec::new();

    lines.push(Line::from(""));

    // Turn / result indicator
    let status_style = match app.game.status() {
        GameStatus::InProgress if app.game.side_to_move() == Mark::X => {
            Style::default().fg(Color::Green)
        }
        GameStatus::InProgress => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::SLOW_BLINK),
        GameStatus::Won(Mark::X) => Style::default().fg(Color::Green),
        GameStatus::Won(_) => Style::default().fg(Color::Yellow),
        GameStatus::Draw => Style::default().fg(Color::Cyan),
    };
    lines.push(Line::from(Span::styled(
        app.game.status_line(),
        status_style,
    )));
    lines.push(Line::from(""));

    // Game info
    lines.push(Line::from(vec![
        Span::raw("Moves: "),
        Span::styled(
            format!("{}", app.game.moves_played()),
            Style::default().fg(Color::Cyan),
        ),
    ]));

    // Last move
    if let Some(last_sq) = app.game.last_move() {
        lines.push(Line::from(vec![
            Span::raw("Last:  "),
            Span::styled(format!("{last_sq}"), Style::default().fg(Color::Magenta)),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::raw("Last:  "),
            Span::styled("--", Style::default().fg(Color::DarkGray)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from("─".repeat(inner_area.width as usize)));

    // Move history
    let history = app.game.move_history();
    if !history.is_empty() {
        lines.push(Line::from(Span::styled(
            "History:",
            Style::default().fg(Color::Cyan),
        )));

        // Format moves with colors: green for X, yellow for O
        let max_width = inner_area.width.saturating_sub(2) as usize;
        let mut current_spans: Vec<Span> = vec![Span::raw(" ")];
        let mut current_len = 1usize;

        for (sq, mark) in history {
            let move_str = format!("{sq} ");
            let move_len = move_str.len();

            if current_len + move_len > max_width && current_len > 1 {
                lines.push(Line::from(current_spans));
                current_spans = vec![Span::raw(" ")];
                current_len = 1;
            }

            let color = if *mark == Mark::X {
                Color::Green
            } else {
                Color::Yellow
            };
            current_spans.push(Span::styled(move_str, Style::default().fg(color)));
            current_len += move_len;
        }

        if current_len > 1 {
            lines.push(Line::from(current_spans));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from("─".repeat(inner_area.width as usize)));
    lines.push(Line::from(""));

    // AI status
    if app.ai_thinking {
        lines.push(Line::from(Span::styled(
            "AI Thinking...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::SLOW_BLINK),
        )));
    } else if let Some(ref result) = app.last_ai_result {
        lines.push(Line::from(Span::styled(
            "Last AI Search:",
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::from(vec![
            Span::raw("  Eval:  "),
            Span::styled(
                format!("{:+}", result.score),
                Style::default().fg(if result.score >= 0 {
                    Color::Green
                } else {
                    Color::Red
                }),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  Nodes: "),
            Span::styled(
                result.n_nodes.to_formatted_string(&Locale::en),
                Style::default().fg(Color::White),
            ),
        ]));
    }

    // Game over status
    if app.game.is_game_over() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "*** Game Over ***",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));

        let result_style = match app.game.status() {
            GameStatus::Won(Mark::X) => Style::default().fg(Color::Green),
            GameStatus::Won(_) => Style::default().fg(Color::Yellow),
            _ => Style::default().fg(Color::Cyan),
        };
        lines.push(Line::from(Span::styled(
            app.game.status_line(),
            result_style,
        )));
    }

    // Status message
    if let Some(ref msg) = app.status_message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            msg.as_str(),
            Style::default().fg(Color::Gray),
        )));
    }

    let info = Paragraph::new(lines);
    frame.render_widget(info, inner_area);
}

/// Renders the help bar at the bottom.
fn render_help_bar(frame: &mut Frame, area: Rect, app: &App) {
    let help_items = if app.ai_thinking {
        vec![("", "AI is thinking...")]
    } else {
        vec![
            ("Enter", "Move"),
            ("U", "Undo"),
            ("N", "New"),
            ("I", "Hint"),
            ("Q", "Quit"),
        ]
    };

    let spans: Vec<Span> = help_items
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(
                    format!(" [{key}] "),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ),
                Span::raw(format!("{desc} ")),
            ]
        })
        .collect();

    let help = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(help, area);
}

/// Renders the quit confirmation dialog.
fn render_quit_dialog(frame: &mut Frame) {
    let area = centered_rect(40, 15, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quit Tic-Tac-Toe?",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press Y to quit, N to cancel"),
    ];

    let dialog = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Confirm "),
        );
    frame.render_widget(dialog, area);
}

/// Creates a centered rectangle with the given percentage of the parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
