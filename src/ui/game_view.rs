use crate::game::{BoardState, GameState, Grid, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    game_mode: &str,
    advisor_available: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Board + matrices
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(24)])
        .split(chunks[1]);

    render_header(frame, game_state, game_mode, chunks[0]);
    render_board(frame, game_state.board(), selected_column, body[0]);
    render_matrices(frame, game_state.board(), body[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, game_mode, advisor_available, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, game_mode: &str, area: Rect) {
    let current_player = game_state.current_player();

    let status = if game_state.is_terminal() {
        format!("Game Over  |  {}", game_mode)
    } else {
        format!("Current Player: {}  |  {}", current_player.name(), game_mode)
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(current_player))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect 4"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, board: &BoardState, selected_column: usize, area: Rect) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    for row in board.gameplay() {
        let mut row_spans = vec![Span::raw("  ║")];
        for &cell in row {
            let span = match Player::from_id(cell) {
                Some(player) => Span::styled(" ● ", Style::default().fg(player_color(player))),
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
            };
            row_spans.push(span);
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

/// Text rows for one titled matrix.
fn matrix_lines<'a>(title: &'a str, grid: &Grid, style: Style) -> Vec<Line<'a>> {
    let mut lines = Vec::with_capacity(ROWS + 1);
    lines.push(Line::from(Span::styled(
        format!("{title}:"),
        style.add_modifier(Modifier::BOLD),
    )));
    for row in grid {
        let text = row
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(text));
    }
    lines
}

fn render_matrices(frame: &mut Frame, board: &BoardState, area: Rect) {
    let mut lines = matrix_lines("Gameplay", board.gameplay(), Style::default());
    lines.extend(matrix_lines(
        "Red Scorecard",
        board.red_scorecard(),
        Style::default().fg(Color::Red),
    ));
    lines.extend(matrix_lines(
        "Yellow Scorecard",
        board.yellow_scorecard(),
        Style::default().fg(Color::Yellow),
    ));

    let widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Matrices"));
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, game_mode: &str, advisor_available: bool, area: Rect) {
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  N: New Game  |  A: Play AI  |  Q: Quit");
    let advisor = if advisor_available {
        Span::styled("advisor online", Style::default().fg(Color::Green))
    } else {
        Span::styled("advisor offline (random moves)", Style::default().fg(Color::DarkGray))
    };
    let line2 = Line::from(vec![Span::raw(format!("{game_mode}  |  ")), advisor]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
