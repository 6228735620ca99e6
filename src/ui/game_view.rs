use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{Board, Cell, COLS, ROWS};

use super::app::{GameMode, GameScreen};

pub(crate) fn render(frame: &mut Frame, game: &GameScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game, chunks[1]);
    render_message(frame, &game.message, chunks[2]);
    render_controls(frame, game, chunks[3]);
}

fn render_header(frame: &mut Frame, game: &GameScreen, area: ratatui::layout::Rect) {
    let (status, color) = if game.state.is_terminal() {
        (format!("Game Over  |  {}", game.mode_name()), Color::White)
    } else {
        let piece = game.state.current();
        let color = match piece {
            crate::game::Piece::Player => Color::Yellow,
            crate::game::Piece::Bot => Color::Red,
        };
        (
            format!("Current turn: {}  |  {}", piece.name(), game.mode_name()),
            color,
        )
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));
    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game: &GameScreen, area: ratatui::layout::Rect) {
    let board: &Board = game.state.board();
    let show_selector = game.mode == GameMode::HumanVsBot;
    let mut lines = Vec::new();

    // Column numbers, with the selected column highlighted.
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if show_selector && col == game.selected_column {
            col_line.push(Span::styled(
                format!(" {col} "),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {col} ")));
        }
    }
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔═════════════════════╗"));

    // Row 0 is the bottom of the board, so render top-down.
    for row in (0..ROWS).rev() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..COLS {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Player => (" ● ", Color::Yellow),
                Cell::Bot => (" ● ", Color::Red),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚═════════════════════╝"));

    if show_selector {
        let mut indicator = vec![Span::raw("   ")];
        for col in 0..COLS {
            if col == game.selected_column {
                indicator.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator.push(Span::raw("   "));
            }
        }
        lines.push(Line::from(indicator));
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, game: &GameScreen, area: ratatui::layout::Rect) {
    let text = match game.mode {
        GameMode::HumanVsBot => "←/→: move  |  Enter: drop  |  r: restart  |  Esc: menu  |  q: quit",
        GameMode::BotVsBot => "r: restart  |  Esc: menu  |  q: quit",
    };
    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}
