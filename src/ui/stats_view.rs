use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{StatsScreen, SPINNER};

pub(crate) fn render(frame: &mut Frame, stats: &StatsScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Body
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let header = Paragraph::new("Game Statistics")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));
    frame.render_widget(header, chunks[0]);

    let (body, controls) = match stats {
        StatsScreen::Running {
            games_done,
            total,
            spinner_frame,
            ..
        } => {
            let spinner = SPINNER[*spinner_frame % SPINNER.len()];
            let lines = vec![
                Line::from(""),
                Line::from(format!("Gathering statistics {spinner}")),
                Line::from(""),
                Line::from(format!("{games_done}/{total} games finished")),
            ];
            (lines, "q: quit")
        }
        StatsScreen::Finished { record, message } => {
            let mut lines = vec![Line::from("")];
            match record {
                Some(record) => {
                    lines.push(Line::from(format!("Total games: {}", record.total_games)));
                    lines.push(Line::from(format!(
                        "Bot win rate:    {:>6.1}%",
                        record.bot_win_rate
                    )));
                    lines.push(Line::from(format!(
                        "Player win rate: {:>6.1}%",
                        record.player_win_rate
                    )));
                    lines.push(Line::from(format!(
                        "Tie rate:        {:>6.1}%",
                        record.tie_rate
                    )));
                }
                None => lines.push(Line::from("No results available.")),
            }
            lines.push(Line::from(""));
            lines.push(Line::from(message.as_str()));
            (lines, "Enter/Esc: menu  |  q: quit")
        }
    };

    let body = Paragraph::new(body)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Statistics"));
    frame.render_widget(body, chunks[1]);

    let controls = Paragraph::new(controls)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(controls, chunks[2]);
}
