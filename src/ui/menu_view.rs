use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::MENU_ITEMS;

pub(crate) fn render(frame: &mut Frame, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Menu
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let header = Paragraph::new("Welcome to Connect Four!")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));
    frame.render_widget(header, chunks[0]);

    let mut lines = vec![Line::from("")];
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let line = if i == selected {
            Line::from(Span::styled(
                format!("> {item}"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(format!("  {item}"))
        };
        lines.push(line);
    }

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Menu"));
    frame.render_widget(menu, chunks[1]);

    let controls = Paragraph::new("Up/Down: select  |  Enter: confirm  |  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(controls, chunks[2]);
}
