//! Keyboard help modal, built from the menu table so the two stay in step

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::app::MENU_ITEMS;

/// Keys that work outside the numbered menu entries
const SHORTCUTS: [(&str, &str); 6] = [
    ("↑/k, ↓/j", "Move selection"),
    ("Esc", "Back / close"),
    ("r", "Reload list / pick again"),
    ("c", "Clear the record cache"),
    ("x", "Clear access statistics"),
    ("?, q", "Toggle help / quit"),
];

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)))
}

fn key_line(key: String, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", key), Style::default().fg(Color::Yellow)),
        Span::raw(description),
    ])
}

/// Help text: the menu entries with their digit keys, then the other shortcuts
fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![section("Menu")];
    lines.extend(
        MENU_ITEMS
            .iter()
            .enumerate()
            .map(|(i, item)| key_line((i + 1).to_string(), item.label())),
    );
    lines.push(Line::from(""));
    lines.push(section("Keys"));
    lines.extend(
        SHORTCUTS
            .iter()
            .map(|(key, description)| key_line(key.to_string(), description)),
    );
    lines
}

/// Draws the help modal over whatever screen is showing
pub fn render(frame: &mut Frame) {
    let lines = help_lines();
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect(46, height, frame.area());

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Left).block(
            Block::default()
                .title(" Help: Esc or ? to close ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        area,
    );
}
