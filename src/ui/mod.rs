//! UI rendering module for Monkeydex
//!
//! This module contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components. Screens only read from `App`;
//! anything that changes state goes through key handling.

pub mod help_overlay;
pub mod menu;
pub mod record_detail;
pub mod record_list;
pub mod statistics;

pub use help_overlay::render as render_help_overlay;
pub use menu::{render_loading, render_menu, render_search, render_server_status};
pub use record_detail::render as render_record_detail;
pub use record_list::render_record_list;
pub use statistics::render as render_statistics;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, AppState};

/// Renders the UI based on the current application state
pub fn render(frame: &mut Frame, app: &App) {
    match &app.state {
        AppState::Loading => render_loading(frame),
        AppState::Menu => render_menu(frame, app),
        AppState::RecordList => render_record_list(frame, app),
        AppState::Search => render_search(frame, app),
        AppState::RecordDetail(_) => render_record_detail(frame, app),
        AppState::Statistics => render_statistics(frame, app),
        AppState::ServerStatus => render_server_status(frame, app),
    }

    if app.show_help {
        render_help_overlay(frame);
    }
}

/// Renders the one-line footer: a status message when present, else key hints
pub(crate) fn render_footer(frame: &mut Frame, app: &App, area: Rect, hints: &str) {
    let line = if app.busy {
        Line::from(Span::styled("Working...", Style::default().fg(Color::Yellow)))
    } else if let Some(message) = &app.message {
        Line::from(Span::styled(message.clone(), Style::default().fg(Color::Yellow)))
    } else {
        Line::from(Span::styled(
            hints.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Helper function to create a centered rect
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Formats a population with thousands separators
pub(crate) fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    /// Draws the full UI into an 80x24 buffer and returns its text
    pub(crate) fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_format_population() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(1000), "1,000");
        assert_eq!(format_population(117_303), "117,303");
        assert_eq!(format_population(1_234_567), "1,234,567");
    }

    #[test]
    fn test_centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(50, 10, area);
        assert_eq!(rect.width, 50);
        assert_eq!(rect.height, 10);
        assert_eq!(rect.x, 15);
        assert_eq!(rect.y, 7);
    }
}
