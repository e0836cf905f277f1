//! Main menu, search prompt, loading and server status screens

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{centered_rect, render_footer};
use crate::app::{App, MENU_ITEMS};

const BANNER: [&str; 4] = [
    r"  __  __             _              _           ",
    r" |  \/  | ___  _ __ | | _____ _   _| |_____  __ ",
    r" | |\/| |/ _ \| '_ \| |/ / _ \ | | | / _ \ \/ / ",
    r" |_|  |_|\___/|_| |_|_|\_\___/\_, |_\___/_/\_\ ",
];

/// Renders a loading message while data is being fetched
pub fn render_loading(frame: &mut Frame) {
    let area = frame.area();

    // Center the loading message vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new("Loading monkey data...")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

/// Renders the main menu
pub fn render_menu(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BANNER.len() as u16 + 2),
            Constraint::Min(MENU_ITEMS.len() as u16 + 2),
            Constraint::Length(1),
        ])
        .split(area);

    let mut banner: Vec<Line> = BANNER
        .iter()
        .map(|line| {
            Line::from(Span::styled(
                *line,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    banner.push(Line::from(Span::styled(
        status_line(app),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(
        Paragraph::new(banner).alignment(Alignment::Center),
        chunks[0],
    );

    let items: Vec<Line> = MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let selected = i == app.menu_index;
            let marker = if selected { "▶ " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::Yellow)),
                Span::styled(item.label(), style),
            ])
        })
        .collect();

    let menu = Paragraph::new(items).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(menu, chunks[1]);

    render_footer(
        frame,
        app,
        chunks[2],
        "1-6/Enter: select  c: clear cache  x: clear stats  ?: help  q: quit",
    );
}

/// Cache and server summary shown under the banner
fn status_line(app: &App) -> String {
    let cache = app.cache();
    let cache_part = match cache.last_refresh() {
        Some(at) if cache.is_valid() => format!(
            "cache: fresh since {} UTC",
            at.format("%H:%M:%S")
        ),
        Some(_) => "cache: expired".to_string(),
        None => "cache: empty".to_string(),
    };
    let server_part = match app.server_available {
        Some(true) => "server: online",
        Some(false) => "server: offline",
        None => "server: unknown",
    };
    format!("{}  |  {}", cache_part, server_part)
}

/// Renders the name prompt
pub fn render_search(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let prompt_area = centered_rect(50, 3, chunks[0]);
    let prompt = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Yellow)),
        Span::raw(app.search_input.clone()),
        Span::styled("█", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .title(" Search by name ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(prompt, prompt_area);

    render_footer(frame, app, chunks[1], "Enter: search  Esc: back");
}

/// Renders the result of the last server check as a dialog
pub fn render_server_status(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let dialog_area = centered_rect(44, 7, area);

    let (text, color) = match app.server_available {
        Some(true) => ("Server connection: OK", Color::Green),
        Some(false) => ("Server connection: FAILED", Color::Red),
        None => ("Server connection: not checked", Color::Gray),
    };

    let lines = vec![
        Line::from(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Cache window: {} min", app.cache().expiry().num_minutes()),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter or Esc to return",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(" Server ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        ),
        dialog_area,
    );
}

#[cfg(test)]
mod tests {
    use crate::app::tests::create_test_app;
    use crate::app::AppState;
    use crate::ui::tests::render_to_string;

    #[test]
    fn test_menu_lists_all_entries() {
        let (mut app, _provider) = create_test_app();
        app.state = AppState::Menu;

        let content = render_to_string(&app);

        assert!(content.contains("List all monkeys"));
        assert!(content.contains("Search by name"));
        assert!(content.contains("Check server connection"));
        assert!(content.contains("cache: empty"));
    }

    #[test]
    fn test_loading_screen() {
        let (app, _provider) = create_test_app();
        let content = render_to_string(&app);
        assert!(content.contains("Loading monkey data..."));
    }

    #[test]
    fn test_search_prompt_echoes_input() {
        let (mut app, _provider) = create_test_app();
        app.state = AppState::Search;
        app.search_input = "howler".to_string();

        let content = render_to_string(&app);
        assert!(content.contains("howler"));
    }

    #[test]
    fn test_server_status_dialog() {
        let (mut app, _provider) = create_test_app();
        app.state = AppState::ServerStatus;
        app.server_available = Some(false);

        let content = render_to_string(&app);
        assert!(content.contains("FAILED"));
        assert!(content.contains("Cache window: 30 min"));
    }

    #[test]
    fn test_footer_prefers_message() {
        let (mut app, _provider) = create_test_app();
        app.state = AppState::Menu;
        app.message = Some("Record cache cleared".to_string());

        let content = render_to_string(&app);
        assert!(content.contains("Record cache cleared"));
        assert!(!content.contains("c: clear cache"));
    }
}
