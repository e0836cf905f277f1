//! Record detail screen rendering

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{format_population, render_footer};
use crate::app::App;
use crate::data::Record;

/// Renders the detail view for the selected record
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let lines = match &app.selected {
        Some(record) => detail_lines(record, app.cache().tracker().count(&record.name)),
        None => vec![Line::from(Span::styled(
            "No monkey selected",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let title = app
        .selected
        .as_ref()
        .map(|r| format!(" {} ", r.name))
        .unwrap_or_default();

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, chunks[0]);

    render_footer(frame, app, chunks[1], "r: another random  Esc: back  q: quit");
}

fn detail_lines(record: &Record, access_count: u64) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Yellow);
    let value = Style::default().fg(Color::White);

    let mut population = vec![
        Span::styled("Population   ", label),
        Span::styled(format_population(record.population), value),
    ];
    if record.is_endangered() {
        population.push(Span::styled(
            "  ENDANGERED",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    vec![
        Line::from(vec![
            Span::styled("Location     ", label),
            Span::styled(record.location.clone(), value),
        ]),
        Line::from(population),
        Line::from(vec![
            Span::styled("Coordinates  ", label),
            Span::styled(record.coordinates().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Image        ", label),
            Span::styled(record.image_ref.clone(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(vec![
            Span::styled("Viewed       ", label),
            Span::styled(
                format!("{} time{}", access_count, if access_count == 1 { "" } else { "s" }),
                value,
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(record.details.clone(), Style::default().fg(Color::Gray))),
    ]
}
