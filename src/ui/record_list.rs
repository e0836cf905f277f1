//! Record list screen rendering
//!
//! Renders every record sorted by name with its location and population,
//! plus a short summary of the catalog above the list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{format_population, render_footer};
use crate::app::App;
use crate::data::Record;

/// Color for a population figure (smaller = more alarming)
fn population_color(record: &Record) -> Color {
    if record.is_endangered() {
        Color::Red
    } else if record.population < 10_000 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Renders the record list screen
pub fn render_record_list(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Summary
            Constraint::Min(3),    // Records
            Constraint::Length(1), // Help text
        ])
        .split(area);

    render_summary(frame, app, chunks[0]);
    render_list(frame, app, chunks[1]);
    render_footer(
        frame,
        app,
        chunks[2],
        "↑/↓: move  Enter: details  r: reload  Esc: menu  q: quit",
    );
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            "ALL MONKEYS",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} species", app.records.len()),
            Style::default().fg(Color::White),
        ),
    ])];

    if let Some(stats) = &app.statistics {
        let mut spans = vec![Span::styled(
            format!(
                "Total population {}  Average {:.0}",
                format_population(stats.total_population),
                stats.average_population()
            ),
            Style::default().fg(Color::Gray),
        )];
        if let Some(most) = &stats.most_populous {
            spans.push(Span::styled(
                format!(
                    "  Most populous {} ({})",
                    most.name,
                    format_population(most.population)
                ),
                Style::default().fg(Color::Gray),
            ));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.records.is_empty() {
        let paragraph = Paragraph::new(Span::styled(
            "No monkeys available",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    // Keep the highlighted row on screen
    let visible = area.height.saturating_sub(2) as usize;
    let offset = if visible == 0 {
        0
    } else {
        app.list_index.saturating_sub(visible.saturating_sub(1))
    };

    let lines: Vec<Line> = app
        .records
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, record)| {
            let selected = i == app.list_index;
            let name_style = if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{:<22}", record.name), name_style),
                Span::styled(
                    format!("{:<36}", truncate(&record.location, 35)),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:>8}", format_population(record.population)),
                    Style::default().fg(population_color(record)),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Cuts `text` to at most `max` characters, marking the cut with an ellipsis
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
