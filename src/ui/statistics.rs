//! Statistics screen rendering
//!
//! Left panel: catalog statistics. Right panel: the access ranking kept by
//! the tracker, read live on every frame.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{format_population, render_footer};
use crate::app::App;
use crate::stats::Statistics;

/// Medal shown next to the first three ranks
fn medal(rank: usize) -> &'static str {
    match rank {
        1 => "🥇",
        2 => "🥈",
        3 => "🥉",
        _ => "  ",
    }
}

/// Renders the statistics screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[0]);

    render_catalog_panel(frame, app.statistics.as_ref(), columns[0]);
    render_access_panel(frame, app, columns[1]);
    render_footer(frame, app, rows[1], "x: clear access stats  Esc: menu  q: quit");
}

fn render_catalog_panel(frame: &mut Frame, stats: Option<&Statistics>, area: Rect) {
    let label = Style::default().fg(Color::Yellow);
    let value = Style::default().fg(Color::White);

    let lines = match stats {
        Some(stats) => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("Species        ", label),
                    Span::styled(stats.total_species.to_string(), value),
                ]),
                Line::from(vec![
                    Span::styled("Population     ", label),
                    Span::styled(format_population(stats.total_population), value),
                ]),
                Line::from(vec![
                    Span::styled("Average        ", label),
                    Span::styled(format!("{:.0}", stats.average_population()), value),
                ]),
            ];
            if let Some(most) = &stats.most_populous {
                lines.push(Line::from(vec![
                    Span::styled("Most populous  ", label),
                    Span::styled(
                        format!("{} ({})", most.name, format_population(most.population)),
                        value,
                    ),
                ]));
            }
            if let Some(least) = &stats.least_populous {
                lines.push(Line::from(vec![
                    Span::styled("Least populous ", label),
                    Span::styled(
                        format!("{} ({})", least.name, format_population(least.population)),
                        value,
                    ),
                ]));
            }
            lines.push(Line::from(vec![
                Span::styled("Endangered     ", label),
                Span::styled(
                    stats.endangered_count.to_string(),
                    Style::default().fg(Color::Red),
                ),
            ]));

            if !stats.regional_distribution.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Regions",
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                for (region, count) in stats.regions_by_count() {
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {:<34}", region), Style::default().fg(Color::Gray)),
                        Span::styled(count.to_string(), value),
                    ]));
                }
            }
            lines
        }
        None => vec![Line::from(Span::styled(
            "No statistics loaded",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Catalog ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}

fn render_access_panel(frame: &mut Frame, app: &App, area: Rect) {
    let tracker = app.cache().tracker();
    let ranking = tracker.top();

    let mut lines = Vec::new();
    if ranking.is_empty() {
        lines.push(Line::from(Span::styled(
            "No monkeys viewed yet",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for (i, (name, count)) in ranking.iter().enumerate() {
            let rank = i + 1;
            lines.push(Line::from(vec![
                Span::raw(format!("{} ", medal(rank))),
                Span::styled(format!("{}. ", rank), Style::default().fg(Color::Yellow)),
                Span::styled(name.clone(), Style::default().fg(Color::White)),
                Span::styled(format!(" ({}x)", count), Style::default().fg(Color::Gray)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Distinct: {}", tracker.len()),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            format!("Total views: {}", tracker.total()),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            format!("Average views: {:.1}", tracker.mean()),
            Style::default().fg(Color::Gray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Most viewed ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}
