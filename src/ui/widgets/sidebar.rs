// src/ui/widgets/sidebar.rs

use crate::app::App;
use crate::core::catalog::{ScanMode, QUICK_ACTIONS, SYSTEM_METRICS};
use crate::core::models::TERMINAL_GREEN;
use crate::ui::widgets::summary::label_value_line;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use strum::IntoEnumIterator;

/// Renders the sidebar: branding, system status, scan modes and quick actions.
///
/// When the sidebar is collapsed only the numbered mode glyphs are drawn, with
/// the active mode highlighted.
///
/// # Arguments
/// * `frame` - The `Frame` used for rendering the UI.
/// * `app` - The dashboard state; only `mode` and `sidebar_collapsed` are read.
/// * `area` - The `Rect` defining the drawable area for this widget.
pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let container = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(TERMINAL_GREEN).dim());
    let inner = container.inner(area);
    frame.render_widget(container, area);

    if app.sidebar_collapsed {
        render_collapsed(frame, app, inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Branding
            Constraint::Length(6),  // System status
            Constraint::Length(10), // Scan modes
            Constraint::Length(5),  // Quick actions
            Constraint::Min(0),
        ])
        .split(inner);

    // --- Branding ---
    let header = Text::from(vec![
        Line::from("QUANTUM SECURITY".bold().fg(TERMINAL_GREEN)),
        Line::from("Neural Defense System".cyan()),
        Line::from(vec![
            Span::styled("[B]", Style::new().bold().fg(Color::Yellow)),
            Span::raw(" collapse"),
        ])
        .dark_gray(),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    // --- System Status ---
    let status_block = Block::default()
        .borders(Borders::ALL)
        .title("SYSTEM STATUS".bold())
        .border_style(Style::default().fg(TERMINAL_GREEN).dim());
    let width = status_block.inner(chunks[1]).width;
    let status_lines: Vec<Line> = SYSTEM_METRICS
        .iter()
        .map(|metric| label_value_line(metric.label, metric.value, metric.status.color(), width))
        .collect();
    frame.render_widget(Paragraph::new(status_lines).block(status_block), chunks[1]);

    // --- Scan Modes ---
    let items: Vec<ListItem> = ScanMode::iter()
        .enumerate()
        .map(|(index, mode)| {
            let active = mode == app.mode;
            let marker = if active { "▶" } else { " " };
            let item = ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{marker}{} ", index + 1), Style::default().fg(Color::Yellow)),
                    Span::styled(mode.glyph(), Style::default().fg(mode.color())),
                    Span::styled(format!(" {}", mode.name()), Style::default().fg(TERMINAL_GREEN).bold()),
                ]),
                Line::from(format!("     {}", mode.description())).cyan(),
            ]);
            if active {
                item.style(Style::default().bg(Color::Rgb(0, 48, 16)))
            } else {
                item
            }
        })
        .collect();
    let modes = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("SCAN MODES".bold())
            .border_style(Style::default().fg(TERMINAL_GREEN).dim()),
    );
    frame.render_widget(modes, chunks[2]);

    // --- Quick Actions ---
    let actions: Vec<Line> = QUICK_ACTIONS
        .iter()
        .map(|(icon, label)| Line::from(format!(" {icon} {label}")).fg(TERMINAL_GREEN))
        .collect();
    let actions_block = Block::default()
        .borders(Borders::ALL)
        .title("QUICK ACTIONS".bold())
        .border_style(Style::default().fg(TERMINAL_GREEN).dim());
    frame.render_widget(Paragraph::new(actions).block(actions_block), chunks[3]);
}

fn render_collapsed(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from("[B]".bold().yellow()), Line::from("")];
    for (index, mode) in ScanMode::iter().enumerate() {
        let style = if mode == app.mode {
            Style::default().fg(mode.color()).bg(Color::Rgb(0, 48, 16)).bold()
        } else {
            Style::default().fg(mode.color())
        };
        lines.push(Line::from(Span::styled(format!("{} {}", index + 1, mode.glyph()), style)));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
