// src/ui/widgets/control_bar.rs

use crate::app::App;
use crate::core::models::TERMINAL_GREEN;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the top bar: the active scanner on the left, pause and restart on the right.
pub fn render_control_bar(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(TERMINAL_GREEN).dim());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(36)])
        .split(inner);

    let title = Text::from(vec![
        Line::from(app.active_scanner_label()).bold().fg(TERMINAL_GREEN),
        Line::from("Real-time security monitoring active").cyan(),
    ]);
    frame.render_widget(Paragraph::new(title), columns[0]);

    let pause_icon = if app.scanning { "⏸" } else { "▶" };
    let controls = Line::from(vec![
        Span::styled("[P]", Style::new().bold().fg(Color::Yellow)),
        Span::styled(format!(" {pause_icon} {}", app.pause_label()), Style::default().fg(TERMINAL_GREEN)),
        Span::raw("   "),
        Span::styled("[R]", Style::new().bold().fg(Color::Yellow)),
        Span::styled(" ↻ Restart Scan", Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(Paragraph::new(controls).alignment(Alignment::Right), columns[1]);
}
