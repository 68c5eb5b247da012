// src/ui/widgets/footer.rs

use crate::core::catalog::REPORT_ACTIONS;
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Renders the footer: the decorative report buttons and the key bindings.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let actions: Vec<Span> = REPORT_ACTIONS
        .iter()
        .map(|label| Span::styled(format!("[ {label} ] "), Style::default().fg(Color::Cyan)))
        .collect();

    let key = |k: &'static str| Span::styled(k, Style::new().bold().fg(Color::Yellow));
    let hints = Line::from(vec![
        key("1-4"),
        Span::raw("/"),
        key("↑↓"),
        Span::raw(" mode, "),
        key("B"),
        Span::raw(" sidebar, "),
        key("P"),
        Span::raw(" pause, "),
        key("R"),
        Span::raw(" restart, "),
        key("Q"),
        Span::raw(" quit"),
    ])
    .dark_gray();

    let footer = Paragraph::new(vec![Line::from(actions), hints]).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
