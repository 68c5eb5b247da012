// src/ui/widgets/summary.rs

use crate::core::catalog::{FeedLine, ACTIVITY_LOG, NETWORK_STATUS, THREAT_MONITOR};
use crate::core::models::TERMINAL_GREEN;
use chrono::Local;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the monitor column to the right of the scanner.
///
/// Three stacked cards, all fed from static tables: the threat monitor (with
/// a wall-clock "last updated" stamp), the network status and the activity log.
pub fn render_summary(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Threat monitor
            Constraint::Length(6), // Network status
            Constraint::Min(0),    // Activity log
        ])
        .split(area);

    // --- Threat Monitor ---
    let threat_block = card(Line::from(vec![
        Span::styled("⚠ ", Style::default().fg(Color::Red)),
        Span::raw("THREAT MONITOR").bold(),
    ]));
    let width = threat_block.inner(chunks[0]).width;
    let mut threat_lines: Vec<Line> = THREAT_MONITOR.iter().map(feed_line).collect();
    threat_lines.push(Line::from("─".repeat(width as usize)).dark_gray());
    threat_lines.push(Line::from(format!("Last updated: {}", Local::now().format("%H:%M:%S"))).cyan());
    frame.render_widget(Paragraph::new(threat_lines).block(threat_block), chunks[0]);

    // --- Network Status ---
    let network_block = card(Line::from(vec![
        Span::styled("◎ ", Style::default().fg(Color::Cyan)),
        Span::raw("NETWORK STATUS").bold(),
    ]));
    let width = network_block.inner(chunks[1]).width;
    let network_lines: Vec<Line> = NETWORK_STATUS
        .iter()
        .map(|metric| label_value_line(metric.label, metric.value, metric.status.color(), width))
        .collect();
    frame.render_widget(Paragraph::new(network_lines).block(network_block), chunks[1]);

    // --- Activity Log ---
    let activity_block = card(Line::from(vec![
        Span::styled("≈ ", Style::default().fg(Color::Cyan)),
        Span::raw("ACTIVITY LOG").bold(),
    ]));
    let activity_lines: Vec<Line> = ACTIVITY_LOG.iter().map(feed_line).collect();
    frame.render_widget(Paragraph::new(activity_lines).block(activity_block), chunks[2]);
}

/// A label on the left and its value flush right, padded to `width` cells.
pub fn label_value_line(label: &str, value: &str, value_color: Color, width: u16) -> Line<'static> {
    let used = label.chars().count() + value.chars().count();
    let padding = (width as usize).saturating_sub(used).max(1);
    Line::from(vec![
        Span::styled(label.to_string(), Style::default().fg(TERMINAL_GREEN)),
        Span::raw(" ".repeat(padding)),
        Span::styled(value.to_string(), Style::default().fg(value_color).bold()),
    ])
}

fn feed_line(line: &FeedLine) -> Line<'static> {
    Line::from(format!("{} {}", line.icon, line.text)).fg(line.status.color())
}

fn card(title: Line<'static>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(TERMINAL_GREEN).dim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_value_line_pads_to_width() {
        let line = label_value_line("Latency", "12ms", Color::Green, 20);
        assert_eq!(line.width(), 20);
        assert_eq!(line.spans[2].style.fg, Some(Color::Green));
    }

    #[test]
    fn test_label_value_line_keeps_a_gap_when_too_narrow() {
        let line = label_value_line("Threats Detected", "0", Color::Green, 5);
        assert_eq!(line.spans[1].content, " ");
    }
}
