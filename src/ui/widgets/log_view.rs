// src/ui/widgets/log_view.rs

use crate::app::App;
use crate::core::catalog::{MetricStatus, COPYRIGHT, HOST_INFO, HOST_LOAD, STATUS_INDICATORS};
use crate::core::models::TERMINAL_GREEN;
use crate::core::playback::PlaybackState;
use chrono::Local;
use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Number of cells in the text progress bar.
const PROGRESS_CELLS: usize = 40;

const BANNER: [&str; 3] = [
    "╔══════════════════════════════════════════════╗",
    "║           QUANTUM NETWORK SCANNER            ║",
    "╚══════════════════════════════════════════════╝",
];

const COMPLETE_BANNER: [(&str, Color); 3] = [
    ("╔═══════════════════════════════════════╗", TERMINAL_GREEN),
    ("║  SCAN COMPLETE - SYSTEM OPERATIONAL   ║", Color::Green),
    ("╚═══════════════════════════════════════╝", TERMINAL_GREEN),
];

const PROMPT: &str = "root@quantum-scanner:~$ ";

/// Renders the scripted scan terminal.
///
/// Reads one playback snapshot and the caret flag from the session, then
/// draws the banner, host details, the progress bar while the script is
/// running, every revealed line coloured by category, and either the
/// blinking caret or the completion banner. The output area always shows
/// the most recent lines.
///
/// # Arguments
///
/// * `frame` - The mutable frame to render onto.
/// * `app` - The dashboard state, which owns the scan session.
/// * `area` - The `Rect` in which to render this widget.
pub fn render_log_view(frame: &mut Frame, app: &App, area: Rect) {
    let playback = app.session.playback();
    let caret_visible = app.session.caret_visible();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TERMINAL_GREEN))
        .title(format!(" Terminal [{}/{}] ", playback.cursor, app.session.script().len()));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let progress_height = if playback.running { 2 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Banner
            Constraint::Length(4),               // Host info
            Constraint::Length(progress_height), // Progress
            Constraint::Min(0),                  // Output
            Constraint::Length(1),               // Status indicators
        ])
        .split(inner_area);

    let banner: Vec<Line> = BANNER
        .iter()
        .map(|line| Line::from(*line).bold().fg(TERMINAL_GREEN))
        .collect();
    frame.render_widget(Paragraph::new(banner).alignment(Alignment::Center), chunks[0]);

    render_host_info(frame, chunks[1]);

    if playback.running {
        let mut label = vec![Span::styled("Scan Progress:", Style::default().fg(TERMINAL_GREEN))];
        if playback.paused {
            label.push(Span::styled(" [PAUSED]", Style::default().fg(Color::Yellow).bold()));
        }
        let progress = vec![
            Line::from(label),
            Line::from(progress_bar(app.session.progress())).cyan(),
        ];
        frame.render_widget(Paragraph::new(progress), chunks[2]);
    }

    let output = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TERMINAL_GREEN).dim())
        .style(Style::default().bg(Color::Rgb(8, 16, 8)));
    let output_area = output.inner(chunks[3]);
    frame.render_widget(output, chunks[3]);

    let lines = output_lines(&playback, caret_visible);
    let overflow = lines.len().saturating_sub(output_area.height as usize);
    let log_paragraph = Paragraph::new(lines).scroll((overflow as u16, 0));
    frame.render_widget(log_paragraph, output_area);

    render_indicators(frame, chunks[4]);
}

/// Text bar such as `[▰▰▱▱…] 5%`, with the filled part rounded down.
pub fn progress_bar(progress: f64) -> String {
    let filled = ((progress / 100.0) * PROGRESS_CELLS as f64)
        .floor()
        .clamp(0.0, PROGRESS_CELLS as f64) as usize;
    format!(
        "[{}{}] {:.0}%",
        "▰".repeat(filled),
        "▱".repeat(PROGRESS_CELLS - filled),
        progress
    )
}

/// Lines for the output pane: revealed entries, then the caret or the completion banner.
fn output_lines(playback: &PlaybackState, caret_visible: bool) -> Vec<Line<'static>> {
    let caret = if caret_visible { "_" } else { " " };
    let mut lines: Vec<Line> = playback
        .revealed
        .iter()
        .map(|entry| Line::from(Span::styled(entry.text.clone(), entry.category.style())))
        .collect();

    if !playback.is_terminal() {
        lines.push(Line::from(caret).fg(TERMINAL_GREEN));
        return lines;
    }

    lines.push(Line::from(""));
    lines.extend(
        COMPLETE_BANNER
            .iter()
            .map(|(text, color)| Line::from(Span::styled(*text, Style::default().fg(*color).bold()))),
    );
    lines.push(Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(Color::Cyan)),
        Span::styled(caret, Style::default().fg(TERMINAL_GREEN)),
    ]));
    lines
}

fn render_host_info(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut host: Vec<Line> = HOST_INFO
        .iter()
        .map(|line| Line::from(*line).fg(MetricStatus::Neutral.color()))
        .collect();
    host.push(Line::from(format!("Time: {}", Local::now().format("%H:%M:%S"))).fg(TERMINAL_GREEN));
    frame.render_widget(Paragraph::new(host), columns[0]);

    let load: Vec<Line> = HOST_LOAD.iter().map(|line| Line::from(*line).cyan()).collect();
    frame.render_widget(Paragraph::new(load), columns[1]);
}

fn render_indicators(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(0)])
        .split(area);

    let spans: Vec<Span> = STATUS_INDICATORS
        .iter()
        .map(|indicator| {
            Span::styled(
                format!("{} {}  ", indicator.icon, indicator.text),
                Style::default().fg(indicator.status.color()),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), columns[0]);
    frame.render_widget(
        Paragraph::new(Line::from(COPYRIGHT).dark_gray()).alignment(Alignment::Right),
        columns[1],
    );
}
