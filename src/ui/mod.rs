// src/ui/mod.rs

use crate::app::App;
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area(), app.sidebar_collapsed);

    widgets::sidebar::render_sidebar(frame, app, layout.sidebar);
    widgets::control_bar::render_control_bar(frame, app, layout.control_bar);
    widgets::log_view::render_log_view(frame, app, layout.terminal);
    widgets::summary::render_summary(frame, layout.monitor);
    widgets::footer::render_footer(frame, layout.footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Script;
    use crate::core::scanner::{ScanSession, Timing};
    use ratatui::{backend::TestBackend, buffer::Buffer};
    use std::time::Duration;

    fn screen_text(buffer: &Buffer) -> String {
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(150, 48)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        screen_text(terminal.backend().buffer())
    }

    async fn elapse(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    fn new_app() -> App {
        App::new(ScanSession::start(Script::sample(), Timing::default()), true)
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_dashboard() {
        let app = new_app();
        let screen = draw(&app);
        assert!(screen.contains("QUANTUM SECURITY"));
        assert!(screen.contains("Active Scanner: Deep Vulnerability Scan"));
        assert!(screen.contains("QUANTUM NETWORK SCANNER"));
        assert!(screen.contains("Scan Progress:"));
        assert!(screen.contains("0%"));
        assert!(screen.contains("THREAT MONITOR"));
        assert!(screen.contains("Active Nodes"));
        assert!(screen.contains("Export Report"));
        assert!(!screen.contains("INITIALIZING"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_revealed_lines_and_mode_label() {
        let mut app = new_app();
        elapse(500).await;
        app.select_mode_index(3);
        let screen = draw(&app);
        assert!(screen.contains(">> INITIALIZING QUANTUM SCANNER v3.2.1"));
        assert!(screen.contains("Active Scanner: Malware Detection"));
        assert!(screen.contains("5%"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_banner() {
        let app = new_app();
        elapse(105_000).await;
        let screen = draw(&app);
        assert!(screen.contains("SCAN COMPLETE - SYSTEM OPERATIONAL"));
        assert!(screen.contains("root@quantum-scanner:~$"));
        assert!(!screen.contains("Scan Progress:"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_collapsed_sidebar_hides_labels() {
        let mut app = new_app();
        app.toggle_sidebar();
        app.toggle_pause();
        let screen = draw(&app);
        assert!(!screen.contains("QUANTUM SECURITY"));
        assert!(!screen.contains("SYSTEM STATUS"));
        assert!(screen.contains("Resume"));
    }
}
