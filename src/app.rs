// src/app.rs

use crate::core::catalog::ScanMode;
use crate::core::scanner::ScanSession;
use tracing::info;

/// UI state of the dashboard shell plus the scan session it displays.
///
/// The shell fields are independent toggles. Only `toggle_pause` and
/// `restart` reach into the session.
pub struct App {
    pub should_quit: bool,
    pub mode: ScanMode,
    pub sidebar_collapsed: bool,
    /// Drives the "Pause"/"Resume" label.
    pub scanning: bool,
    pub pause_suspends_playback: bool,
    pub session: ScanSession,
}

impl App {
    pub fn new(session: ScanSession, pause_suspends_playback: bool) -> Self {
        Self {
            should_quit: false,
            mode: ScanMode::default(),
            sidebar_collapsed: false,
            scanning: true,
            pause_suspends_playback,
            session,
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        info!(collapsed = self.sidebar_collapsed, "Sidebar toggled");
    }

    pub fn select_mode(&mut self, mode: ScanMode) {
        if self.mode != mode {
            info!(mode = %mode, "Scan mode selected");
        }
        self.mode = mode;
    }

    /// Selects the mode at a zero-based sidebar position. Out of range is ignored.
    pub fn select_mode_index(&mut self, index: usize) {
        if let Some(mode) = ScanMode::from_index(index) {
            self.select_mode(mode);
        }
    }

    pub fn next_mode(&mut self) {
        self.select_mode(self.mode.next());
    }

    pub fn previous_mode(&mut self) {
        self.select_mode(self.mode.previous());
    }

    pub fn toggle_pause(&mut self) {
        self.scanning = !self.scanning;
        info!(scanning = self.scanning, wired = self.pause_suspends_playback, "Pause toggled");
        if !self.pause_suspends_playback {
            return;
        }
        if self.scanning {
            self.session.resume();
        } else {
            self.session.pause();
        }
    }

    pub fn restart(&mut self) {
        self.scanning = true;
        self.session.restart();
    }

    pub fn pause_label(&self) -> &'static str {
        if self.scanning { "Pause" } else { "Resume" }
    }

    pub fn active_scanner_label(&self) -> String {
        format!("Active Scanner: {}", self.mode.name())
    }

    pub fn quit(&mut self) {
        info!("Quit requested");
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Script;
    use crate::core::scanner::Timing;
    use std::time::Duration;

    async fn elapse(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    fn app(pause_suspends_playback: bool) -> App {
        App::new(ScanSession::start(Script::sample(), Timing::default()), pause_suspends_playback)
    }

    #[tokio::test(start_paused = true)]
    async fn test_app_creation() {
        let app = app(true);
        assert!(!app.should_quit);
        assert!(!app.sidebar_collapsed);
        assert!(app.scanning);
        assert_eq!(app.mode, ScanMode::DeepScan);
        assert_eq!(app.pause_label(), "Pause");
        assert_eq!(app.active_scanner_label(), "Active Scanner: Deep Vulnerability Scan");
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_toggles() {
        let mut app = app(true);
        app.toggle_sidebar();
        app.select_mode_index(2);
        assert!(app.sidebar_collapsed);
        assert_eq!(app.mode, ScanMode::PortScan);
        assert!(app.scanning);

        app.select_mode_index(9);
        assert_eq!(app.mode, ScanMode::PortScan);

        app.next_mode();
        assert_eq!(app.active_scanner_label(), "Active Scanner: Malware Detection");
        app.previous_mode();
        app.previous_mode();
        assert_eq!(app.mode, ScanMode::NetworkScan);

        app.toggle_sidebar();
        assert!(!app.sidebar_collapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_suspends_reveal_timeline() {
        let mut app = app(true);
        elapse(500).await;
        assert_eq!(app.session.playback().revealed.len(), 1);

        app.toggle_pause();
        assert_eq!(app.pause_label(), "Resume");
        elapse(10_000).await;
        assert_eq!(app.session.playback().revealed.len(), 1);

        app.toggle_pause();
        assert_eq!(app.pause_label(), "Pause");
        elapse(1_000).await;
        assert_eq!(app.session.playback().revealed.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unwired_pause_only_flips_label() {
        let mut app = app(false);
        app.toggle_pause();
        assert_eq!(app.pause_label(), "Resume");

        elapse(1_500).await;
        let state = app.session.playback();
        assert_eq!(state.revealed.len(), 2);
        assert!(!state.paused);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_resets_label_and_timeline() {
        let mut app = app(true);
        elapse(1_500).await;
        app.toggle_pause();

        app.restart();
        assert_eq!(app.pause_label(), "Pause");
        elapse(500).await;
        assert_eq!(app.session.playback().revealed.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit() {
        let mut app = app(true);
        app.quit();
        assert!(app.should_quit);
    }
}
