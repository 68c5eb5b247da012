// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the sidebar when expanded and when collapsed to glyphs.
pub const SIDEBAR_EXPANDED: u16 = 34;
pub const SIDEBAR_COLLAPSED: u16 = 7;

/// Defines the areas of the dashboard.
///
/// The sidebar runs the full height on the left. The rest is split into the
/// control bar, the scanner terminal with the monitor column beside it, and
/// the footer.
pub struct AppLayout {
    pub sidebar: Rect,
    pub control_bar: Rect,
    pub terminal: Rect,
    pub monitor: Rect,
    pub footer: Rect,
}

/// Creates the complete dashboard layout.
///
/// # Arguments
/// * `frame_size` - The `Rect` representing the total size of the terminal frame.
/// * `sidebar_collapsed` - Whether the sidebar shows only mode glyphs.
pub fn create_layout(frame_size: Rect, sidebar_collapsed: bool) -> AppLayout {
    let sidebar_width = if sidebar_collapsed { SIDEBAR_COLLAPSED } else { SIDEBAR_EXPANDED };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(frame_size);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(columns[1]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
        .split(main_chunks[1]);

    AppLayout {
        sidebar: columns[0],
        control_bar: main_chunks[0],
        terminal: content_chunks[0],
        monitor: content_chunks[1],
        footer: main_chunks[2],
    }
}
