// src/main.rs

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::{stdout, Stdout};
use std::time::Duration;
use tracing::{error, info};

mod app;
mod config;
mod core;
mod logging;
mod ui;

use app::App;
use config::{Cli, Config};
use crate::core::models::Script;
use crate::core::scanner::ScanSession;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    install_hooks()?;
    let log_path = logging::initialize_logging()?;
    let config = Config::load(&cli)?;
    let script = match &config.script {
        Some(path) => Script::from_json_file(path)?,
        None => Script::sample(),
    };
    info!(log = %log_path.display(), ?config, entries = script.len(), "Starting dashboard");

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let session = ScanSession::start(script, config.timing());
    let mut app = App::new(session, config.pause_suspends_playback);
    let result = run(&mut terminal, &mut app, config.tick_rate());

    // --- Restore Terminal ---
    restore_terminal()?;
    if let Err(err) = &result {
        error!("Dashboard exited with error: {err:?}");
    }
    info!("Dashboard closed");
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App, tick_rate: Duration) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        // The timeout doubles as the redraw tick, so the caret and the
        // revealed lines show up even when no key is pressed.
        if event::poll(tick_rate)? {
            handle_events(app)?;
        }
    }
    Ok(())
}

fn handle_events(app: &mut App) -> Result<()> {
    if let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        handle_key(app, key.code);
    }
    Ok(())
}

/// Maps a key press onto a dashboard control.
fn handle_key(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc => app.quit(),
        KeyCode::Up => app.previous_mode(),
        KeyCode::Down => app.next_mode(),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => app.quit(),
            'b' => app.toggle_sidebar(),
            'p' | ' ' => app.toggle_pause(),
            'r' => app.restart(),
            digit @ '1'..='4' => app.select_mode_index(digit as usize - '1' as usize),
            _ => {}
        },
        _ => {}
    }
}

fn restore_terminal() -> Result<()> {
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Installs color-eyre's report and panic hooks. The panic hook puts the
/// terminal back first so the report is readable.
fn install_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install()?;
    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        error!("{panic_info}");
        panic_hook(panic_info);
    }));
    Ok(())
}
