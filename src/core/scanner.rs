// src/core/scanner.rs

//! The scripted scan player.
//!
//! A [`ScanSession`] owns two background tasks: the playback scheduler, which
//! reveals script entries one timer at a time, and the caret blinker. Both
//! publish through `watch` channels so the UI can read the latest snapshot on
//! every frame. Dropping the session aborts both tasks.

use crate::core::models::{DelaySemantics, Script};
use crate::core::playback::PlaybackState;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep_until, Instant};
use tracing::{debug, info};

/// Deadline offset used when a delay does not fit in an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Commands the dashboard can send to a running playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackControl {
    Pause,
    Resume,
    Restart,
}

/// Timer settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub semantics: DelaySemantics,
    pub caret_interval: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            semantics: DelaySemantics::Relative,
            caret_interval: Duration::from_millis(500),
        }
    }
}

/// The single timer owned by the playback scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    /// Waiting for the next reveal.
    Armed(Instant),
    /// Paused with this much of the current delay left.
    Suspended(Duration),
    /// Nothing left to reveal.
    Idle,
}

enum Wake {
    Deadline(Instant),
    Control(Option<PlaybackControl>),
}

pub struct ScanSession {
    script: Script,
    playback_rx: watch::Receiver<PlaybackState>,
    caret_rx: watch::Receiver<bool>,
    control_tx: mpsc::UnboundedSender<PlaybackControl>,
    playback_task: JoinHandle<()>,
    caret_task: JoinHandle<()>,
}

impl ScanSession {
    /// Starts playback of `script` and the caret blinker. Must be called from
    /// within a tokio runtime.
    pub fn start(script: Script, timing: Timing) -> Self {
        let started = Instant::now();
        let (playback_tx, playback_rx) = watch::channel(PlaybackState::new(&script));
        let (caret_tx, caret_rx) = watch::channel(true);
        let (control_tx, control_rx) = mpsc::unbounded_channel();

        let playback_task = tokio::spawn(run_playback(
            script.clone(),
            timing.semantics,
            started,
            playback_tx,
            control_rx,
        ));
        let caret_task = tokio::spawn(run_caret(caret_tx, started, timing.caret_interval));

        info!(
            entries = script.len(),
            semantics = %timing.semantics,
            duration_ms = script.total_duration_ms(timing.semantics),
            caret_ms = timing.caret_interval.as_millis() as u64,
            "Scan session started"
        );

        Self {
            script,
            playback_rx,
            caret_rx,
            control_tx,
            playback_task,
            caret_task,
        }
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Latest published playback snapshot.
    pub fn playback(&self) -> PlaybackState {
        self.playback_rx.borrow().clone()
    }

    /// A receiver that keeps observing playback independently of the session.
    #[cfg(test)]
    pub fn watch_playback(&self) -> watch::Receiver<PlaybackState> {
        self.playback_rx.clone()
    }

    #[cfg(test)]
    pub fn watch_caret(&self) -> watch::Receiver<bool> {
        self.caret_rx.clone()
    }

    pub fn progress(&self) -> f64 {
        self.playback_rx.borrow().progress()
    }

    pub fn caret_visible(&self) -> bool {
        *self.caret_rx.borrow()
    }

    pub fn pause(&self) {
        self.send(PlaybackControl::Pause);
    }

    pub fn resume(&self) {
        self.send(PlaybackControl::Resume);
    }

    pub fn restart(&self) {
        self.send(PlaybackControl::Restart);
    }

    fn send(&self, command: PlaybackControl) {
        // Only fails once the scheduler is gone, which means the session is being torn down.
        let _ = self.control_tx.send(command);
    }
}

impl Drop for ScanSession {
    fn drop(&mut self) {
        self.playback_task.abort();
        self.caret_task.abort();
        debug!("Scan session torn down");
    }
}

/// The playback scheduler loop: reveal, publish, re-arm, until terminal.
async fn run_playback(
    script: Script,
    semantics: DelaySemantics,
    started: Instant,
    publisher: watch::Sender<PlaybackState>,
    mut control: mpsc::UnboundedReceiver<PlaybackControl>,
) {
    let mut state = PlaybackState::new(&script);
    let mut timer = arm(&state, &script, semantics, started);

    loop {
        let wake = match timer {
            Timer::Armed(deadline) => tokio::select! {
                _ = sleep_until(deadline) => Wake::Deadline(deadline),
                command = control.recv() => Wake::Control(command),
            },
            Timer::Suspended(_) | Timer::Idle => Wake::Control(control.recv().await),
        };

        match wake {
            Wake::Deadline(deadline) => {
                state = state.advance(&script);
                debug!(cursor = state.cursor, progress = state.progress(), "Revealed script entry");
                if !state.running {
                    info!(revealed = state.revealed.len(), "Scripted scan complete");
                }
                // Re-arm from the fired deadline, not from now, so delays never drift.
                timer = arm(&state, &script, semantics, deadline);
            }
            Wake::Control(Some(command)) => {
                info!(?command, cursor = state.cursor, "Playback control");
                (state, timer) = apply_control(command, state, timer, &script, semantics, Instant::now());
            }
            Wake::Control(None) => break,
        }
        publisher.send_replace(state.clone());
    }
}

/// Toggles the caret flag once per interval, forever.
async fn run_caret(publisher: watch::Sender<bool>, started: Instant, period: Duration) {
    let mut ticker = interval_at(started + period, period);
    loop {
        ticker.tick().await;
        publisher.send_modify(|visible| *visible = !*visible);
    }
}

fn arm(state: &PlaybackState, script: &Script, semantics: DelaySemantics, from: Instant) -> Timer {
    match state.next_delay(script, semantics) {
        Some(delay) => Timer::Armed(from.checked_add(delay).unwrap_or(from + FAR_FUTURE)),
        None => Timer::Idle,
    }
}

fn apply_control(
    command: PlaybackControl,
    mut state: PlaybackState,
    timer: Timer,
    script: &Script,
    semantics: DelaySemantics,
    now: Instant,
) -> (PlaybackState, Timer) {
    match command {
        PlaybackControl::Pause => {
            if state.running {
                state.paused = true;
            }
            let timer = match timer {
                Timer::Armed(deadline) => Timer::Suspended(deadline.saturating_duration_since(now)),
                other => other,
            };
            (state, timer)
        }
        PlaybackControl::Resume => {
            state.paused = false;
            let timer = match timer {
                Timer::Suspended(remaining) => {
                    Timer::Armed(now.checked_add(remaining).unwrap_or(now + FAR_FUTURE))
                }
                other => other,
            };
            (state, timer)
        }
        PlaybackControl::Restart => {
            let fresh = PlaybackState::new(script);
            let timer = arm(&fresh, script, semantics, now);
            (fresh, timer)
        }
    }
}
