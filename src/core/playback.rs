// src/core/playback.rs

//! Pure state machine behind the scripted scan.
//!
//! Nothing here knows about timers. The scheduler in `core::scanner` calls
//! [`PlaybackState::advance`] when a timer fires and asks
//! [`PlaybackState::next_delay`] how long to wait before the next one.

use crate::core::models::{DelaySemantics, Script, ScriptEntry};
use std::time::Duration;

/// Snapshot of the reveal timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackState {
    /// Entries already shown, in reveal order.
    pub revealed: Vec<ScriptEntry>,
    /// Index of the next entry to reveal.
    pub cursor: usize,
    /// Total number of entries in the script being played.
    pub total: usize,
    /// `false` once every entry has been revealed.
    pub running: bool,
    /// Set while the timeline is suspended from the control bar.
    pub paused: bool,
}

impl PlaybackState {
    pub fn new(script: &Script) -> Self {
        Self {
            revealed: Vec::with_capacity(script.len()),
            cursor: 0,
            total: script.len(),
            running: !script.is_empty(),
            paused: false,
        }
    }

    /// Reveals the entry under the cursor.
    ///
    /// At the terminal state this returns the state untouched, so repeated
    /// calls never grow `revealed` beyond the script length.
    pub fn advance(mut self, script: &Script) -> Self {
        if let Some(entry) = script.get(self.cursor) {
            self.revealed.push(entry.clone());
            self.cursor += 1;
        }
        if self.cursor >= script.len() {
            self.running = false;
        }
        self
    }

    pub fn is_terminal(&self) -> bool {
        self.cursor >= self.total
    }

    /// Percentage of the script revealed, in `[0, 100]`. An empty script counts as done.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.cursor as f64 / self.total as f64 * 100.0
    }

    /// Delay to arm before the next reveal, or `None` when nothing is left.
    pub fn next_delay(&self, script: &Script, semantics: DelaySemantics) -> Option<Duration> {
        script
            .gap_before(self.cursor, semantics)
            .map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Category;
    use proptest::prelude::*;

    fn script_of(delays: &[u64]) -> Script {
        Script::new(
            delays
                .iter()
                .enumerate()
                .map(|(i, delay)| ScriptEntry {
                    sequence_index: i,
                    category: Category::Info,
                    text: format!("line {i}"),
                    reveal_at_ms: *delay,
                })
                .collect(),
        )
    }

    #[test]
    fn test_initial_state() {
        let script = Script::sample();
        let state = PlaybackState::new(&script);
        assert!(state.revealed.is_empty());
        assert_eq!(state.cursor, 0);
        assert!(state.running);
        assert!(!state.paused);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn test_last_advance_stops_running() {
        let script = script_of(&[10, 20]);
        let state = PlaybackState::new(&script).advance(&script);
        assert!(state.running);
        let state = state.advance(&script);
        assert!(!state.running);
        assert!(state.is_terminal());
        assert_eq!(state.next_delay(&script, DelaySemantics::Relative), None);
    }

    #[test]
    fn test_empty_script_starts_terminal() {
        let script = script_of(&[]);
        let state = PlaybackState::new(&script);
        assert!(!state.running);
        assert!(state.is_terminal());
        assert_eq!(state.progress(), 100.0);
        assert_eq!(state.clone().advance(&script), state);
    }

    #[test]
    fn test_next_delay_follows_cursor() {
        let script = Script::sample();
        let state = PlaybackState::new(&script).advance(&script).advance(&script);
        assert_eq!(
            state.next_delay(&script, DelaySemantics::Relative),
            Some(Duration::from_millis(1500))
        );
        assert_eq!(
            state.next_delay(&script, DelaySemantics::Absolute),
            Some(Duration::from_millis(500))
        );
    }

    proptest! {
        #[test]
        fn prop_full_playback_reveals_script_in_order(delays in prop::collection::vec(0u64..10_000, 0..40)) {
            let script = script_of(&delays);
            let mut state = PlaybackState::new(&script);
            for _ in 0..script.len() {
                state = state.advance(&script);
            }
            prop_assert_eq!(&state.revealed[..], &script[..]);
            prop_assert!(!state.running);
        }

        #[test]
        fn prop_progress_tracks_cursor(delays in prop::collection::vec(0u64..10_000, 1..40)) {
            let script = script_of(&delays);
            let n = script.len();
            let mut state = PlaybackState::new(&script);
            for k in 0..=n {
                let expected = k as f64 / n as f64 * 100.0;
                prop_assert!((state.progress() - expected).abs() < 1e-9);
                state = state.advance(&script);
            }
        }

        #[test]
        fn prop_advance_is_idempotent_at_terminal(delays in prop::collection::vec(0u64..10_000, 0..20), extra in 1usize..10) {
            let script = script_of(&delays);
            let mut state = PlaybackState::new(&script);
            for _ in 0..script.len() {
                state = state.advance(&script);
            }
            let terminal = state.clone();
            for _ in 0..extra {
                state = state.advance(&script);
            }
            prop_assert_eq!(state.revealed.len(), script.len());
            prop_assert_eq!(state, terminal);
        }
    }
}
