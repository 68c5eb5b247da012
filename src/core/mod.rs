// src/core/mod.rs

// The non-visual half of the dashboard: the script, the playback state
// machine, the session that drives it, and the static content tables.

/// Script entries, categories and the built-in sample script.
pub mod models;

/// The pure reveal state machine.
pub mod playback;

/// The timer-driven session that plays a script and blinks the caret.
pub mod scanner;

/// Literal data tables rendered by the dashboard panels.
pub mod catalog;
