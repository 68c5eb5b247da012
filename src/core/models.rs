// src/core/models.rs

use color_eyre::eyre::{Result, WrapErr};
use ratatui::style::{Color, Style};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;
use strum::Display;

// --- Script Data Models ---

/// The kind of a script line. Drives the colour the terminal panel uses for it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Info,
    Scan,
    Warning,
    Error,
    Success,
}

/// Base phosphor green used for plain terminal text.
pub const TERMINAL_GREEN: Color = Color::Rgb(0, 255, 65);

impl Category {
    /// Returns the foreground style for lines of this category.
    pub fn style(self) -> Style {
        let color = match self {
            Category::Scan => Color::Cyan,
            Category::Warning => Color::Yellow,
            Category::Error => Color::Red,
            Category::Success => Color::Green,
            Category::Info => TERMINAL_GREEN,
        };
        Style::default().fg(color)
    }
}

/// A single timed line of the scripted scan.
///
/// `reveal_at_ms` is the delay attached to the entry. How it is scheduled
/// (gap since the previous reveal, or elapsed time since start) is decided
/// by [`DelaySemantics`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScriptEntry {
    #[serde(default)]
    pub sequence_index: usize,
    pub category: Category,
    pub text: String,
    pub reveal_at_ms: u64,
}

/// How `reveal_at_ms` is turned into a one-shot timer duration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DelaySemantics {
    /// Each entry's delay is measured from the previous reveal.
    #[default]
    Relative,
    /// Each entry's delay is elapsed time since the session started.
    Absolute,
}

/// An immutable, ordered script. Cloning only bumps a reference count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    entries: Arc<[ScriptEntry]>,
}

impl Script {
    /// Builds a script from raw entries, renumbering `sequence_index` by position.
    pub fn new(entries: Vec<ScriptEntry>) -> Self {
        let entries: Vec<ScriptEntry> = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| ScriptEntry { sequence_index: index, ..entry })
            .collect();
        Self { entries: entries.into() }
    }

    /// The built-in scan script shown by the dashboard.
    pub fn sample() -> Self {
        Self::new(
            SAMPLE_SCRIPT
                .iter()
                .map(|(category, text, reveal_at_ms)| ScriptEntry {
                    sequence_index: 0,
                    category: *category,
                    text: (*text).to_string(),
                    reveal_at_ms: *reveal_at_ms,
                })
                .collect(),
        )
    }

    /// Loads a script from a JSON array of `{category, text, reveal_at_ms}` objects.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read script file {}", path.display()))?;
        Self::from_json_str(&raw)
            .wrap_err_with(|| format!("failed to parse script file {}", path.display()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let entries: Vec<ScriptEntry> = serde_json::from_str(raw)?;
        Ok(Self::new(entries))
    }

    /// Duration of the timer armed before revealing `entries[cursor]`.
    pub fn gap_before(&self, cursor: usize, semantics: DelaySemantics) -> Option<u64> {
        let entry = self.entries.get(cursor)?;
        let gap = match semantics {
            DelaySemantics::Relative => entry.reveal_at_ms,
            DelaySemantics::Absolute => {
                let previous = cursor
                    .checked_sub(1)
                    .map(|prev| self.entries[prev].reveal_at_ms)
                    .unwrap_or(0);
                entry.reveal_at_ms.saturating_sub(previous)
            }
        };
        Some(gap)
    }

    /// Sum of every timer the script arms under the given semantics, saturating at `u64::MAX`.
    pub fn total_duration_ms(&self, semantics: DelaySemantics) -> u64 {
        (0..self.entries.len())
            .filter_map(|cursor| self.gap_before(cursor, semantics))
            .fold(0u64, u64::saturating_add)
    }
}

impl Deref for Script {
    type Target = [ScriptEntry];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

static SAMPLE_SCRIPT: &[(Category, &str, u64)] = &[
    (Category::Info, ">> INITIALIZING QUANTUM SCANNER v3.2.1", 500),
    (Category::Info, ">> Loading neural network modules...", 1000),
    (Category::Success, ">> [OK] Core systems online", 1500),
    (Category::Scan, ">> Scanning network topology...", 2000),
    (Category::Info, "   └─ Found 127 active nodes", 2500),
    (Category::Scan, ">> Probing security protocols...", 3000),
    (Category::Warning, "   └─ [WARN] Weak encryption detected: 192.168.1.1", 3500),
    (Category::Scan, ">> Analyzing packet streams...", 4000),
    (Category::Success, "   └─ [OK] Clean traffic patterns", 4500),
    (Category::Scan, ">> Deep packet inspection initiated...", 5000),
    (Category::Info, "   ├─ HTTP/2 protocols: 89%", 5500),
    (Category::Info, "   ├─ TLS 1.3 encryption: 67%", 6000),
    (Category::Warning, "   └─ [WARN] Legacy SSL detected: 12%", 6500),
    (Category::Scan, ">> Port scanning in progress...", 7000),
    (Category::Info, "   ├─ Open ports found: 22, 80, 443, 8080", 7500),
    (Category::Error, "   └─ [ALERT] Suspicious activity on port 31337", 8000),
    (Category::Scan, ">> Running vulnerability assessment...", 8500),
    (Category::Success, "   └─ [OK] No critical vulnerabilities found", 9000),
    (Category::Info, ">> Scan completed successfully", 9500),
    (Category::Success, ">> System status: SECURE", 10000),
];
