// src/config.rs

use crate::core::models::DelaySemantics;
use crate::core::scanner::Timing;
use crate::logging::project_directory;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Command-line flags. Anything given here wins over the config file.
#[derive(Debug, Default, Parser)]
#[command(name = "quantum-sentinel", version, about = "Scripted security operations dashboard for the terminal")]
pub struct Cli {
    /// JSON file with a custom scan script
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// TOML config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// UI redraw interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub tick_rate: Option<u64>,

    /// Treat script delays as elapsed time since start instead of gaps between lines
    #[arg(long)]
    pub absolute_delays: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tick_rate_ms: u64,
    pub caret_interval_ms: u64,
    pub delay_semantics: DelaySemantics,
    /// When false, the pause control only flips its label.
    pub pause_suspends_playback: bool,
    pub script: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            caret_interval_ms: 500,
            delay_semantics: DelaySemantics::Relative,
            pause_suspends_playback: true,
            script: None,
        }
    }
}

impl Config {
    /// Resolves defaults, then the config file, then CLI flags.
    ///
    /// A missing file at the default location is fine. A missing file the
    /// user pointed at explicitly is an error.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_cli(cli);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw).wrap_err_with(|| format!("invalid config file {}", path.display()))
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(script) = &cli.script {
            self.script = Some(script.clone());
        }
        if let Some(tick_rate) = cli.tick_rate {
            self.tick_rate_ms = tick_rate;
        }
        if cli.absolute_delays {
            self.delay_semantics = DelaySemantics::Absolute;
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn timing(&self) -> Timing {
        Timing {
            semantics: self.delay_semantics,
            caret_interval: Duration::from_millis(self.caret_interval_ms.max(1)),
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    project_directory().map(|dirs| dirs.config_dir().join("config.toml"))
}
