//! Configuration management
//!
//! TOML-backed configuration for the console: scrollback and history
//! limits plus the knobs the demo binary uses. Every section has defaults
//! matching the observed dashboard behavior (unbounded scrollback, seeded
//! transcript).

pub mod loader;

pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::history::DEFAULT_MAX_ENTRIES;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Console behavior
    pub console: ConsoleConfig,

    /// Scrollback buffer limits
    pub scrollback: ScrollbackConfig,

    /// Command history limits
    pub history: HistoryConfig,
}

/// Console-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Pre-populate new sessions with the seed transcript
    pub seed_transcript: bool,

    /// Render output with ANSI colors
    pub color: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            seed_transcript: true,
            color: true,
        }
    }
}

/// Scrollback buffer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollbackConfig {
    /// Maximum number of lines to retain; `None` means unbounded,
    /// matching the source behavior
    pub max_lines: Option<usize>,
}

impl Default for ScrollbackConfig {
    fn default() -> Self {
        Self { max_lines: None }
    }
}

/// Command history configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of submitted lines to remember
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl Config {
    /// Validate configured limits
    pub fn validate(&self) -> Result<()> {
        if self.history.max_entries == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "history.max_entries".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if let Some(0) = self.scrollback.max_lines {
            return Err(Error::ConfigValidationFailed {
                field: "scrollback.max_lines".to_string(),
                reason: "must be at least 1 when set".to_string(),
            });
        }
        Ok(())
    }
}
