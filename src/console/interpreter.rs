//! Command Interpreter
//!
//! Owns the input line, command history, and the session scrollback. A
//! submitted line is trimmed, recorded in history, resolved against the
//! registry, and the echoed prompt plus the handler's output are appended
//! to the scrollback. Execution is synchronous and non-suspending: every
//! submission leaves the interpreter back in `Idle` before it returns.
//!
//! There is no fatal error path. Empty input is a silent no-op, an
//! unrecognized command renders a fixed advisory line, and a failing
//! handler is absorbed into a single error line -- the session stays
//! usable after any input.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::Config;
use crate::console::registry::{CommandRegistry, CommandResult};
use crate::console::scrollback::ScrollbackBuffer;
use crate::history::History;
use crate::models::{Line, LineKind};

/// Advisory rendered when no registry entry matches
pub const NOT_RECOGNIZED_MESSAGE: &str =
    "Command not recognized. Type 'help' for available commands.";

/// Interpreter state; `Executing` is transient within a single submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpreterState {
    /// Input is being edited; nothing in flight
    #[default]
    Idle,
    /// A submission is being dispatched
    Executing,
}

/// One console session: input line, history, scrollback, and registry.
///
/// Constructed when the console is opened and dropped when it closes;
/// nothing is shared across sessions and no state survives the drop.
pub struct ConsoleSession {
    /// Session identifier
    id: String,
    /// Characters typed but not yet submitted
    input: String,
    /// The session transcript
    scrollback: ScrollbackBuffer,
    /// Previously submitted raw inputs, most-recent-last
    history: History,
    /// Ordered command entries supplied by the embedding application
    registry: CommandRegistry,
    /// Current interpreter state
    state: InterpreterState,
    /// When the session was opened
    started_at: DateTime<Utc>,
}

impl ConsoleSession {
    /// Create a session with default limits
    pub fn new(registry: CommandRegistry) -> Self {
        Self::with_config(registry, &Config::default())
    }

    /// Create a session honoring the configured scrollback and history caps
    pub fn with_config(registry: CommandRegistry, config: &Config) -> Self {
        let scrollback = match config.scrollback.max_lines {
            Some(max) => ScrollbackBuffer::with_max_lines(max),
            None => ScrollbackBuffer::new(),
        };
        let session = Self {
            id: Uuid::new_v4().to_string(),
            input: String::new(),
            scrollback,
            history: History::with_max_entries(config.history.max_entries),
            registry,
            state: InterpreterState::Idle,
            started_at: Utc::now(),
        };
        debug!(session_id = %session.id, commands = session.registry.len(), "console session opened");
        session
    }

    /// Pre-populate the scrollback with a seed transcript.
    ///
    /// The seed is configuration data from the embedding application, not
    /// interpreter output; each line is classified on insert.
    pub fn with_seed<I, S>(mut self, seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scrollback.append_texts(seed);
        self
    }

    /// Session identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current interpreter state
    pub fn state(&self) -> InterpreterState {
        self.state
    }

    /// When the session was opened
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The session transcript
    pub fn scrollback(&self) -> &ScrollbackBuffer {
        &self.scrollback
    }

    /// Submitted-input history
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Registered commands
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Ordered copy of the transcript for rendering
    pub fn snapshot(&self) -> Vec<Line> {
        self.scrollback.snapshot()
    }

    /// Consume the scrollback dirty flag; true means re-render and scroll
    pub fn take_dirty(&mut self) -> bool {
        self.scrollback.take_dirty()
    }

    // === Input line ownership ===

    /// Characters typed but not yet submitted
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input buffer
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Append one typed character
    pub fn push_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    /// Remove the last typed character, if any
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Submit whatever is in the input buffer
    pub fn submit_input(&mut self) {
        let raw = std::mem::take(&mut self.input);
        self.submit(&raw);
    }

    /// Submit one raw input line.
    ///
    /// Empty (after trimming) input changes nothing. Otherwise the trimmed
    /// line is recorded in history unconditionally, echoed as a prompt
    /// line, resolved against the registry (first match wins), and the
    /// outcome is appended to the scrollback followed by a blank separator.
    /// A `ClearConsole` result wipes the buffer and discards the echo.
    pub fn submit(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            trace!("ignoring empty submission");
            return;
        }

        self.state = InterpreterState::Executing;
        self.history.push(trimmed);

        let echo = Line::with_kind(format!("$ {}", trimmed), LineKind::Prompt);

        match self.registry.resolve(trimmed) {
            Some(entry) => {
                debug!(command = entry.name(), input = trimmed, "dispatching command");
                match entry.invoke(trimmed) {
                    Ok(CommandResult::ClearConsole) => {
                        // Clearing wins over echoing: the prompt line is dropped
                        self.scrollback.clear();
                    }
                    Ok(CommandResult::Lines(lines)) => {
                        self.scrollback.append(echo);
                        for text in lines {
                            self.scrollback.append(Line::new(text));
                        }
                        self.scrollback.append(Line::new(String::new()));
                    }
                    Err(err) => {
                        warn!(command = entry.name(), error = %err, "command handler failed");
                        self.scrollback.append(echo);
                        self.scrollback.append(Line::error(format!("Error: {}", err)));
                        self.scrollback.append(Line::new(String::new()));
                    }
                }
            }
            None => {
                debug!(input = trimmed, "no matching command");
                self.scrollback.append(echo);
                self.scrollback.append(Line::new(NOT_RECOGNIZED_MESSAGE));
                self.scrollback.append(Line::new(String::new()));
            }
        }

        self.input.clear();
        self.state = InterpreterState::Idle;
    }

    /// Export the transcript as pretty-printed JSON
    pub fn export_transcript_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Export the transcript as plain text, one line per row
    pub fn export_transcript_text(&self) -> String {
        self.scrollback
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Debug for ConsoleSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSession")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("lines", &self.scrollback.len())
            .field("history", &self.history.len())
            .finish_non_exhaustive()
    }
}
