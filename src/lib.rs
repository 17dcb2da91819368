//! batteries-console - an embeddable scrollback console
//!
//! This library provides the interactive terminal subsystem of the
//! batteries dashboard: an in-memory, line-oriented command console with
//! a scrollback transcript, session-scoped command history, and a
//! pluggable command registry.
//!
//! ## Features
//!
//! - **Scrollback buffer:** Ordered, append-only transcript with a dirty
//!   flag for the presentation layer and an optional line cap
//! - **Command registry:** Ordered matcher/handler pairs; first match
//!   wins, substring or exact matching per entry
//! - **Interpreter:** Synchronous submit contract -- echo, dispatch,
//!   trailing blank separator, fixed advisory for unknown commands
//! - **Line classification:** Content-driven styling kinds with sub-span
//!   highlighting of the `Running` marker
//! - **Configuration:** TOML-based configuration files
//!
//! ## Module Organization
//!
//! - [`console`] - Scrollback buffer, command registry, interpreter
//! - [`models`] - Data structures (Line, LineKind, StyledSpan)
//! - [`history`] - Session-scoped command history with search
//! - [`config`] - Configuration loading and validation
//! - [`ansi`] - ANSI styling for terminal rendering
//! - [`kubectl`] - Built-in demo command set and seed transcript
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```
//! use batteries_console::{kubectl, Config};
//!
//! let mut session = kubectl::demo_session(&Config::default());
//! session.submit("kubectl get pods");
//! for line in session.snapshot() {
//!     println!("{}", line.text);
//! }
//! ```
//!
//! ## Concurrency
//!
//! The console is single-threaded and event-driven: `submit` is
//! synchronous, never overlaps itself, and always returns with the
//! session back in `Idle`. Each session owns its scrollback exclusively;
//! nothing is shared across sessions.
//!
//! ## Safety and Reliability
//!
//! - **No fatal errors:** empty input is a no-op, unknown commands render
//!   an advisory line, failing handlers are absorbed into error lines
//! - **No persistence:** history and transcript live and die with the
//!   session

#[macro_use]
extern crate tracing;

pub mod ansi;
pub mod config;
pub mod console;
pub mod error;
pub mod history;
pub mod kubectl;
pub mod models;

// Re-exports for core functionality
pub use config::{Config, ConfigLoader};
pub use console::{
    CommandEntry, CommandRegistry, CommandResult, ConsoleSession, Handler, InterpreterState,
    Matcher, ScrollbackBuffer, NOT_RECOGNIZED_MESSAGE,
};
pub use error::{Error, Result};
pub use history::History;
pub use models::{Line, LineKind, StyledSpan};

/// The current version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get default configuration
///
/// Returns a `Config` with all default values: seeded transcript,
/// unbounded scrollback, default history cap.
pub fn default_config() -> Config {
    Config::default()
}
