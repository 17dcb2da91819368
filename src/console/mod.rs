//! Console core: scrollback, registry, and interpreter
//!
//! The scrollback holds the ordered transcript, the registry maps
//! submitted lines to handlers, and the interpreter ties them together
//! inside a session object.

pub mod interpreter;
pub mod registry;
pub mod scrollback;

// Re-exports for convenience
pub use interpreter::{ConsoleSession, InterpreterState, NOT_RECOGNIZED_MESSAGE};
pub use registry::{CommandEntry, CommandRegistry, CommandResult, Handler, Matcher};
pub use scrollback::ScrollbackBuffer;
