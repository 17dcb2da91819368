//! Command Registry
//!
//! An ordered list of matcher/handler pairs supplied by the embedding
//! application. Resolution walks the entries in declaration order and the
//! first matcher whose predicate holds wins. Matching preserves the
//! dashboard terminal's permissive contract: substring containment for
//! most commands, exact comparison for the rest -- not tokenization.

use std::fmt;

use crate::error::Result;

/// Outcome of a command handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Wipe the scrollback; the echoed prompt line is discarded
    ClearConsole,
    /// Ordered output lines to append after the echo (may be empty)
    Lines(Vec<String>),
}

/// Predicate deciding whether an entry handles a submitted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Input must equal the pattern exactly
    Exact(String),
    /// Input must contain the pattern anywhere
    Contains(String),
}

impl Matcher {
    /// Build an exact matcher
    pub fn exact(pattern: impl Into<String>) -> Self {
        Matcher::Exact(pattern.into())
    }

    /// Build a containment matcher
    pub fn contains(pattern: impl Into<String>) -> Self {
        Matcher::Contains(pattern.into())
    }

    /// Test the predicate against a trimmed input line
    pub fn matches(&self, input: &str) -> bool {
        match self {
            Matcher::Exact(pattern) => input == pattern,
            Matcher::Contains(pattern) => input.contains(pattern.as_str()),
        }
    }
}

/// Handler bound to a matcher; receives the trimmed input line
pub type Handler = Box<dyn Fn(&str) -> Result<CommandResult> + Send + Sync>;

/// One registered command
pub struct CommandEntry {
    name: String,
    matcher: Matcher,
    handler: Handler,
}

impl CommandEntry {
    /// Create a new entry
    pub fn new(name: impl Into<String>, matcher: Matcher, handler: Handler) -> Self {
        Self {
            name: name.into(),
            matcher,
            handler,
        }
    }

    /// Name used in logs and failure messages
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entry's matcher
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Test whether this entry handles the input
    pub fn matches(&self, input: &str) -> bool {
        self.matcher.matches(input)
    }

    /// Run the handler against the input
    pub fn invoke(&self, input: &str) -> Result<CommandResult> {
        (self.handler)(input)
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of command entries
#[derive(Debug, Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry; later entries only match if earlier ones do not
    pub fn register(&mut self, name: impl Into<String>, matcher: Matcher, handler: Handler) {
        self.entries.push(CommandEntry::new(name, matcher, handler));
    }

    /// Append an entry whose handler returns a fixed set of lines
    pub fn register_lines(
        &mut self,
        name: impl Into<String>,
        matcher: Matcher,
        lines: Vec<String>,
    ) {
        self.register(
            name,
            matcher,
            Box::new(move |_| Ok(CommandResult::Lines(lines.clone()))),
        );
    }

    /// Append an entry that clears the console
    pub fn register_clear(&mut self, name: impl Into<String>, matcher: Matcher) {
        self.register(name, matcher, Box::new(|_| Ok(CommandResult::ClearConsole)));
    }

    /// Resolve the first entry, in declaration order, whose matcher holds
    pub fn resolve(&self, input: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.matches(input))
    }

    /// Iterate entries in declaration order
    pub fn entries(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether any entries are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
