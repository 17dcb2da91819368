//! Scrollback Buffer
//!
//! Holds the ordered transcript of the console. Append-only between clears:
//! lines are never reordered or mutated once appended. A dirty flag tells
//! the presentation layer when to re-read the snapshot and scroll to the
//! newest line.

use std::collections::VecDeque;

use crate::models::Line;

/// Ordered, append-only transcript of console lines
#[derive(Debug, Clone)]
pub struct ScrollbackBuffer {
    /// Transcript lines, oldest first
    lines: VecDeque<Line>,
    /// Optional cap; oldest lines are evicted past it
    max_lines: Option<usize>,
    /// Set on every mutation, consumed by the presentation layer
    dirty: bool,
    /// Lines appended over the buffer's lifetime, never decremented
    total_appended: u64,
    /// Times the transcript has been cleared
    clear_count: u64,
}

impl ScrollbackBuffer {
    /// Create an unbounded buffer
    pub fn new() -> Self {
        Self {
            lines: VecDeque::new(),
            max_lines: None,
            dirty: false,
            total_appended: 0,
            clear_count: 0,
        }
    }

    /// Create a buffer that evicts the oldest lines beyond `max_lines`
    pub fn with_max_lines(max_lines: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            max_lines: Some(max_lines),
            dirty: false,
            total_appended: 0,
            clear_count: 0,
        }
    }

    /// Append a single line
    pub fn append(&mut self, line: Line) {
        self.lines.push_back(line);
        self.total_appended += 1;
        self.enforce_cap();
        self.dirty = true;
    }

    /// Append several pre-built lines in order
    pub fn append_lines<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = Line>,
    {
        for line in lines {
            self.lines.push_back(line);
            self.total_appended += 1;
        }
        self.enforce_cap();
        self.dirty = true;
    }

    /// Append raw strings, classifying each one on insert
    pub fn append_texts<I, S>(&mut self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.append_lines(texts.into_iter().map(|t| Line::new(t.into())));
    }

    /// Replace the transcript with an empty one
    pub fn clear(&mut self) {
        trace!(discarded = self.lines.len(), "clearing scrollback");
        self.lines.clear();
        self.clear_count += 1;
        self.dirty = true;
    }

    /// Ordered copy of the current transcript. Read-only, no side effect.
    pub fn snapshot(&self) -> Vec<Line> {
        self.lines.iter().cloned().collect()
    }

    /// Iterate the transcript in append order
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// The most recently appended line
    pub fn last(&self) -> Option<&Line> {
        self.lines.back()
    }

    /// Number of lines currently held
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the transcript is empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the buffer has mutated since the flag was last taken
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Consume the dirty flag. Returns true if the buffer mutated since
    /// the last call, signalling the renderer to scroll to the bottom.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Configured cap, if any
    pub fn max_lines(&self) -> Option<usize> {
        self.max_lines
    }

    /// Lines appended over the buffer's lifetime. Unlike `len`, this is
    /// monotone: neither cap eviction nor `clear` ever lowers it, so a
    /// renderer can diff against it to find lines it has not yet shown.
    pub fn total_appended(&self) -> u64 {
        self.total_appended
    }

    /// Number of times the transcript has been cleared
    pub fn clear_count(&self) -> u64 {
        self.clear_count
    }

    fn enforce_cap(&mut self) {
        if let Some(max) = self.max_lines {
            while self.lines.len() > max {
                self.lines.pop_front();
            }
        }
    }
}

impl Default for ScrollbackBuffer {
    fn default() -> Self {
        Self::new()
    }
}
