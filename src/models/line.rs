//! Console Line Model
//!
//! Represents a single rendered line of console output together with the
//! styling kind derived from its content. Lines are immutable once created;
//! classification is a pure function of the text, evaluated in a fixed
//! priority order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marker that identifies an echoed prompt line
pub const PROMPT_MARKER: char = '$';

/// Substring that marks a line (or sub-span) as a success indicator
pub const SUCCESS_MARKER: &str = "Running";

/// Substring that marks a line as a status indicator
pub const STATUS_MARKER: &str = "Ready";

/// Styling category of a console line
///
/// Classification drives styling, not semantics. `Error` is never produced
/// by classification alone; error lines are constructed explicitly by the
/// interpreter via [`Line::error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LineKind {
    /// Echoed user input, prefixed with the prompt marker
    Prompt,
    /// Line containing the success marker (`Running`)
    Success,
    /// Line containing the status marker (`Ready`)
    Status,
    /// Unstyled output
    #[default]
    Plain,
    /// Failure surfaced by the interpreter
    Error,
}

/// A single line of console output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// The text content
    pub text: String,

    /// Styling category derived from content (or assigned explicitly)
    pub kind: LineKind,

    /// When this line was appended
    pub timestamp: DateTime<Utc>,
}

/// A styled sub-span of a line
///
/// Most lines render as a single span carrying the line's kind. Success
/// lines split around each `Running` occurrence so only the marker itself
/// is highlighted while the rest of the line keeps the default style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledSpan<'a> {
    /// Slice of the line's text covered by this span
    pub text: &'a str,
    /// Styling applied to this span
    pub kind: LineKind,
}

impl Line {
    /// Create a new line, classifying it from its content
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = Self::classify(&text);
        Self {
            text,
            kind,
            timestamp: Utc::now(),
        }
    }

    /// Create a line with an explicit kind, bypassing classification
    pub fn with_kind(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
            timestamp: Utc::now(),
        }
    }

    /// Create an error line (never produced by classification)
    pub fn error(text: impl Into<String>) -> Self {
        Self::with_kind(text, LineKind::Error)
    }

    /// Classify a line's content, first match wins:
    /// prompt marker prefix, then success marker, then status marker,
    /// then plain.
    pub fn classify(text: &str) -> LineKind {
        if text.starts_with(PROMPT_MARKER) {
            LineKind::Prompt
        } else if text.contains(SUCCESS_MARKER) {
            LineKind::Success
        } else if text.contains(STATUS_MARKER) {
            LineKind::Status
        } else {
            LineKind::Plain
        }
    }

    /// Check if this line is empty (a visual separator)
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    /// Split the line into styled spans for rendering
    ///
    /// Success lines highlight only the `Running` substrings; everything
    /// else keeps the default style. All other kinds yield one span
    /// covering the whole line.
    pub fn spans(&self) -> Vec<StyledSpan<'_>> {
        if self.kind != LineKind::Success {
            return vec![StyledSpan {
                text: &self.text,
                kind: self.kind,
            }];
        }

        let mut spans = Vec::new();
        let mut rest = self.text.as_str();
        while let Some(idx) = rest.find(SUCCESS_MARKER) {
            if idx > 0 {
                spans.push(StyledSpan {
                    text: &rest[..idx],
                    kind: LineKind::Plain,
                });
            }
            let end = idx + SUCCESS_MARKER.len();
            spans.push(StyledSpan {
                text: &rest[idx..end],
                kind: LineKind::Success,
            });
            rest = &rest[end..];
        }
        if !rest.is_empty() {
            spans.push(StyledSpan {
                text: rest,
                kind: LineKind::Plain,
            });
        }
        spans
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
