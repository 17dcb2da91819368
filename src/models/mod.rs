//! Core data models for the console
//!
//! This module contains the data structures that represent the domain
//! entities of the console: rendered lines, their styling kinds, and
//! the styled sub-spans used by the presentation layer.

pub mod line;

// Re-exports for convenience
pub use line::{Line, LineKind, StyledSpan};
