//! ANSI styling for console lines
//!
//! Maps line kinds to the terminal escape codes used by the demo binary,
//! mirroring the dashboard palette: bold purple prompts, green `Running`
//! markers, bright purple status lines, red errors.

use crate::models::{Line, LineKind};

/// Reset all attributes
pub const RESET: &str = "\x1b[0m";

/// SGR sequence for a line kind, `None` for default styling
pub fn color_for(kind: LineKind) -> Option<&'static str> {
    match kind {
        LineKind::Prompt => Some("\x1b[1;35m"),
        LineKind::Success => Some("\x1b[32m"),
        LineKind::Status => Some("\x1b[95m"),
        LineKind::Error => Some("\x1b[31m"),
        LineKind::Plain => None,
    }
}

/// Render a line to a string, styling each span when `color` is enabled.
///
/// Success lines highlight only their `Running` spans; the surrounding
/// text stays unstyled, exactly as classification produces the spans.
pub fn render_line(line: &Line, color: bool) -> String {
    if !color {
        return line.text.clone();
    }

    let mut out = String::with_capacity(line.text.len() + 16);
    for span in line.spans() {
        match color_for(span.kind) {
            Some(code) => {
                out.push_str(code);
                out.push_str(span.text);
                out.push_str(RESET);
            }
            None => out.push_str(span.text),
        }
    }
    out
}
