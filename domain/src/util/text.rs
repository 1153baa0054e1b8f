//! Text helpers for diagnostics shown in plain-text controls.

/// Collapse every line-break spelling into `\n`.
///
/// Diagnostics are displayed in a plain-text control, so HTML breaks and
/// escaped `\n` sequences must become real newlines.
pub fn normalize_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace("<br/>", "\n")
        .replace("<br />", "\n")
        .replace("<br>", "\n")
        .replace("\\n", "\n")
}
