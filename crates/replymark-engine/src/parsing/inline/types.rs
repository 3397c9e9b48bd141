use serde::Serialize;

/// A single typed unit of inline-formatted text within a block's text.
///
/// A span sequence, concatenated, reconstructs the source line with the
/// markup delimiters stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Span {
    /// Plain text. May be empty between adjacent markup matches; callers
    /// drop empty spans at render time, the formatter does not filter them.
    Text(String),
    /// Backtick-delimited code, delimiters stripped, content verbatim.
    InlineCode(String),
    /// Double-asterisk bold, delimiters stripped.
    Bold(String),
}
