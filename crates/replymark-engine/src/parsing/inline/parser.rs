use std::ops::Range;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Strong},
    types::Span,
};

/// Byte ranges of one delimited construct: the full match and its interior.
struct Delimited {
    start: usize,
    end: usize,
    inner: Range<usize>,
}

/// Formats one line of plain text into a sequence of [`Span`]s.
///
/// Two-level resolution sharing one scan: code spans are carved out first,
/// then every non-code segment (including the possibly-empty segments
/// before, between, and after code spans) is re-scanned for bold. Segment
/// remnants become `Text` spans, empty strings included, so concatenating
/// all span values reconstructs the line minus delimiters.
///
/// Total over all strings: unclosed or empty delimiter pairs stay literal.
pub fn format_inline(line: &str) -> Vec<Span> {
    let mut out = Vec::new();
    let mut cur = Cursor::new(line);
    let mut text_start = 0;

    while !cur.eof() {
        if let Some(code) = try_parse_code_span(&mut cur) {
            format_bold(&line[text_start..code.start], &mut out);
            out.push(Span::InlineCode(line[code.inner].to_string()));
            text_start = code.end;
            continue;
        }
        cur.bump();
    }

    format_bold(&line[text_start..], &mut out);
    out
}

/// Attempts to parse a code span starting at the current position.
///
/// The interior must be non-empty; a doubled backtick or an unclosed one is
/// literal text. On failure the cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<Delimited> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.i;
    cur.bump(); // `
    let inner_start = cur.i;

    while !cur.eof() && cur.peek() != Some(CodeSpan::TICK) {
        cur.bump();
    }
    let inner_end = cur.i;

    if cur.peek() != Some(CodeSpan::TICK) || inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(Delimited {
        start,
        end: cur.i,
        inner: inner_start..inner_end,
    })
}

/// Scans a non-code segment for bold markup, pushing spans onto `out`.
///
/// Remnant text between and around matches is pushed as `Text` even when
/// empty; filtering is left to the presentation layer.
fn format_bold(segment: &str, out: &mut Vec<Span>) {
    let mut cur = Cursor::new(segment);
    let mut text_start = 0;

    while !cur.eof() {
        if let Some(bold) = try_parse_bold(&mut cur) {
            out.push(Span::Text(segment[text_start..bold.start].to_string()));
            out.push(Span::Bold(segment[bold.inner].to_string()));
            text_start = bold.end;
            continue;
        }
        cur.bump();
    }

    out.push(Span::Text(segment[text_start..].to_string()));
}

/// Attempts to parse bold markup starting at the current position.
///
/// Closes at the first following `**`. The interior must be non-empty and
/// may contain single asterisks. On failure the cursor position is
/// restored.
fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<Delimited> {
    if !cur.starts_with(Strong::DELIM) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.i;
    cur.bump_n(Strong::DELIM.len());
    let inner_start = cur.i;

    while !cur.eof() && !cur.starts_with(Strong::DELIM) {
        cur.bump();
    }
    let inner_end = cur.i;

    if !cur.starts_with(Strong::DELIM) || inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump_n(Strong::DELIM.len());

    Some(Delimited {
        start,
        end: cur.i,
        inner: inner_start..inner_end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Span {
        Span::Text(s.to_string())
    }

    fn code(s: &str) -> Span {
        Span::InlineCode(s.to_string())
    }

    fn bold(s: &str) -> Span {
        Span::Bold(s.to_string())
    }

    #[test]
    fn plain_text_is_a_single_span() {
        assert_eq!(format_inline("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn empty_line_is_a_single_empty_span() {
        assert_eq!(format_inline(""), vec![text("")]);
    }

    #[test]
    fn code_span_with_surrounding_text() {
        assert_eq!(
            format_inline("call `f()` here"),
            vec![text("call "), code("f()"), text(" here")]
        );
    }

    #[test]
    fn bold_with_surrounding_text() {
        assert_eq!(
            format_inline("a **b** c"),
            vec![text("a "), bold("b"), text(" c")]
        );
    }

    #[test]
    fn code_resolves_before_bold() {
        assert_eq!(
            format_inline("`**not bold**`"),
            vec![text(""), code("**not bold**"), text("")]
        );
    }

    #[test]
    fn bold_spanning_a_code_span_stays_literal() {
        // Each non-code segment is scanned on its own, so the `**` halves
        // never pair up across the code span.
        assert_eq!(
            format_inline("**a `b` c**"),
            vec![text("**a "), code("b"), text(" c**")]
        );
    }

    #[test]
    fn unclosed_backtick_is_literal() {
        assert_eq!(format_inline("a `b"), vec![text("a `b")]);
    }

    #[test]
    fn unclosed_bold_is_literal() {
        assert_eq!(format_inline("a **b"), vec![text("a **b")]);
    }

    #[test]
    fn empty_delimiter_pairs_are_literal() {
        assert_eq!(format_inline("a `` b"), vec![text("a `` b")]);
        assert_eq!(format_inline("a **** b"), vec![text("a **** b")]);
    }

    #[test]
    fn adjacent_matches_leave_empty_text_remnants() {
        assert_eq!(
            format_inline("`a``b`"),
            vec![text(""), code("a"), text(""), code("b"), text("")]
        );
    }

    #[test]
    fn bold_interior_may_contain_a_single_asterisk() {
        assert_eq!(format_inline("**a*b**"), vec![text(""), bold("a*b"), text("")]);
    }

    #[test]
    fn doubled_backtick_before_real_span() {
        assert_eq!(
            format_inline("``x`"),
            vec![text("`"), code("x"), text("")]
        );
    }

    #[test]
    fn concatenation_reconstructs_sans_delimiters() {
        let line = "Use `iter().sum()` and **avoid** manual loops";
        let joined: String = format_inline(line)
            .iter()
            .map(|s| match s {
                Span::Text(v) | Span::InlineCode(v) | Span::Bold(v) => v.as_str(),
            })
            .collect();
        assert_eq!(joined, "Use iter().sum() and avoid manual loops");
    }
}
