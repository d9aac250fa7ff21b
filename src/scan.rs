//! Block location: where front matter starts and ends inside a document.
//!
//! Everything here works on borrowed slices of the source string. Offsets
//! form a dependency chain (directive, span start, closing fence, body) and
//! are resolved in that order in a single pass; no whole-document regex is
//! involved, only prefix checks and substring search.

use std::sync::LazyLock;

use regex::Regex;

use crate::delimiters::Delimiters;

/// A located front matter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Block<'a> {
    /// Text between the opening fence and the end of its line, exactly as
    /// written. Empty when the fence line carries nothing.
    pub directive_raw: &'a str,
    /// Raw matter text with at most one leading line terminator stripped.
    /// Runs to the end of the document when the closing fence is missing.
    pub matter: &'a str,
    /// Body content after the closing fence, with one leading line
    /// terminator stripped. Empty when the block is unterminated.
    pub content: &'a str,
}

// Lines holding only a comment, e.g. "# draft: true". The original rule
// requires at least one character after the '#', so a bare "#" line keeps a
// block non-blank.
static COMMENT_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*#[^\n]+").unwrap());

/// Whether `source` opens with a front matter fence.
///
/// The fence must be the opening delimiter NOT followed by the closing
/// delimiter's final character; `----` under `---` fences is a dash run,
/// not a fence around an empty block. The comparison is deliberately
/// single-character on both sides, matching the historical rule.
pub(crate) fn has_matter(source: &str, delimiters: &Delimiters) -> bool {
    if delimiters.open.is_empty() || !source.starts_with(&delimiters.open) {
        return false;
    }
    match (
        source[delimiters.open.len()..].chars().next(),
        delimiters.close.chars().last(),
    ) {
        (Some(next), Some(last)) => next != last,
        // Nothing after the fence: an empty block.
        _ => true,
    }
}

/// Locate the front matter block in `source`, if there is one.
pub(crate) fn scan<'a>(source: &'a str, delimiters: &Delimiters) -> Option<Block<'a>> {
    if !has_matter(source, delimiters) {
        return None;
    }
    let rest = &source[delimiters.open.len()..];

    // Directive: fence line remainder, up to but not including the line
    // terminator. Without any newline the whole remainder is the directive
    // and the block degrades to empty.
    let directive_raw = match rest.find('\n') {
        Some(newline) => rest[..newline].strip_suffix('\r').unwrap_or(&rest[..newline]),
        None => rest,
    };

    // The span advances past the directive only when it names something;
    // whitespace-only fence lines stay part of the block.
    let mut start = delimiters.open.len();
    if !directive_raw.trim().is_empty() {
        start += directive_raw.len();
    }

    // First closing fence at a line start; absent means the block consumes
    // the rest of the document. Not an error.
    let close_pattern = delimiters.close_pattern();
    let finish = source[start..]
        .find(&close_pattern)
        .map_or(source.len(), |offset| start + offset);

    let span = &source[start..finish];
    let matter = span
        .strip_prefix('\n')
        .or_else(|| span.strip_prefix("\r\n"))
        .unwrap_or(span);

    let content = if finish == source.len() {
        ""
    } else {
        let after = &source[finish + close_pattern.len()..];
        after
            .strip_prefix('\n')
            .or_else(|| after.strip_prefix("\r\n"))
            .unwrap_or(after)
    };

    Some(Block { directive_raw, matter, content })
}

/// Whether a raw matter block carries no real data: nothing remains after
/// dropping comment lines and surrounding whitespace.
pub(crate) fn is_blank(matter: &str) -> bool {
    COMMENT_LINE_RE.replace_all(matter, "").trim().is_empty()
}
