//! Parenthesis-aware statement scanner
//!
//! Finds `print(` / `debugPrint(` where a statement can begin, follows the
//! argument list to its matching `)` and accepts the call only when the next
//! non-whitespace byte is the statement terminator. A statement can begin at
//! the start of the text or after `;`, `{` or `}`, ignoring whitespace and
//! comments in between. String literals
//! (including raw, triple-quoted and `${...}` interpolations) and comments
//! are skipped, so parentheses and semicolons inside them never confuse the
//! depth count.
//!
//! All syntax the scanner cares about is ASCII, so byte offsets it produces
//! always fall on `char` boundaries.

use super::Stripped;
use crate::paths::{MARKER, TARGET_CALLS, TERMINATOR};

/// Byte range of one call statement, terminator included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (first byte of the call name)
    pub start: usize,
    /// End byte offset (one past the terminator)
    pub end: usize,
}

impl Span {
    /// Create a new span
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

pub(super) fn strip(text: &str) -> Stripped {
    let spans = find_statements(text);
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for span in &spans {
        out.push_str(&text[last..span.start]);
        out.push_str(MARKER);
        last = span.end;
    }
    out.push_str(&text[last..]);

    Stripped {
        text: out,
        removed: spans.len(),
    }
}

/// Locate every debug-output call statement in `text`, in source order.
///
/// Spans never overlap. Calls used as expressions (arrow bodies, `return`
/// values, arguments, member calls such as `logger.print(...)`) and
/// declarations like `void print(Object? o);` are not reported. Scanning
/// stops at a call whose argument list is still open at the end of the text.
#[must_use]
pub fn find_statements(text: &str) -> Vec<Span> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut at_start = true;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if let Some(next) = skip_trivia(bytes, i) {
            // Comments are transparent, literals are not
            if b != b'/' {
                at_start = false;
            }
            i = next;
            continue;
        }

        if !is_ident_start(b) {
            if !b.is_ascii_whitespace() {
                at_start = matches!(b, TERMINATOR | b'{' | b'}');
            }
            i += 1;
            continue;
        }

        let word_end = ident_end(bytes, i);
        let is_target = TARGET_CALLS.contains(&&text[i..word_end]);

        if at_start && is_target && bytes.get(word_end) == Some(&b'(') {
            match statement_end(bytes, word_end) {
                CallEnd::Statement(end) => {
                    spans.push(Span::new(i, end));
                    i = end;
                    continue;
                },
                CallEnd::Expression => {},
                CallEnd::Unclosed => break,
            }
        }
        at_start = false;
        i = word_end;
    }

    spans
}

/// How a call's argument list ends
enum CallEnd {
    /// Closed and terminated; holds the index one past the terminator
    Statement(usize),
    /// Closed but not followed by the terminator
    Expression,
    /// Still open at the end of the text
    Unclosed,
}

/// Given the index of an opening `(`, find where the call ends.
fn statement_end(bytes: &[u8], open: usize) -> CallEnd {
    let mut depth = 0usize;
    let mut i = open;

    let close = loop {
        if i >= bytes.len() {
            return CallEnd::Unclosed;
        }
        if let Some(next) = skip_trivia(bytes, i) {
            i = next;
            continue;
        }
        match bytes[i] {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    break i;
                }
            },
            _ => {},
        }
        i += 1;
    };

    let mut j = close + 1;
    while j < bytes.len() && bytes[j].is_ascii_whitespace() {
        j += 1;
    }
    if bytes.get(j) == Some(&TERMINATOR) {
        CallEnd::Statement(j + 1)
    } else {
        CallEnd::Expression
    }
}

/// If a comment or string literal starts at `i`, return the index just past it.
fn skip_trivia(bytes: &[u8], i: usize) -> Option<usize> {
    match (bytes[i], bytes.get(i + 1)) {
        (b'/', Some(b'/')) => Some(line_end(bytes, i)),
        (b'/', Some(b'*')) => Some(block_comment_end(bytes, i + 2)),
        (b'\'' | b'"', _) => Some(string_end(bytes, i, false)),
        (b'r', Some(b'\'' | b'"')) if i == 0 || !is_ident_continue(bytes[i - 1]) => {
            Some(string_end(bytes, i + 1, true))
        },
        _ => None,
    }
}

fn line_end(bytes: &[u8], i: usize) -> usize {
    bytes[i..].iter().position(|&b| b == b'\n').map_or(bytes.len(), |p| i + p)
}

/// Dart block comments nest.
fn block_comment_end(bytes: &[u8], mut i: usize) -> usize {
    let mut depth = 1usize;
    while i < bytes.len() {
        match (bytes[i], bytes.get(i + 1)) {
            (b'/', Some(b'*')) => {
                depth += 1;
                i += 2;
            },
            (b'*', Some(b'/')) => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    return i;
                }
            },
            _ => i += 1,
        }
    }
    bytes.len()
}

/// `start` is the index of the opening quote.
fn string_end(bytes: &[u8], start: usize, raw: bool) -> usize {
    let quote = bytes[start];
    let triple = is_triple(bytes, start, quote);
    let mut i = start + if triple { 3 } else { 1 };

    while i < bytes.len() {
        let b = bytes[i];
        if b == b'\\' && !raw {
            i += 2;
            continue;
        }
        if b == b'$' && !raw && bytes.get(i + 1) == Some(&b'{') {
            i = interpolation_end(bytes, i + 2);
            continue;
        }
        if b == quote {
            if !triple {
                return i + 1;
            }
            if is_triple(bytes, i, quote) {
                return i + 3;
            }
        }
        // Unterminated single-line literal: resume on the next line
        if b == b'\n' && !triple {
            return i + 1;
        }
        i += 1;
    }
    bytes.len()
}

fn interpolation_end(bytes: &[u8], mut i: usize) -> usize {
    let mut depth = 1usize;
    while i < bytes.len() {
        if let Some(next) = skip_trivia(bytes, i) {
            i = next;
            continue;
        }
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return i + 1;
                }
            },
            _ => {},
        }
        i += 1;
    }
    bytes.len()
}

fn is_triple(bytes: &[u8], i: usize, quote: u8) -> bool {
    bytes.get(i..i + 3).is_some_and(|s| s.iter().all(|&b| b == quote))
}

const fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

const fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}

fn ident_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..].iter().position(|&b| !is_ident_continue(b)).map_or(bytes.len(), |p| start + p)
}
