//! Keeps the raw text of a segment valid while whitespace is removed from it.
//!
//! In raw text a whitespace character may be the second half of an escape
//! (`\` followed by a space or a line break), and deleting whitespace
//! may join a `$` with a following `{`.

use std::borrow::Cow;

/// Replaces escaped whitespace with the text it stands for.
/// Line continuations are dropped, `\ ` and the like become the bare character.
///
/// Afterwards no whitespace character in `raw` belongs to an escape sequence.
pub fn unescape_whitespace(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut output = String::with_capacity(raw.len());
    let mut changed = false;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            output.push(c);
            continue;
        }

        let Some(escaped) = chars.next() else {
            output.push(c);
            break;
        };

        if !escaped.is_whitespace() {
            output.push(c);
            output.push(escaped);
            continue;
        }

        changed = true;
        match escaped {
            '\r' => {
                chars.next_if_eq(&'\n');
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => output.push(other),
        }
    }

    if changed {
        Cow::Owned(output)
    } else {
        Cow::Borrowed(raw)
    }
}

/// Escapes each `${` which would otherwise start an interpolation
pub fn escape_interpolations(raw: &str) -> Cow<'_, str> {
    if !raw.contains("${") {
        return Cow::Borrowed(raw);
    }

    let mut output = String::with_capacity(raw.len() + 1);
    let mut backslashes = 0usize;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' && backslashes % 2 == 0 && chars.peek() == Some(&'{') {
            output.push('\\');
        }

        backslashes = if c == '\\' { backslashes + 1 } else { 0 };
        output.push(c);
    }

    if output.len() == raw.len() {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(output)
    }
}
