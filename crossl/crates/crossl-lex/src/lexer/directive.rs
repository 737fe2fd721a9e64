//! Preprocessor line matching.
//!
//! The lexer does not expand macros. A directive is kept as one
//! [`TokenKind::Preprocessor`](crate::TokenKind::Preprocessor) token whose
//! lexeme is the whole logical line, so a driver can hand it to a
//! preprocessor or pass it through to the target dialect.

/// Matches a directive at the start of `rest`.
///
/// Only fires when `at_line_start` is set (nothing but blanks and comments
/// before it on the line). The match runs to the end of the line; a
/// backslash right before the line break continues it onto the next line.
/// The line break itself, and a `\r` before it, are not part of the match.
pub(crate) fn scan_directive(rest: &str, at_line_start: bool) -> Option<usize> {
    if !at_line_start || !rest.starts_with('#') {
        return None;
    }

    let mut from = 0;
    loop {
        let Some(newline) = rest[from..].find('\n').map(|i| from + i) else {
            return Some(rest.trim_end_matches('\r').len());
        };
        let line = rest[..newline].trim_end_matches('\r');
        if line.ends_with('\\') {
            from = newline + 1;
        } else {
            return Some(line.len());
        }
    }
}
