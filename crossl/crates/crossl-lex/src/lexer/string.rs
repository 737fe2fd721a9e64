//! String literal matching.
//!
//! HLSL strings only show up in annotations and `printf`-style intrinsics,
//! so the rules are the plain C ones: double quotes, a backslash escapes the
//! next character, and an unescaped newline ends the literal unterminated.

use crate::dialect::Scan;

/// Matches a string literal at the start of `rest`, quotes included.
pub(crate) fn scan_string(rest: &str) -> Scan {
    let mut chars = rest.char_indices();
    if !matches!(chars.next(), Some((_, '"'))) {
        return Scan::NoMatch;
    }

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Scan::Matched(i + 1),
            '\\' => {
                if chars.next().is_none() {
                    break;
                }
            },
            '\n' => return Scan::Unterminated(i),
            _ => {},
        }
    }

    Scan::Unterminated(rest.len())
}
