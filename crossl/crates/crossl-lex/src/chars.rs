//! Character classes used by the scanner.
//!
//! Shader identifiers and numbers are ASCII-only, so these are thin wrappers
//! over the `u8`/`char` ASCII predicates with the exact sets the dialect
//! tables rely on.

/// Returns true if `c` can start an identifier: `[A-Za-z_]`.
///
/// ```
/// use crossl_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('4'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier: `[A-Za-z0-9_]`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns true for skip-only whitespace: space, tab, CR, LF, VT and FF.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\u{0B}' | '\u{0C}')
}

/// Returns true for integer literal suffixes (`u`, `l`).
#[inline]
pub fn is_int_suffix(b: u8) -> bool {
    matches!(b, b'u' | b'U' | b'l' | b'L')
}

/// Returns true for float literal suffixes (`f`, `h`, `l`).
#[inline]
pub fn is_float_suffix(b: u8) -> bool {
    matches!(b, b'f' | b'F' | b'h' | b'H' | b'l' | b'L')
}

/// Counts the bytes from `from` onward that satisfy `pred`.
#[inline]
pub(crate) fn count_while(bytes: &[u8], from: usize, pred: impl Fn(u8) -> bool) -> usize {
    bytes
        .get(from..)
        .map_or(0, |tail| tail.iter().take_while(|&&b| pred(b)).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_classes() {
        assert!(is_ident_start('a'));
        assert!(is_ident_start('Z'));
        assert!(!is_ident_start('é'));
        assert!(is_ident_continue('9'));
        assert!(!is_ident_continue('-'));
    }

    #[test]
    fn test_whitespace_set() {
        for c in [' ', '\t', '\r', '\n', '\u{0B}', '\u{0C}'] {
            assert!(is_whitespace(c), "{:?}", c);
        }
        assert!(!is_whitespace('\u{A0}'));
        assert!(!is_whitespace('\0'));
    }

    #[test]
    fn test_suffixes() {
        assert!(is_int_suffix(b'u'));
        assert!(!is_int_suffix(b'f'));
        assert!(is_float_suffix(b'h'));
        assert!(!is_float_suffix(b'u'));
    }

    #[test]
    fn test_count_while() {
        assert_eq!(count_while(b"123abc", 0, |b| b.is_ascii_digit()), 3);
        assert_eq!(count_while(b"123abc", 3, |b| b.is_ascii_digit()), 0);
        assert_eq!(count_while(b"12", 5, |b| b.is_ascii_digit()), 0);
    }
}
