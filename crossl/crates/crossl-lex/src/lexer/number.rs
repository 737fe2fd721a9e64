//! Number literal matching.
//!
//! Three separate matchers, one per literal kind. The dialect table runs all
//! of them and the longest match decides: `0x02` is hex (4 bytes) rather
//! than the integer `0` (1 byte), `1.5` is a float rather than `1`.
//!
//! # Number Formats
//!
//! - Integer: `0`, `42`, `10u`, `7L`
//! - Hexadecimal: `0x02`, `0XFFu`
//! - Float: `0.5`, `1.`, `.25`, `1e-3`, `2.0f`, `0.5h`

use crate::chars::{count_while, is_float_suffix, is_int_suffix};

/// Decimal digits with up to two integer suffix characters.
pub(crate) fn scan_int(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let digits = count_while(bytes, 0, |b| b.is_ascii_digit());
    if digits == 0 {
        return None;
    }
    Some(digits + int_suffix_len(bytes, digits))
}

/// `0x`/`0X`, at least one hex digit, then up to two integer suffix characters.
///
/// A bare `0x` is not a hex literal; the integer matcher takes the `0`.
pub(crate) fn scan_hex(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if !matches!(bytes, [b'0', b'x' | b'X', ..]) {
        return None;
    }
    let digits = count_while(bytes, 2, |b| b.is_ascii_hexdigit());
    if digits == 0 {
        return None;
    }
    let end = 2 + digits;
    Some(end + int_suffix_len(bytes, end))
}

/// A decimal number that has a fraction, an exponent, or both.
pub(crate) fn scan_float(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let int_digits = count_while(bytes, 0, |b| b.is_ascii_digit());
    let mut end = int_digits;
    let mut is_float = false;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = count_while(bytes, end + 1, |b| b.is_ascii_digit());
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
            is_float = true;
        }
    }

    if int_digits == 0 && !is_float {
        return None;
    }

    if let Some(exp) = exponent_len(bytes, end) {
        end += exp;
        is_float = true;
    }

    if !is_float {
        return None;
    }

    if bytes.get(end).copied().is_some_and(is_float_suffix) {
        end += 1;
    }
    Some(end)
}

/// `e`/`E`, an optional sign, and at least one digit.
fn exponent_len(bytes: &[u8], at: usize) -> Option<usize> {
    if !matches!(bytes.get(at), Some(b'e' | b'E')) {
        return None;
    }
    let mut end = at + 1;
    if matches!(bytes.get(end), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits = count_while(bytes, end, |b| b.is_ascii_digit());
    (digits > 0).then_some(end + digits - at)
}

fn int_suffix_len(bytes: &[u8], at: usize) -> usize {
    count_while(bytes, at, is_int_suffix).min(2)
}
