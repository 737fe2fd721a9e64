//! Identifier matching.
//!
//! Only the shape is checked here; deciding whether the word is reserved is
//! the dialect classifier's job.

use crate::chars::{is_ident_continue, is_ident_start};

/// Length of the identifier at the start of `rest`, if one starts there.
pub(crate) fn scan_identifier(rest: &str) -> Option<usize> {
    let first = rest.chars().next()?;
    if !is_ident_start(first) {
        return None;
    }
    let len = rest
        .char_indices()
        .find(|&(_, c)| !is_ident_continue(c))
        .map_or(rest.len(), |(i, _)| i);
    Some(len)
}
