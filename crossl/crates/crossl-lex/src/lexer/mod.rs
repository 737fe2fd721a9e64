//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, the longest-match loop and the token iterator
//! - `comment` - Whitespace, comment and byte-order-mark skipping
//! - `identifier` - Identifier matcher
//! - `number` - Integer, float and hex literal matchers
//! - `string` - String literal matcher
//! - `operator` - Operator and punctuation matcher
//! - `directive` - Preprocessor line matcher
//!
//! The matchers are pure functions from the unread text to a match length;
//! the [`Dialect`](crate::Dialect) table decides which of them run.

mod comment;
mod core;
pub(crate) mod directive;
pub(crate) mod identifier;
pub(crate) mod number;
pub(crate) mod operator;
pub(crate) mod string;

pub use core::Lexer;
