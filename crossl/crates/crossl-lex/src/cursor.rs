//! Character cursor for traversing shader source.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking through source text. It handles UTF-8 encoding correctly
//! and tracks line/column information for error reporting.

/// A cursor for traversing source code character by character.
///
/// The cursor keeps the byte position, the 1-based line and the 1-based
/// column (counted in characters) of the next unread character.
///
/// # Example
///
/// ```
/// use crossl_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("uint v;");
/// assert_eq!(cursor.current_char(), 'u');
/// cursor.advance_bytes(4);
/// assert_eq!(cursor.current_char(), ' ');
/// assert_eq!(cursor.column(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character, or `'\0'` at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` bytes ahead of the current position.
    ///
    /// Returns `'\0'` past the end, or when `offset` lands inside a
    /// multi-byte character.
    ///
    /// ```
    /// use crossl_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<<=");
    /// assert_eq!(cursor.peek_char(2), '=');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let pos = match self.position.checked_add(offset) {
            Some(pos) if pos < self.source.len() => pos,
            _ => return '\0',
        };

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// Advances the cursor past the current character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.remaining().chars().next() else {
            return;
        };
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances the cursor by `count` bytes.
    ///
    /// `count` must end on a character boundary; every scanner match does.
    /// Line and column are updated for every character passed over.
    pub fn advance_bytes(&mut self, count: usize) {
        let target = self.position.saturating_add(count).min(self.source.len());
        while self.position < target {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    ///
    /// ```
    /// use crossl_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a;\nb;");
    /// assert_eq!(cursor.line(), 1);
    /// cursor.advance_bytes(3);
    /// assert_eq!(cursor.line(), 2);
    /// assert_eq!(cursor.column(), 1);
    /// ```
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based, in characters).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the unread part of the source.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        self.source.get(self.position..).unwrap_or("")
    }

    /// Returns the source text from byte `start` up to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.position).unwrap_or("")
    }

    /// Returns the whole source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }
}
