//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the longest-match scan step and
//! the iterator that drives it.

use std::iter::FusedIterator;

use crossl_util::Span;
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::dialect::{Dialect, RuleMatch};
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Scanner for one source buffer in one dialect.
///
/// The lexer transforms source text into tokens. It skips whitespace and
/// comments, asks the dialect table for the longest match at each position
/// and routes identifier matches through the keyword classifier.
///
/// # Example
///
/// ```
/// use crossl_lex::{Dialect, Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x <<= 2;", &Dialect::HLSL);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::ShiftLeftAssign);
/// ```
pub struct Lexer<'src> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'src>,

    /// Token table and keyword set.
    pub(crate) dialect: &'static Dialect,

    /// Only whitespace or comments precede the cursor on the current line.
    pub(crate) line_is_blank: bool,

    /// Whether the byte order mark has been checked.
    pub(crate) bom_checked: bool,

    /// Set once `Eof` or an error has been yielded by the iterator.
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for `source` in the given dialect.
    pub fn new(source: &'src str, dialect: &'static Dialect) -> Self {
        Self {
            cursor: Cursor::new(source),
            dialect,
            line_is_blank: true,
            bom_checked: false,
            finished: false,
        }
    }

    /// The dialect this lexer scans.
    pub fn dialect(&self) -> &'static Dialect {
        self.dialect
    }

    /// Returns the next token.
    ///
    /// Once the end of input is reached this keeps returning `Eof`. Errors
    /// are not recoverable: the cursor stays on the offending position.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        self.skip_trivia()?;

        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(Token::new(
                TokenKind::Eof,
                "",
                Span::point(start, line, column),
            ));
        }

        match self
            .dialect
            .longest_match(self.cursor.remaining(), self.line_is_blank)
        {
            RuleMatch::Matched { kind, len } => {
                self.cursor.advance_bytes(len);
                self.line_is_blank = false;

                let lexeme = self.cursor.slice_from(start);
                let kind = if kind == TokenKind::Identifier {
                    self.dialect.classify_identifier(lexeme)
                } else {
                    kind
                };
                let span = Span::new(start, self.cursor.position(), line, column);
                trace!(kind = kind.name(), lexeme, line, column, "token");
                Ok(Token::new(kind, lexeme, span))
            },
            RuleMatch::Unterminated { len } => Err(LexError::UnterminatedString {
                span: Span::new(start, start + len, line, column),
            }),
            RuleMatch::NoMatch => {
                let ch = self.cursor.current_char();
                Err(LexError::UnexpectedChar {
                    ch,
                    span: Span::new(start, start + ch.len_utf8(), line, column),
                })
            },
        }
    }

    /// Scans the whole input.
    ///
    /// Returns every token in source order, ending with exactly one `Eof`,
    /// or the first error encountered.
    pub fn tokenize(self) -> Result<Vec<Token<'src>>, LexError> {
        let dialect = self.dialect.name;
        let bytes = self.cursor.source().len();

        let result: Result<Vec<_>, _> = self.collect();
        match &result {
            Ok(tokens) => debug!(dialect, bytes, tokens = tokens.len(), "tokenized"),
            Err(err) => debug!(dialect, bytes, error = %err, "tokenize failed"),
        }
        result
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        self.finished = match &result {
            Ok(token) => token.is_eof(),
            Err(_) => true,
        };
        Some(result)
    }
}

impl FusedIterator for Lexer<'_> {}
