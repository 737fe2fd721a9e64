//! Lookahead over a lexed token stream.
//!
//! Parsers walk the `Vec<Token>` from [`tokenize`](crate::tokenize) with a
//! [`TokenCursor`]: look at the current token, peek a few ahead, consume.
//! Past the end the cursor keeps answering with the final `Eof` token.

use crossl_util::Span;

use crate::token::{Token, TokenKind};

/// A read position in a token slice.
///
/// # Example
///
/// ```
/// use crossl_lex::{tokenize, TokenCursor, TokenKind};
///
/// let tokens = tokenize("float4 c : COLOR;").unwrap();
/// let mut cursor = TokenCursor::new(&tokens);
/// assert_eq!(cursor.peek_nth(2).kind, TokenKind::SemanticColon);
/// cursor.advance();
/// assert!(cursor.eat(TokenKind::Identifier).is_some());
/// assert!(cursor.check(TokenKind::SemanticColon));
/// ```
#[derive(Clone, Debug)]
pub struct TokenCursor<'t, 'src> {
    tokens: &'t [Token<'src>],
    position: usize,
    eof: Token<'src>,
}

impl<'t, 'src> TokenCursor<'t, 'src> {
    /// Creates a cursor at the first token.
    ///
    /// The slice is expected to end with `Eof`, as [`tokenize`](crate::tokenize)
    /// output does. If it does not, an `Eof` placed right after the last
    /// token is synthesized for reads past the end.
    pub fn new(tokens: &'t [Token<'src>]) -> Self {
        let eof = match tokens.last() {
            Some(last) if last.is_eof() => *last,
            Some(last) => Token::new(
                TokenKind::Eof,
                "",
                Span::point(
                    last.span.end,
                    last.span.line,
                    last.span.column + last.lexeme.chars().count() as u32,
                ),
            ),
            None => Token::new(TokenKind::Eof, "", Span::point(0, 1, 1)),
        };
        Self {
            tokens,
            position: 0,
            eof,
        }
    }

    /// The current token.
    #[inline]
    pub fn peek(&self) -> &Token<'src> {
        self.peek_nth(0)
    }

    /// The token `n` places after the current one (`0` is the current one).
    pub fn peek_nth(&self, n: usize) -> &Token<'src> {
        self.position
            .checked_add(n)
            .and_then(|i| self.tokens.get(i))
            .unwrap_or(&self.eof)
    }

    /// Consumes and returns the current token.
    ///
    /// At the end this returns `Eof` without moving.
    pub fn advance(&mut self) -> Token<'src> {
        let token = *self.peek();
        if !token.is_eof() && self.position < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    /// True if the current token has the given kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token<'src>> {
        self.check(kind).then(|| self.advance())
    }

    /// True once the current token is `Eof`.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// Index of the current token in the slice.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }
}
