//! Trivia skipping.
//!
//! Whitespace and comments are consumed here and never become tokens. The
//! comment spellings come from the dialect; block comments do not nest.

use crossl_util::Span;

use crate::chars::is_whitespace;
use crate::error::LexError;
use crate::Lexer;

const BOM: char = '\u{FEFF}';

impl<'src> Lexer<'src> {
    /// Skips whitespace and comments up to the next token or end of input.
    ///
    /// A byte-order mark is skipped once, at offset 0.
    pub(crate) fn skip_trivia(&mut self) -> Result<(), LexError> {
        if !self.bom_checked {
            self.bom_checked = true;
            if self.cursor.remaining().starts_with(BOM) {
                self.cursor.advance();
            }
        }

        loop {
            if self.cursor.is_at_end() {
                return Ok(());
            }

            let c = self.cursor.current_char();
            if is_whitespace(c) {
                if c == '\n' {
                    self.line_is_blank = true;
                }
                self.cursor.advance();
                continue;
            }

            let rest = self.cursor.remaining();
            if let Some(opener) = self.dialect.line_comment {
                if rest.starts_with(opener) {
                    self.skip_line_comment();
                    continue;
                }
            }
            if let Some((opener, closer)) = self.dialect.block_comment {
                if rest.starts_with(opener) {
                    self.skip_block_comment(opener, closer)?;
                    continue;
                }
            }

            return Ok(());
        }
    }

    /// Skips to the end of the line; the newline is left for the
    /// whitespace loop so it can mark the next line as blank.
    fn skip_line_comment(&mut self) {
        let len = self
            .cursor
            .remaining()
            .find('\n')
            .unwrap_or(self.cursor.remaining().len());
        self.cursor.advance_bytes(len);
    }

    fn skip_block_comment(&mut self, opener: &str, closer: &str) -> Result<(), LexError> {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();

        let body = &self.cursor.remaining()[opener.len()..];
        match body.find(closer) {
            Some(end) => {
                self.cursor.advance_bytes(opener.len() + end + closer.len());
                Ok(())
            },
            None => {
                let span = Span::new(start, start + opener.len(), line, column);
                tracing::debug!(line, column, "unterminated block comment");
                Err(LexError::UnterminatedBlockComment { span })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexError, TokenKind};

    #[test]
    fn test_skip_whitespace() {
        let tokens = tokenize(" \t\r\n\u{0B}\u{0C}hello").unwrap();
        assert_eq!(tokens[0].lexeme, "hello");
        assert_eq!(tokens[0].line(), 2);
    }

    #[test]
    fn test_skip_line_comment() {
        let tokens = tokenize("// Shift left by 1\nhello // trailing").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme, "hello");
        assert_eq!((tokens[0].line(), tokens[0].column()), (2, 1));
    }

    #[test]
    fn test_skip_block_comment() {
        let tokens = tokenize("/* comment\n spanning */hello").unwrap();
        assert_eq!(tokens[0].lexeme, "hello");
        assert_eq!((tokens[0].line(), tokens[0].column()), (2, 13));
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        let tokens = tokenize("/* outer /* inner */ after */").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = tokenize("float a;\n  /* never closed").unwrap_err();
        assert_eq!(
            err,
            LexError::UnterminatedBlockComment {
                span: crossl_util::Span::new(11, 13, 2, 3)
            }
        );
    }

    #[test]
    fn test_comment_star_slash_needs_both() {
        assert!(tokenize("/*/").is_err());
        assert_eq!(tokenize("/**/").unwrap().len(), 1);
    }

    #[test]
    fn test_bom_skipped() {
        let tokens = tokenize("\u{FEFF}float4 c;").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::TypeKeyword);
        assert_eq!(tokens[0].span.start, 3);
        assert_eq!(tokens[0].column(), 2);
    }

    #[test]
    fn test_bom_only_at_start() {
        let err = tokenize("a \u{FEFF}").unwrap_err();
        assert!(matches!(err, LexError::UnexpectedChar { ch: '\u{FEFF}', .. }));
    }
}
