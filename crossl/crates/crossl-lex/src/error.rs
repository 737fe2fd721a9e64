//! Lexical errors.
//!
//! The scanner is fail-fast: the first error ends the scan and is returned
//! to the caller as a [`LexError`]. Turning it into something a user reads
//! goes through [`LexError::to_diagnostic`].

use crossl_util::{Diagnostic, DiagnosticCode, FileId, Span};
use thiserror::Error;

/// Error raised when the source cannot be split into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No skip rule or token pattern matches at this position
    #[error("unexpected character {ch:?} at {}:{}", .span.line, .span.column)]
    UnexpectedChar {
        /// The character no rule accepts
        ch: char,
        /// Covers `ch`
        span: Span,
    },

    /// A string literal reached a newline or the end of input before its
    /// closing quote; the span starts at the opening quote
    #[error("unterminated string literal starting at {}:{}", .span.line, .span.column)]
    UnterminatedString {
        /// From the opening quote to where scanning stopped
        span: Span,
    },

    /// A block comment has no closing delimiter; the span starts at the
    /// opening delimiter
    #[error("unterminated block comment starting at {}:{}", .span.line, .span.column)]
    UnterminatedBlockComment {
        /// The opening `/*`
        span: Span,
    },
}

impl LexError {
    /// Location the error points at.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::UnterminatedBlockComment { span } => *span,
        }
    }

    /// Diagnostic code for this error kind.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedChar { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::UnterminatedBlockComment { .. } => {
                DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT
            },
        }
    }

    /// Attaches the error to a file registered in a [`SourceMap`](crossl_util::SourceMap).
    pub fn with_file_id(self, file_id: FileId) -> Self {
        match self {
            LexError::UnexpectedChar { ch, span } => LexError::UnexpectedChar {
                ch,
                span: span.with_file_id(file_id),
            },
            LexError::UnterminatedString { span } => LexError::UnterminatedString {
                span: span.with_file_id(file_id),
            },
            LexError::UnterminatedBlockComment { span } => LexError::UnterminatedBlockComment {
                span: span.with_file_id(file_id),
            },
        }
    }

    /// Converts the error into a [`Diagnostic`] with its code and span.
    ///
    /// ```
    /// use crossl_lex::tokenize;
    ///
    /// let err = tokenize("float x = @;").unwrap_err();
    /// let diag = err.to_diagnostic();
    /// assert_eq!(diag.to_string(), "error[E1001]: unexpected character '@'");
    /// assert_eq!(diag.span.column, 11);
    /// ```
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = match self {
            LexError::UnexpectedChar { ch, span } => {
                Diagnostic::error(format!("unexpected character {:?}", ch), *span)
            },
            LexError::UnterminatedString { span } => {
                Diagnostic::error("unterminated string literal", *span)
                    .with_help("add a closing `\"` before the end of the line")
            },
            LexError::UnterminatedBlockComment { span } => {
                Diagnostic::error("unterminated block comment", *span)
                    .with_help("close the comment with `*/`")
            },
        };
        diag.with_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_position() {
        let err = LexError::UnexpectedChar {
            ch: '@',
            span: Span::new(4, 5, 2, 3),
        };
        assert_eq!(err.to_string(), "unexpected character '@' at 2:3");

        let err = LexError::UnterminatedBlockComment {
            span: Span::new(0, 9, 1, 1),
        };
        assert_eq!(err.to_string(), "unterminated block comment starting at 1:1");
    }

    #[test]
    fn test_codes() {
        let span = Span::DUMMY;
        assert_eq!(
            LexError::UnterminatedString { span }.code().as_str(),
            "E1002"
        );
        assert_eq!(
            LexError::UnterminatedBlockComment { span }.code().as_str(),
            "E1003"
        );
    }

    #[test]
    fn test_with_file_id() {
        let err = LexError::UnterminatedString {
            span: Span::new(1, 3, 1, 2),
        }
        .with_file_id(FileId(4));
        assert_eq!(err.span().file_id, FileId(4));
        assert_eq!(err.span().start, 1);
    }

    #[test]
    fn test_to_diagnostic_keeps_span_and_help() {
        let span = Span::new(10, 14, 3, 1);
        let diag = LexError::UnterminatedBlockComment { span }.to_diagnostic();
        assert_eq!(diag.span, span);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT));
        assert_eq!(diag.helps, vec!["close the comment with `*/`"]);
    }
}
