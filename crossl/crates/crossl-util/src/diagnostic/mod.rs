//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating and rendering compiler
//! diagnostics (errors and warnings with optional help lines).
//!
//! # Examples
//!
//! ```
//! use crossl_util::diagnostic::{Diagnostic, DiagnosticCode};
//! use crossl_util::span::Span;
//!
//! let diag = Diagnostic::error("unexpected character '@'", Span::new(4, 5, 1, 5))
//!     .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
//! assert_eq!(diag.to_string(), "error[E1001]: unexpected character '@'");
//! ```

mod codes;

pub use codes::DiagnosticCode;

use std::fmt;

use crate::span::{SourceMap, Span};

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use crossl_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that stops compilation
    Error,
    /// A warning that doesn't stop compilation
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
///
/// # Examples
///
/// ```
/// use crossl_util::diagnostic::{Diagnostic, Level};
/// use crossl_util::span::Span;
///
/// let diag = Diagnostic::error("unterminated string literal", Span::DUMMY);
/// assert_eq!(diag.level, Level::Error);
/// ```
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Render the diagnostic as multi-line text
    ///
    /// The location block comes from `sources` when the span's file is
    /// registered there; help lines follow it.
    ///
    /// ```text
    /// error[E1001]: unexpected character '@'
    /// --> ps.hlsl:2:5
    ///   2 | c = @;
    ///     |     ^
    /// ```
    pub fn render(&self, sources: &SourceMap) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}", self.level, code, self.message),
            None => format!("{}: {}", self.level, self.message),
        };
        if self.span != Span::DUMMY {
            if let Ok(location) = sources.format_span(self.span) {
                out.push('\n');
                out.push_str(&location);
            }
        }
        for help in &self.helps {
            out.push_str(&format!("\n  = help: {}", help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
    }

    #[test]
    fn test_diagnostic_with_code() {
        let code = DiagnosticCode::new("E", 1001);
        let diag = Diagnostic::error("test", Span::DUMMY).with_code(code);
        assert_eq!(diag.code, Some(code));
    }

    #[test]
    fn test_diagnostic_with_help() {
        let diag = Diagnostic::error("test", Span::DUMMY)
            .with_help("help 1")
            .with_help("help 2");
        assert_eq!(diag.helps, vec!["help 1", "help 2"]);
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("unterminated string literal", Span::DUMMY)
            .with_code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING);
        assert_eq!(diag.to_string(), "error[E1002]: unterminated string literal");
        assert_eq!(
            Diagnostic::warning("odd", Span::DUMMY).to_string(),
            "warning: odd"
        );
    }

    #[test]
    fn test_diagnostic_render_with_source() {
        let mut sources = SourceMap::new();
        let file = sources.add_file("ps.hlsl", "float4 c;\nc = @;");
        let diag = Diagnostic::error("unexpected character '@'", Span::new(14, 15, 2, 5).with_file_id(file))
            .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
        assert_eq!(
            diag.render(&sources),
            "error[E1001]: unexpected character '@'\n--> ps.hlsl:2:5\n  2 | c = @;\n    |     ^"
        );
    }

    #[test]
    fn test_diagnostic_render_without_source() {
        let sources = SourceMap::new();
        let diag = Diagnostic::error("boom", Span::new(0, 1, 1, 1)).with_help("try again");
        assert_eq!(diag.render(&sources), "error: boom\n  = help: try again");
    }

    #[test]
    fn test_render_unattached_span_skips_registered_file() {
        let mut sources = SourceMap::new();
        sources.add_file("vs.hlsl", "float4 p;");
        let diag = Diagnostic::error("unexpected character '$'", Span::new(0, 1, 1, 1));
        assert_eq!(diag.render(&sources), "error: unexpected character '$'");
    }
}
