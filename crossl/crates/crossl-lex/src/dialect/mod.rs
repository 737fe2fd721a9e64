//! Dialect descriptions: the token table and keyword set.
//!
//! A [`Dialect`] is plain `'static` data. The scanner is generic and reads
//! everything dialect-specific (which patterns exist, which identifiers are
//! reserved, how comments are spelled) from the `Dialect` it was built with.
//! Tables are read-only and `Sync`, so one dialect is shared by any number
//! of concurrent scans.
//!
//! # Example
//!
//! ```
//! use crossl_lex::dialect::{Dialect, RuleMatch};
//! use crossl_lex::TokenKind;
//!
//! let hlsl = Dialect::by_name("directx").unwrap();
//! assert_eq!(hlsl.name, "hlsl");
//! assert_eq!(
//!     hlsl.longest_match("<<= 1", false),
//!     RuleMatch::Matched { kind: TokenKind::ShiftLeftAssign, len: 3 }
//! );
//! ```

mod hlsl;

use crate::lexer::{directive, identifier, number, operator, string};
use crate::token::TokenKind;

/// Result of running one [`Pattern`] at a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scan {
    /// The pattern does not start here
    NoMatch,
    /// The pattern matched this many bytes (never zero)
    Matched(usize),
    /// The pattern started here but its closing delimiter is missing;
    /// carries the number of bytes examined
    Unterminated(usize),
}

impl From<Option<usize>> for Scan {
    fn from(len: Option<usize>) -> Self {
        match len {
            Some(len) if len > 0 => Scan::Matched(len),
            _ => Scan::NoMatch,
        }
    }
}

/// The shape of text a [`TokenRule`] recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Exact text, used for operators and punctuation
    Literal(&'static str),
    /// `[A-Za-z_][A-Za-z0-9_]*`; the match is then run through the
    /// dialect's keyword classifier
    Identifier,
    /// `0x`/`0X` followed by hex digits and optional integer suffixes
    HexNumber,
    /// Decimal number with a fraction or an exponent, optional float suffix
    FloatNumber,
    /// Decimal digits with optional integer suffixes
    IntNumber,
    /// Double-quoted string with backslash escapes
    QuotedString,
    /// A line whose first non-blank character is `#`, to end of line
    Directive,
}

impl Pattern {
    /// Runs the pattern against the start of `rest`.
    ///
    /// `at_line_start` tells line-anchored patterns whether only blanks
    /// precede the current position on its line.
    pub fn scan(&self, rest: &str, at_line_start: bool) -> Scan {
        match *self {
            Pattern::Literal(text) => operator::scan_literal(rest, text).into(),
            Pattern::Identifier => identifier::scan_identifier(rest).into(),
            Pattern::HexNumber => number::scan_hex(rest).into(),
            Pattern::FloatNumber => number::scan_float(rest).into(),
            Pattern::IntNumber => number::scan_int(rest).into(),
            Pattern::QuotedString => string::scan_string(rest),
            Pattern::Directive => directive::scan_directive(rest, at_line_start).into(),
        }
    }
}

/// One entry of a token table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenRule {
    /// What text the rule accepts
    pub pattern: Pattern,
    /// Kind of the emitted token
    pub kind: TokenKind,
}

impl TokenRule {
    /// Creates a rule.
    pub const fn new(pattern: Pattern, kind: TokenKind) -> Self {
        Self { pattern, kind }
    }
}

/// Outcome of [`Dialect::longest_match`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleMatch {
    /// The winning rule's kind and lexeme length in bytes
    Matched {
        /// Kind from the winning rule, before keyword classification
        kind: TokenKind,
        /// Bytes consumed
        len: usize,
    },
    /// A string literal started here but never closed
    Unterminated {
        /// Bytes from the opening quote to where scanning stopped
        len: usize,
    },
    /// No rule matches here
    NoMatch,
}

/// Everything the scanner needs to know about one shader language.
pub struct Dialect {
    /// Canonical lower-case name
    pub name: &'static str,
    /// Other names accepted by [`Dialect::by_name`]
    pub aliases: &'static [&'static str],
    /// Token rules; on equal match length the earlier rule wins
    pub rules: &'static [TokenRule],
    /// Reserved-word lookup for identifier-shaped lexemes
    pub classify: fn(&str) -> Option<TokenKind>,
    /// Line comment opener
    pub line_comment: Option<&'static str>,
    /// Block comment delimiters (non-nesting)
    pub block_comment: Option<(&'static str, &'static str)>,
}

impl Dialect {
    /// The HLSL family (DirectX shader model 4+).
    pub const HLSL: Dialect = hlsl::HLSL;

    /// All dialects this crate knows about.
    pub fn all() -> [&'static Dialect; 1] {
        [&Dialect::HLSL]
    }

    /// Looks a dialect up by name or alias, ignoring ASCII case.
    ///
    /// ```
    /// use crossl_lex::Dialect;
    ///
    /// assert!(Dialect::by_name("HLSL").is_some());
    /// assert!(Dialect::by_name("cobol").is_none());
    /// ```
    pub fn by_name(name: &str) -> Option<&'static Dialect> {
        Self::all().into_iter().find(|dialect| {
            dialect.name.eq_ignore_ascii_case(name)
                || dialect.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
        })
    }

    /// Maps an identifier-shaped lexeme to its reserved kind, or
    /// [`TokenKind::Identifier`].
    #[inline]
    pub fn classify_identifier(&self, lexeme: &str) -> TokenKind {
        (self.classify)(lexeme).unwrap_or(TokenKind::Identifier)
    }

    /// Tries every rule at the start of `rest` and picks the longest match.
    ///
    /// Ties go to the rule declared first. An unterminated string wins over
    /// everything, since nothing else can start with its opening quote.
    pub fn longest_match(&self, rest: &str, at_line_start: bool) -> RuleMatch {
        let mut best = RuleMatch::NoMatch;
        let mut best_len = 0;

        for rule in self.rules {
            match rule.pattern.scan(rest, at_line_start) {
                Scan::NoMatch => {},
                Scan::Unterminated(len) => return RuleMatch::Unterminated { len },
                Scan::Matched(len) => {
                    if len > best_len {
                        best_len = len;
                        best = RuleMatch::Matched {
                            kind: rule.kind,
                            len,
                        };
                    }
                },
            }
        }

        best
    }
}

impl std::fmt::Debug for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dialect")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("rules", &self.rules.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIE_RULES: &[TokenRule] = &[
        TokenRule::new(Pattern::Literal("ab"), TokenKind::Identifier),
        TokenRule::new(Pattern::Identifier, TokenKind::TypeKeyword),
        TokenRule::new(Pattern::Literal("a"), TokenKind::Plus),
    ];

    fn no_keywords(_: &str) -> Option<TokenKind> {
        None
    }

    const TIE_DIALECT: Dialect = Dialect {
        name: "tie",
        aliases: &[],
        rules: TIE_RULES,
        classify: no_keywords,
        line_comment: None,
        block_comment: None,
    };

    #[test]
    fn test_tie_goes_to_earlier_rule() {
        assert_eq!(
            TIE_DIALECT.longest_match("ab", false),
            RuleMatch::Matched {
                kind: TokenKind::Identifier,
                len: 2
            }
        );
    }

    #[test]
    fn test_longer_match_beats_earlier_rule() {
        assert_eq!(
            TIE_DIALECT.longest_match("abc", false),
            RuleMatch::Matched {
                kind: TokenKind::TypeKeyword,
                len: 3
            }
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(TIE_DIALECT.longest_match("@", false), RuleMatch::NoMatch);
        assert_eq!(TIE_DIALECT.longest_match("", false), RuleMatch::NoMatch);
    }

    #[test]
    fn test_by_name_aliases() {
        assert_eq!(Dialect::by_name("hlsl").map(|d| d.name), Some("hlsl"));
        assert_eq!(Dialect::by_name("DirectX").map(|d| d.name), Some("hlsl"));
        assert!(Dialect::by_name("").is_none());
    }

    #[test]
    fn test_unterminated_string_reported() {
        assert_eq!(
            Dialect::HLSL.longest_match("\"abc", false),
            RuleMatch::Unterminated { len: 4 }
        );
    }

    #[test]
    fn test_scan_from_option() {
        assert_eq!(Scan::from(Some(2)), Scan::Matched(2));
        assert_eq!(Scan::from(Some(0)), Scan::NoMatch);
        assert_eq!(Scan::from(None), Scan::NoMatch);
    }
}
