//! Token definitions for shader source.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text it was
//! produced from and its location. Tokens borrow the source buffer, so a
//! token stream never outlives the text it was lexed from.

use std::fmt;

use crossl_util::Span;

/// The category of a lexical unit.
///
/// Every reserved word has its own kind so the parser can dispatch on the
/// kind alone. Built-in type names (`float4`, `uint`, `Texture2D`, ...) share
/// [`TokenKind::TypeKeyword`]; the lexeme says which type it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ===== Keywords =====
    /// `if`
    If,
    /// `else`
    Else,
    /// `for`
    For,
    /// `while`
    While,
    /// `do`
    Do,
    /// `return`
    Return,
    /// `switch`
    Switch,
    /// `case`
    Case,
    /// `default`
    Default,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `discard`
    Discard,
    /// `struct`
    Struct,
    /// `cbuffer`
    Cbuffer,
    /// `register`
    Register,
    /// `in`
    In,
    /// `out`
    Out,
    /// `inout`
    InOut,
    /// `uniform`
    Uniform,
    /// `static`
    Static,
    /// `const`
    Const,
    /// A built-in type name such as `float4x4` or `SamplerState`
    TypeKeyword,

    // ===== Names and literals =====
    /// A user-defined name
    Identifier,
    /// Decimal integer, e.g. `10` or `3u`
    IntLiteral,
    /// Floating point number, e.g. `0.5`, `.25f`, `1e-3`
    FloatLiteral,
    /// Hexadecimal integer, e.g. `0x02`
    HexLiteral,
    /// `true` or `false`
    BoolLiteral,
    /// Double-quoted string, quotes and escapes kept verbatim
    StringLiteral,
    /// A whole preprocessor line such as `#define N 4`
    Preprocessor,

    // ===== Punctuation =====
    /// `:` introducing a semantic (`SV_Position`) or register binding
    SemanticColon,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `?`
    Question,

    // ===== Operators =====
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    StarAssign,
    /// `/=`
    SlashAssign,
    /// `%=`
    ModAssign,
    /// `^=`
    XorAssign,
    /// `&=`
    AndAssign,
    /// `|=`
    OrAssign,
    /// `<<=`
    ShiftLeftAssign,
    /// `>>=`
    ShiftRightAssign,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `==`
    Eq,
    /// `!=`
    Neq,
    /// `<=`
    Lte,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `~`
    BitNot,
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `!`
    Not,

    /// End of input
    Eof,
}

impl TokenKind {
    /// The upper-snake name of this kind, e.g. `"SHIFT_LEFT"`.
    ///
    /// These names are what the `crosslt` tool prints and what shows up in
    /// test failure messages, so they are part of the public surface.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::If => "KEYWORD_IF",
            TokenKind::Else => "KEYWORD_ELSE",
            TokenKind::For => "KEYWORD_FOR",
            TokenKind::While => "KEYWORD_WHILE",
            TokenKind::Do => "KEYWORD_DO",
            TokenKind::Return => "KEYWORD_RETURN",
            TokenKind::Switch => "KEYWORD_SWITCH",
            TokenKind::Case => "KEYWORD_CASE",
            TokenKind::Default => "KEYWORD_DEFAULT",
            TokenKind::Break => "KEYWORD_BREAK",
            TokenKind::Continue => "KEYWORD_CONTINUE",
            TokenKind::Discard => "KEYWORD_DISCARD",
            TokenKind::Struct => "KEYWORD_STRUCT",
            TokenKind::Cbuffer => "KEYWORD_CBUFFER",
            TokenKind::Register => "KEYWORD_REGISTER",
            TokenKind::In => "KEYWORD_IN",
            TokenKind::Out => "KEYWORD_OUT",
            TokenKind::InOut => "KEYWORD_INOUT",
            TokenKind::Uniform => "KEYWORD_UNIFORM",
            TokenKind::Static => "KEYWORD_STATIC",
            TokenKind::Const => "KEYWORD_CONST",
            TokenKind::TypeKeyword => "TYPE_KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntLiteral => "INT_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::HexLiteral => "HEX_LITERAL",
            TokenKind::BoolLiteral => "BOOL_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Preprocessor => "PREPROCESSOR",
            TokenKind::SemanticColon => "SEMANTIC_COLON",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Question => "QUESTION",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::PlusAssign => "PLUS_ASSIGN",
            TokenKind::MinusAssign => "MINUS_ASSIGN",
            TokenKind::StarAssign => "STAR_ASSIGN",
            TokenKind::SlashAssign => "SLASH_ASSIGN",
            TokenKind::ModAssign => "MOD_ASSIGN",
            TokenKind::XorAssign => "XOR_ASSIGN",
            TokenKind::AndAssign => "AND_ASSIGN",
            TokenKind::OrAssign => "OR_ASSIGN",
            TokenKind::ShiftLeftAssign => "SHIFT_LEFT_ASSIGN",
            TokenKind::ShiftRightAssign => "SHIFT_RIGHT_ASSIGN",
            TokenKind::ShiftLeft => "SHIFT_LEFT",
            TokenKind::ShiftRight => "SHIFT_RIGHT",
            TokenKind::Eq => "EQ",
            TokenKind::Neq => "NEQ",
            TokenKind::Lte => "LTE",
            TokenKind::Gte => "GTE",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::AndAnd => "AND_AND",
            TokenKind::OrOr => "OR_OR",
            TokenKind::BitAnd => "BIT_AND",
            TokenKind::BitOr => "BIT_OR",
            TokenKind::BitXor => "BIT_XOR",
            TokenKind::BitNot => "BIT_NOT",
            TokenKind::Increment => "INCREMENT",
            TokenKind::Decrement => "DECREMENT",
            TokenKind::Not => "NOT",
            TokenKind::Eof => "EOF",
        }
    }

    /// Returns true for reserved words, including [`TokenKind::TypeKeyword`].
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Else
                | TokenKind::For
                | TokenKind::While
                | TokenKind::Do
                | TokenKind::Return
                | TokenKind::Switch
                | TokenKind::Case
                | TokenKind::Default
                | TokenKind::Break
                | TokenKind::Continue
                | TokenKind::Discard
                | TokenKind::Struct
                | TokenKind::Cbuffer
                | TokenKind::Register
                | TokenKind::In
                | TokenKind::Out
                | TokenKind::InOut
                | TokenKind::Uniform
                | TokenKind::Static
                | TokenKind::Const
                | TokenKind::TypeKeyword
        )
    }

    /// Returns true for literal values.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::HexLiteral
                | TokenKind::BoolLiteral
                | TokenKind::StringLiteral
        )
    }

    /// Returns true for assignment operators, plain or compound.
    pub fn is_assignment(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::PlusAssign
                | TokenKind::MinusAssign
                | TokenKind::StarAssign
                | TokenKind::SlashAssign
                | TokenKind::ModAssign
                | TokenKind::XorAssign
                | TokenKind::AndAssign
                | TokenKind::OrAssign
                | TokenKind::ShiftLeftAssign
                | TokenKind::ShiftRightAssign
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One lexical unit: its kind, the verbatim source text, and where it sits.
///
/// `&source[token.span.start..token.span.end] == token.lexeme` holds for every
/// token a [`Lexer`](crate::Lexer) produces. The final [`TokenKind::Eof`]
/// token has an empty lexeme and an empty span at the end of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    /// Token category
    pub kind: TokenKind,
    /// Exact source text
    pub lexeme: &'src str,
    /// Location of the lexeme
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: &'src str, span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    /// Returns true if this is the end-of-input marker.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// 1-based line of the first character.
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// 1-based column of the first character.
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lexeme.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}({:?})", self.kind, self.lexeme)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_are_upper_snake() {
        assert_eq!(TokenKind::ShiftLeft.name(), "SHIFT_LEFT");
        assert_eq!(TokenKind::Struct.name(), "KEYWORD_STRUCT");
        assert_eq!(TokenKind::SemanticColon.name(), "SEMANTIC_COLON");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(TokenKind::TypeKeyword.is_keyword());
        assert!(TokenKind::Discard.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(TokenKind::HexLiteral.is_literal());
        assert!(!TokenKind::Preprocessor.is_literal());
        assert!(TokenKind::ShiftRightAssign.is_assignment());
        assert!(!TokenKind::Eq.is_assignment());
    }

    #[test]
    fn test_token_display() {
        let tok = Token::new(TokenKind::HexLiteral, "0x02", Span::new(16, 20, 1, 17));
        assert_eq!(tok.to_string(), "HEX_LITERAL(\"0x02\")");
        let eof = Token::new(TokenKind::Eof, "", Span::point(20, 1, 21));
        assert_eq!(eof.to_string(), "EOF");
        assert!(eof.is_eof());
        assert_eq!((tok.line(), tok.column()), (1, 17));
    }
}
