//! The HLSL token table and keyword set.

use super::{Dialect, Pattern, TokenRule};
use crate::token::TokenKind;

pub(super) const HLSL: Dialect = Dialect {
    name: "hlsl",
    aliases: &["directx", "dx"],
    rules: RULES,
    classify,
    line_comment: Some("//"),
    block_comment: Some(("/*", "*/")),
};

const fn op(text: &'static str, kind: TokenKind) -> TokenRule {
    TokenRule::new(Pattern::Literal(text), kind)
}

// Grouped longest-first for readability; the scanner does not depend on it.
const RULES: &[TokenRule] = &[
    TokenRule::new(Pattern::Directive, TokenKind::Preprocessor),
    TokenRule::new(Pattern::Identifier, TokenKind::Identifier),
    TokenRule::new(Pattern::HexNumber, TokenKind::HexLiteral),
    TokenRule::new(Pattern::FloatNumber, TokenKind::FloatLiteral),
    TokenRule::new(Pattern::IntNumber, TokenKind::IntLiteral),
    TokenRule::new(Pattern::QuotedString, TokenKind::StringLiteral),
    // three characters
    op("<<=", TokenKind::ShiftLeftAssign),
    op(">>=", TokenKind::ShiftRightAssign),
    // two characters
    op("+=", TokenKind::PlusAssign),
    op("-=", TokenKind::MinusAssign),
    op("*=", TokenKind::StarAssign),
    op("/=", TokenKind::SlashAssign),
    op("%=", TokenKind::ModAssign),
    op("^=", TokenKind::XorAssign),
    op("&=", TokenKind::AndAssign),
    op("|=", TokenKind::OrAssign),
    op("<<", TokenKind::ShiftLeft),
    op(">>", TokenKind::ShiftRight),
    op("==", TokenKind::Eq),
    op("!=", TokenKind::Neq),
    op("<=", TokenKind::Lte),
    op(">=", TokenKind::Gte),
    op("&&", TokenKind::AndAnd),
    op("||", TokenKind::OrOr),
    op("++", TokenKind::Increment),
    op("--", TokenKind::Decrement),
    // one character
    op("{", TokenKind::LBrace),
    op("}", TokenKind::RBrace),
    op("(", TokenKind::LParen),
    op(")", TokenKind::RParen),
    op("[", TokenKind::LBracket),
    op("]", TokenKind::RBracket),
    op(";", TokenKind::Semicolon),
    op(",", TokenKind::Comma),
    op(".", TokenKind::Dot),
    op(":", TokenKind::SemanticColon),
    op("?", TokenKind::Question),
    op("=", TokenKind::Assign),
    op("+", TokenKind::Plus),
    op("-", TokenKind::Minus),
    op("*", TokenKind::Star),
    op("/", TokenKind::Slash),
    op("%", TokenKind::Percent),
    op("<", TokenKind::Lt),
    op(">", TokenKind::Gt),
    op("!", TokenKind::Not),
    op("&", TokenKind::BitAnd),
    op("|", TokenKind::BitOr),
    op("^", TokenKind::BitXor),
    op("~", TokenKind::BitNot),
];

/// Scalar bases that also come in vector (`float4`) and matrix
/// (`float4x4`) forms.
const NUMERIC_BASES: &[&str] = &[
    "bool",
    "int",
    "uint",
    "dword",
    "half",
    "float",
    "double",
    "min16float",
    "min10float",
    "min16int",
    "min12int",
    "min16uint",
];

fn classify(lexeme: &str) -> Option<TokenKind> {
    let kind = match lexeme {
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "for" => TokenKind::For,
        "while" => TokenKind::While,
        "do" => TokenKind::Do,
        "return" => TokenKind::Return,
        "switch" => TokenKind::Switch,
        "case" => TokenKind::Case,
        "default" => TokenKind::Default,
        "break" => TokenKind::Break,
        "continue" => TokenKind::Continue,
        "discard" => TokenKind::Discard,
        "struct" => TokenKind::Struct,
        "cbuffer" => TokenKind::Cbuffer,
        "register" => TokenKind::Register,
        "in" => TokenKind::In,
        "out" => TokenKind::Out,
        "inout" => TokenKind::InOut,
        "uniform" => TokenKind::Uniform,
        "static" => TokenKind::Static,
        "const" => TokenKind::Const,
        "true" | "false" => TokenKind::BoolLiteral,
        "void" | "matrix" | "vector" | "string" | "sampler" | "SamplerState"
        | "SamplerComparisonState" | "Texture1D" | "Texture2D" | "Texture3D"
        | "TextureCube" | "Buffer" | "RWTexture2D" | "StructuredBuffer"
        | "RWStructuredBuffer" => TokenKind::TypeKeyword,
        _ => return is_numeric_type(lexeme).then_some(TokenKind::TypeKeyword),
    };
    Some(kind)
}

/// `float`, `float3`, `float4x4` and friends; `float5` and `floating` are not.
fn is_numeric_type(lexeme: &str) -> bool {
    NUMERIC_BASES.iter().any(|base| {
        lexeme
            .strip_prefix(base)
            .is_some_and(|shape| is_shape_suffix(shape.as_bytes()))
    })
}

fn is_shape_suffix(shape: &[u8]) -> bool {
    let dim = |b: u8| (b'1'..=b'4').contains(&b);
    match *shape {
        [] => true,
        [n] => dim(n),
        [n, b'x', m] => dim(n) && dim(m),
        _ => false,
    }
}
