//! crossl-lex - Lexical Analyzer for HLSL-family Shader Dialects
//!
//! This crate turns shader source text into a stream of typed tokens for the
//! crossl parser. It is the first phase of the cross-compiler: everything
//! after it (parsing, lowering, code generation) sees only tokens.
//!
//! # Example Usage
//!
//! ```
//! use crossl_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("struct VSInput { float4 position : SV_Position; };").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Struct);
//! assert_eq!(tokens[3].kind, TokenKind::TypeKeyword);
//! assert_eq!(tokens[3].lexeme, "float4");
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! ```
//!
//! Streaming, or another dialect:
//!
//! ```
//! use crossl_lex::{Dialect, Lexer};
//!
//! for token in Lexer::new("x += 1;", &Dialect::HLSL) {
//!     let token = token.unwrap();
//!     println!("{}:{} {}", token.line(), token.column(), token.kind);
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`dialect`] - Token tables and keyword sets
//! - [`lexer`] - The scanner
//! - [`cursor`] - Character cursor for source traversal
//! - [`token_cursor`] - Lookahead over a lexed token stream
//! - [`chars`] - Character classes
//! - [`error`] - Lexical errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! **Control Flow**: `if`, `else`, `for`, `while`, `do`, `return`, `switch`,
//! `case`, `default`, `break`, `continue`, `discard`
//!
//! **Declarations**: `struct`, `cbuffer`, `register`
//!
//! **Qualifiers**: `in`, `out`, `inout`, `uniform`, `static`, `const`
//!
//! **Types** (all [`TokenKind::TypeKeyword`]): `void`, `float`..`float4x4`,
//! `int`, `uint`, `bool`, `half`, `double`, `min16float`.., `matrix`,
//! `vector`, `Texture2D`, `SamplerState`, ...
//!
//! ## Literals
//!
//! - **Integer**: `42`, `10u`
//! - **Hex**: `0x02`, `0xFFu`
//! - **Float**: `0.5`, `1.0f`, `.25`, `1e-3`
//! - **Boolean**: `true`, `false`
//! - **String**: `"diffuse"`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`, `++`, `--`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`, `!`
//! - **Bitwise**: `&`, `|`, `^`, `~`, `<<`, `>>`
//! - **Assignment**: `=`, `+=`, `-=`, `*=`, `/=`, `%=`, `^=`, `&=`, `|=`, `<<=`, `>>=`
//!
//! ## Punctuation
//!
//! `{ } ( ) [ ] ; , . ?` and the semantic colon `:`.
//!
//! ## Skipped
//!
//! Whitespace, `// line` and `/* block */` comments, and a leading byte
//! order mark never become tokens. `#` lines become a single
//! [`TokenKind::Preprocessor`] token each.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod dialect;
pub mod error;
pub mod lexer;
pub mod token;
pub mod token_cursor;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use dialect::Dialect;
pub use error::LexError;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
pub use token_cursor::TokenCursor;

/// Tokenizes HLSL source.
///
/// Shorthand for `Lexer::new(source, &Dialect::HLSL).tokenize()`.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(source, &Dialect::HLSL).tokenize()
}
