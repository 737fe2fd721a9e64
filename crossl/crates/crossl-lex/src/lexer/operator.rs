//! Operator and punctuation matching.
//!
//! Every operator is a fixed string in the dialect table. Prefix
//! ambiguities (`<` / `<=` / `<<` / `<<=`, `|` / `||` / `|=`) are settled by
//! the longest-match rule in [`Dialect::longest_match`](crate::Dialect::longest_match),
//! not by the order of the entries.

/// Length of `text` if `rest` starts with it.
#[inline]
pub(crate) fn scan_literal(rest: &str, text: &str) -> Option<usize> {
    rest.starts_with(text).then_some(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tokenize, TokenKind};

    fn kind_of(source: &str) -> TokenKind {
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.len(), 2, "{:?} should be a single token", source);
        tokens[0].kind
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_scan_literal() {
        assert_eq!(scan_literal("<<= 1", "<<="), Some(3));
        assert_eq!(scan_literal("<= 1", "<<="), None);
        assert_eq!(scan_literal("", "+"), None);
    }

    #[test]
    fn test_compound_assignment() {
        assert_eq!(kind_of("+="), TokenKind::PlusAssign);
        assert_eq!(kind_of("-="), TokenKind::MinusAssign);
        assert_eq!(kind_of("*="), TokenKind::StarAssign);
        assert_eq!(kind_of("/="), TokenKind::SlashAssign);
        assert_eq!(kind_of("%="), TokenKind::ModAssign);
        assert_eq!(kind_of("^="), TokenKind::XorAssign);
        assert_eq!(kind_of("&="), TokenKind::AndAssign);
        assert_eq!(kind_of("|="), TokenKind::OrAssign);
        assert_eq!(kind_of("<<="), TokenKind::ShiftLeftAssign);
        assert_eq!(kind_of(">>="), TokenKind::ShiftRightAssign);
    }

    #[test]
    fn test_shift_is_not_two_comparisons() {
        assert_eq!(kind_of("<<"), TokenKind::ShiftLeft);
        assert_eq!(kind_of(">>"), TokenKind::ShiftRight);
    }

    #[test]
    fn test_comparison() {
        assert_eq!(kind_of("=="), TokenKind::Eq);
        assert_eq!(kind_of("!="), TokenKind::Neq);
        assert_eq!(kind_of("<="), TokenKind::Lte);
        assert_eq!(kind_of(">="), TokenKind::Gte);
        assert_eq!(kind_of("<"), TokenKind::Lt);
        assert_eq!(kind_of(">"), TokenKind::Gt);
    }

    #[test]
    fn test_logical_and_bitwise() {
        assert_eq!(kind_of("&&"), TokenKind::AndAnd);
        assert_eq!(kind_of("||"), TokenKind::OrOr);
        assert_eq!(kind_of("&"), TokenKind::BitAnd);
        assert_eq!(kind_of("|"), TokenKind::BitOr);
        assert_eq!(kind_of("^"), TokenKind::BitXor);
        assert_eq!(kind_of("~"), TokenKind::BitNot);
        assert_eq!(kind_of("!"), TokenKind::Not);
    }

    #[test]
    fn test_increment_decrement() {
        assert_eq!(kind_of("++"), TokenKind::Increment);
        assert_eq!(kind_of("--"), TokenKind::Decrement);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("{}()[];,.:?"),
            vec![
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Semicolon,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::SemanticColon,
                TokenKind::Question,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_greedy_runs() {
        // `a+++b` is `a ++ + b`, as in C
        assert_eq!(
            kinds("a+++b"),
            vec![
                TokenKind::Identifier,
                TokenKind::Increment,
                TokenKind::Plus,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            kinds("x<<<=y"),
            vec![
                TokenKind::Identifier,
                TokenKind::ShiftLeft,
                TokenKind::Lte,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            kinds("a|||b"),
            vec![
                TokenKind::Identifier,
                TokenKind::OrOr,
                TokenKind::BitOr,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_bitwise_or_is_not_logical_or() {
        assert_eq!(
            kinds("val = val | 0x02;"),
            vec![
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Identifier,
                TokenKind::BitOr,
                TokenKind::HexLiteral,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_slash_is_not_a_comment() {
        assert_eq!(
            kinds("a / b"),
            vec![
                TokenKind::Identifier,
                TokenKind::Slash,
                TokenKind::Identifier,
                TokenKind::Eof
            ]
        );
    }
}
