//! Edge case tests for crossl-lex
