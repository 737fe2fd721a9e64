//! Common types and utilities for crosslt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::path::Path;

use crossl_lex::{Dialect, LexError};
use crossl_util::SourceMap;

use crate::error::{CrossltError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Token dump formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `line:column KIND lexeme` line per token
    Text,
    /// One JSON array of token objects per file
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Canonical name of this format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

// ============================================================================
// Lexing Helpers
// ============================================================================

/// Look up a dialect by name or alias.
pub fn resolve_dialect(name: &str) -> Result<&'static Dialect> {
    Dialect::by_name(name).ok_or_else(|| {
        let known: Vec<&str> = Dialect::all().iter().map(|d| d.name).collect();
        CrossltError::Validation(format!(
            "{} {} (known: {})",
            error_messages::UNKNOWN_DIALECT,
            name,
            known.join(", ")
        ))
    })
}

/// Read a source file after checking that it exists and is a file.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CrossltError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(CrossltError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    Ok(std::fs::read_to_string(path)?)
}

/// Render a lex error against its source, with location and snippet.
pub fn render_lex_error(path: &Path, source: &str, err: LexError) -> String {
    let mut sources = SourceMap::new();
    let file_id = sources.add_file(path.display().to_string(), source);
    err.with_file_id(file_id).to_diagnostic().render(&sources)
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message prefixes.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when an unknown output format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when an unknown dialect is specified.
    pub const UNKNOWN_DIALECT: &str = "Unknown dialect:";

    /// Error when a file fails to lex; its diagnostic is already printed.
    pub const LEX_FAILED: &str = "Failed to lex:";

    /// Suffix after the number of failing files.
    pub const FILES_FAILED: &str = "file(s) failed to lex";
}
