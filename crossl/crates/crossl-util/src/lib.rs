//! crossl-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Foundation types shared by every crossl compiler phase:
//!
//! - [`span`] - source locations ([`Span`], [`FileId`]) and the
//!   [`SourceMap`] that owns loaded shader sources
//! - [`diagnostic`] - error/warning values, codes, and rendering against
//!   a [`SourceMap`]
//! - [`error`] - error types for the utilities themselves
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. PLAIN DATA
//!    Spans and diagnostics are plain values. Phases produce them, drivers
//!    decide how to render them.
//!
//! 2. NO GLOBAL STATE
//!    Nothing in this crate is process-wide mutable, so independent
//!    compilations may run on separate threads.
//
// ============================================================================
// SOURCE LOCATIONS
// ============================================================================
//
// A location is tracked twice: as a byte range (cheap to slice the source
// with) and as a 1-based line/column pair (what humans read in error
// messages). The lexer knows both at the moment it creates a token, so it
// records both instead of recomputing line/column later.
//
// ```
//   source:  "float4 c;\n  c = 1;"
//             ^         ^
//             0         10
//
//   Span { start: 12, end: 13, line: 2, column: 3 }   // the second `c`
// ```

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticCode, Level};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};
