//! Source map for managing shader sources and computing source locations.
//!
//! This module provides the [`SourceMap`] type for managing multiple source files
//! and computing line/column information from byte offsets.

use std::sync::Arc;

use super::{FileId, Span};
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use crossl_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "vs.hlsl", "float4 main() : SV_Position;");
/// assert_eq!(file.name(), "vs.hlsl");
/// assert_eq!(file.line_count(), 1);
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// Unique file identifier
    id: FileId,
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `id` - Unique file identifier
    /// * `name` - File name or path
    /// * `content` - File content
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    ///
    /// Returns `None` if the line number is out of bounds.
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to (line, column) coordinates
    ///
    /// Line and column are 1-indexed. Column is counted in characters from
    /// the start of the line, matching what the lexer records.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossl_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "ps.hlsl", "uint v;\nv <<= 1;");
    /// assert_eq!(file.offset_to_line_col(0), (1, 1));
    /// assert_eq!(file.offset_to_line_col(10), (2, 3));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let end = offset.min(self.content.len());
        let col = self
            .content
            .get(line_start..end)
            .map_or(end.saturating_sub(line_start), |prefix| prefix.chars().count());
        (line + 1, col + 1)
    }

    /// Get a specific source line (1-indexed), without its line terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());

        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// # Returns
    ///
    /// * `Ok(&str)` - The extracted substring
    /// * `Err(SourceMapError)` - Range is out of bounds or invalid
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        self.content
            .get(start..end)
            .ok_or(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            })
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// A source map managing multiple source files
///
/// # Examples
///
/// ```
/// use crossl_util::span::SourceMap;
///
/// let mut map = SourceMap::new();
/// let file_id = map.add_file("ps.hlsl", "float4 main() : SV_Target { return 0; }");
/// let file = map.get(file_id).unwrap();
/// assert_eq!(file.name(), "ps.hlsl");
/// ```
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    /// Create a new empty source map
    #[inline]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add a new source file
    ///
    /// Returns the [`FileId`] for the added file.
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let id = self.files.len();
        let file = SourceFile::new(id, name, content);
        let file_id = file.id();
        self.files.push(Arc::new(file));
        file_id
    }

    /// Get a source file by its ID
    #[inline]
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get(id.0).cloned()
    }

    /// Get a source file by its ID with error handling
    pub fn get_file(&self, id: FileId) -> SourceMapResult<Arc<SourceFile>> {
        self.get(id)
            .ok_or_else(|| SourceMapError::FileNotFound(format!("FileId({})", id.0)))
    }

    /// Get the number of files in the source map
    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Convert a span to a human-readable location with source context
    ///
    /// ```text
    /// --> ps.hlsl:2:5
    ///   2 | x = @;
    ///     |     ^
    /// ```
    pub fn format_span(&self, span: Span) -> SourceMapResult<String> {
        let file = self.get_file(span.file_id)?;
        let line_no = span.line as usize;
        let line = file
            .line_at(line_no)
            .ok_or(SourceMapError::InvalidLineNumber {
                line: line_no,
                max_lines: file.line_count(),
            })?;
        let width = file.line_count().to_string().len().max(3);

        let highlighted = file.extract_range(span.start, span.end)?;
        let underline_len = highlighted
            .lines()
            .next()
            .map_or(0, |first| first.chars().count())
            .max(1);
        let underline_start = (span.column as usize).saturating_sub(1);

        Ok(format!(
            "--> {}:{}:{}\n{:>width$} | {}\n{:>width$} | {}{}",
            file.name(),
            span.line,
            span.column,
            span.line,
            line,
            "",
            " ".repeat(underline_start),
            "^".repeat(underline_len),
            width = width
        ))
    }
}
