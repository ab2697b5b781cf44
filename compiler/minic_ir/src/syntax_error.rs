//! The front end's failure value.

use crate::{LineOffsetTable, Span};

/// A lexing or parsing failure, located in the source.
///
/// `line` is 1-based and `column` is the 0-based character position within
/// that line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Syntax error at line {line}, column {column}: {message}")]
pub struct SyntaxError {
    pub message: String,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

impl SyntaxError {
    /// Build an error at `span`, computing its line and column in `source`.
    #[cold]
    pub fn new(source: &str, span: Span, message: impl Into<String>) -> Self {
        let table = LineOffsetTable::build(source);
        Self::with_table(&table, source, span, message)
    }

    /// Like [`SyntaxError::new`] with a pre-built line table.
    #[cold]
    pub fn with_table(
        table: &LineOffsetTable,
        source: &str,
        span: Span,
        message: impl Into<String>,
    ) -> Self {
        let (line, col) = table.offset_to_line_col(source, span.start);
        SyntaxError {
            message: message.into(),
            span,
            line,
            column: col.saturating_sub(1),
        }
    }
}
