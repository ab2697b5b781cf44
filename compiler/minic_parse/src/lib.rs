//! Recursive-descent parser for MiniC.
//!
//! Two entry grammars share one parser:
//!
//! - [`ParseMode::Repl`]: any mix of function definitions, declarations and
//!   statements; the final expression statement may omit its `;`
//! - [`ParseMode::TranslationUnit`]: function definitions and declarations
//!   only, as in a C source file
//!
//! Parsing stops at the first error, reported as a [`SyntaxError`] with the
//! line and column of the offending token.

mod cursor;
mod grammar;

use minic_ir::{ExprArena, Item, LineOffsetTable, Span, StringInterner, SyntaxError};
use minic_lexer::{TokenKind, TokenList};

use cursor::Cursor;

pub use minic_lexer::lex;

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Which top-level grammar to accept.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseMode {
    Repl,
    TranslationUnit,
}

/// A parsed unit: the arena holding every node plus the top-level items in
/// source order.
#[derive(Debug, Default)]
pub struct ParseOutput {
    pub arena: ExprArena,
    pub items: Vec<Item>,
}

/// Lex and parse `source` in the given mode.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len(), mode = ?mode))]
pub fn parse_source(
    source: &str,
    interner: &StringInterner,
    mode: ParseMode,
) -> ParseResult<ParseOutput> {
    let tokens = lex(source, interner)?;
    let parser = Parser::new(source, &tokens, interner);
    match mode {
        ParseMode::Repl => parser.parse_repl_input(),
        ParseMode::TranslationUnit => parser.parse_translation_unit(),
    }
}

/// Parser state for one token list.
pub struct Parser<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
    interner: &'a StringInterner,
    lines: LineOffsetTable,
    arena: ExprArena,
    /// Nesting depth of `{ }` blocks; zero at top level.
    block_depth: usize,
    mode: ParseMode,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            source,
            cursor: Cursor::new(tokens),
            interner,
            lines: LineOffsetTable::build(source),
            arena: ExprArena::with_capacity(source.len()),
            block_depth: 0,
            mode: ParseMode::Repl,
        }
    }

    /// `replInput := item* EOF`
    pub fn parse_repl_input(mut self) -> ParseResult<ParseOutput> {
        self.mode = ParseMode::Repl;
        let mut items = Vec::new();
        while !self.cursor.is_at_end() {
            items.push(self.parse_item()?);
        }
        Ok(self.finish(items))
    }

    /// `translationUnit := (functionDefinition | declaration)* EOF`
    pub fn parse_translation_unit(mut self) -> ParseResult<ParseOutput> {
        self.mode = ParseMode::TranslationUnit;
        let mut items = Vec::new();
        while !self.cursor.is_at_end() {
            if !self.cursor.current_kind().is_type_keyword() {
                return Err(self.unexpected("a declaration or function definition"));
            }
            items.push(self.parse_item()?);
        }
        Ok(self.finish(items))
    }

    fn finish(self, items: Vec<Item>) -> ParseOutput {
        tracing::debug!(
            items = items.len(),
            exprs = self.arena.expr_count(),
            stmts = self.arena.stmt_count(),
            "parsed unit"
        );
        ParseOutput {
            arena: self.arena,
            items,
        }
    }

    // ===== Errors =====

    #[cold]
    fn error_at(&self, span: Span, message: impl Into<String>) -> SyntaxError {
        SyntaxError::with_table(&self.lines, self.source, span, message)
    }

    /// `expected X, found Y` at the current token.
    #[cold]
    fn unexpected(&self, expected: &str) -> SyntaxError {
        let found = self.cursor.current_kind();
        self.error_at(
            self.cursor.current_span(),
            format!("expected {expected}, found {found}"),
        )
    }

    /// Consume a token of `kind` or fail with `expected <kind>`.
    fn expect(&mut self, kind: TokenKind) -> ParseResult<Span> {
        if self.cursor.check(kind) {
            Ok(self.cursor.advance().span)
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    fn expect_ident(&mut self) -> ParseResult<(minic_ir::Name, Span)> {
        match self.cursor.current_ident() {
            Some(name) => Ok((name, self.cursor.advance().span)),
            None => Err(self.unexpected("identifier")),
        }
    }
}

#[cfg(test)]
mod tests;
