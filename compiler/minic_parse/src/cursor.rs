//! Token cursor for navigating the token stream.

use std::mem::discriminant;

use minic_ir::{Name, Span};
use minic_lexer::{Token, TokenKind, TokenList};
use tracing::trace;

/// Position within a [`TokenList`].
///
/// The position is always valid: `TokenList::get` clamps to the trailing
/// `Eof`, so running past the end keeps returning `Eof`.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Kind of the token `n` positions ahead of the current one.
    #[inline]
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        self.tokens.get(self.pos + n).kind
    }

    /// Whether the current token has the same variant as `kind`.
    ///
    /// Payloads are ignored, so `check(TokenKind::Int(0))` matches any
    /// integer literal.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        discriminant(&self.current_kind()) == discriminant(&kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Consume the current token and return it.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if !self.is_at_end() {
            trace!(pos = self.pos, kind = ?token.kind, "advance");
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Identifier name at the current position, if any.
    pub fn current_ident(&self) -> Option<Name> {
        match self.current_kind() {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Span of the most recently consumed token.
    pub fn previous_span(&self) -> Span {
        if self.pos == 0 {
            Span::DUMMY
        } else {
            self.tokens.get(self.pos - 1).span
        }
    }
}
