//! Top-level items, declarations and type specifiers.

use minic_ir::{FunctionDef, Item, Param, Span, Stmt, StmtKind, TypeSpec, VarDecl};
use minic_lexer::TokenKind;
use tracing::debug;

use crate::{ParseMode, ParseResult, Parser};

impl Parser<'_> {
    /// `item := functionDefinition | declaration | statement`
    pub(crate) fn parse_item(&mut self) -> ParseResult<Item> {
        if self.at_function_definition() {
            return self.parse_function_definition().map(Item::Function);
        }
        if self.cursor.current_kind().is_type_keyword() {
            let start = self.cursor.current_span();
            let decl = self.parse_declaration()?;
            let span = self.span_from(start);
            let id = self.arena.alloc_stmt(Stmt::new(StmtKind::Decl(decl), span));
            return Ok(Item::Stmt(id));
        }
        debug_assert_eq!(self.mode, ParseMode::Repl);
        self.parse_statement().map(Item::Stmt)
    }

    /// `typeSpec IDENT '('` starts a function definition.
    fn at_function_definition(&self) -> bool {
        self.cursor.current_kind().is_type_keyword()
            && matches!(self.cursor.peek_kind(1), TokenKind::Ident(_))
            && matches!(self.cursor.peek_kind(2), TokenKind::LParen)
    }

    /// `functionDefinition := typeSpec IDENT '(' paramList? ')' compoundStatement`
    fn parse_function_definition(&mut self) -> ParseResult<FunctionDef> {
        let start = self.cursor.current_span();
        let return_type = self.parse_type_spec()?;
        let (name, _) = self.expect_ident()?;
        self.expect(TokenKind::LParen)?;
        let params = self.parse_param_list()?;
        self.expect(TokenKind::RParen)?;

        if !self.cursor.check(TokenKind::LBrace) {
            return Err(self.unexpected("'{' to begin the function body"));
        }
        let body = self.parse_block_body()?;
        let span = self.span_from(start);
        debug!(
            name = self.interner.lookup(name),
            params = params.len(),
            "parsed function definition"
        );
        Ok(FunctionDef {
            name,
            return_type,
            params,
            body,
            span,
        })
    }

    /// `paramList := 'void' | param (',' param)*`
    fn parse_param_list(&mut self) -> ParseResult<minic_ir::ParamRange> {
        if self.cursor.check(TokenKind::RParen) {
            return Ok(minic_ir::ParamRange::EMPTY);
        }
        if self.cursor.check(TokenKind::KwVoid) && self.cursor.peek_kind(1) == TokenKind::RParen
        {
            self.cursor.advance();
            return Ok(minic_ir::ParamRange::EMPTY);
        }
        let mut params = Vec::new();
        loop {
            let start = self.cursor.current_span();
            let ty = self.parse_type_spec()?;
            let (name, name_span) = self.expect_ident()?;
            params.push(Param {
                ty,
                name,
                span: start.merge(name_span),
            });
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(self.arena.alloc_params(params))
    }

    /// `declaration := typeSpec IDENT ('=' expression)? ';'`
    pub(crate) fn parse_declaration(&mut self) -> ParseResult<VarDecl> {
        let ty = self.parse_type_spec()?;
        let (name, _) = self.expect_ident()?;
        if self.cursor.check(TokenKind::LParen) {
            return Err(self.error_at(
                self.cursor.current_span(),
                "function definitions are only allowed at file scope",
            ));
        }
        let init = if self.cursor.eat(TokenKind::Eq) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon)?;
        Ok(VarDecl { ty, name, init })
    }

    pub(crate) fn parse_type_spec(&mut self) -> ParseResult<TypeSpec> {
        let ty = match self.cursor.current_kind() {
            TokenKind::KwInt => TypeSpec::Int,
            TokenKind::KwFloat => TypeSpec::Float,
            TokenKind::KwDouble => TypeSpec::Double,
            TokenKind::KwChar => TypeSpec::Char,
            TokenKind::KwVoid => TypeSpec::Void,
            TokenKind::KwLong => TypeSpec::Other(self.interner.intern("long")),
            TokenKind::KwShort => TypeSpec::Other(self.interner.intern("short")),
            TokenKind::KwSigned => TypeSpec::Other(self.interner.intern("signed")),
            TokenKind::KwUnsigned => TypeSpec::Other(self.interner.intern("unsigned")),
            _ => return Err(self.unexpected("a type specifier")),
        };
        self.cursor.advance();
        Ok(ty)
    }

    /// Span from `start` through the last consumed token.
    pub(crate) fn span_from(&self, start: Span) -> Span {
        start.merge(self.cursor.previous_span())
    }
}
