//! Statements and blocks.

use minic_ir::{ForInit, Stmt, StmtId, StmtKind, StmtRange};
use minic_lexer::TokenKind;
use minic_stack::ensure_sufficient_stack;

use crate::{ParseMode, ParseResult, Parser};

impl Parser<'_> {
    /// `statement := compound | exprStmt | if | while | doWhile | for | return | ';'`
    pub(crate) fn parse_statement(&mut self) -> ParseResult<StmtId> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> ParseResult<StmtId> {
        let start = self.cursor.current_span();
        let kind = match self.cursor.current_kind() {
            TokenKind::LBrace => StmtKind::Block(self.parse_block_body()?),
            TokenKind::If => self.parse_if()?,
            TokenKind::While => self.parse_while()?,
            TokenKind::Do => self.parse_do_while()?,
            TokenKind::For => self.parse_for()?,
            TokenKind::Return => {
                self.cursor.advance();
                let value = if self.cursor.check(TokenKind::Semicolon) {
                    None
                } else {
                    Some(self.parse_expression()?)
                };
                self.expect(TokenKind::Semicolon)?;
                StmtKind::Return(value)
            }
            TokenKind::Semicolon => {
                self.cursor.advance();
                StmtKind::Empty
            }
            _ => {
                let expr = self.parse_expression()?;
                if !self.at_trailing_expression() {
                    self.expect(TokenKind::Semicolon)?;
                }
                StmtKind::Expr(expr)
            }
        };
        let span = self.span_from(start);
        Ok(self.arena.alloc_stmt(Stmt::new(kind, span)))
    }

    /// A REPL unit may end with a bare expression: `3 + 4`.
    fn at_trailing_expression(&self) -> bool {
        self.mode == ParseMode::Repl && self.block_depth == 0 && self.cursor.is_at_end()
    }

    /// `'{' blockItem* '}'`, returning the contained statements.
    pub(crate) fn parse_block_body(&mut self) -> ParseResult<StmtRange> {
        self.expect(TokenKind::LBrace)?;
        self.block_depth += 1;
        let mut stmts = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) {
            if self.cursor.is_at_end() {
                return Err(self.unexpected("'}'"));
            }
            stmts.push(self.parse_block_item()?);
        }
        self.block_depth -= 1;
        self.cursor.advance();
        Ok(self.arena.alloc_stmt_list(stmts))
    }

    /// `blockItem := declaration | statement`
    fn parse_block_item(&mut self) -> ParseResult<StmtId> {
        if self.cursor.current_kind().is_type_keyword() {
            let start = self.cursor.current_span();
            let decl = self.parse_declaration()?;
            let span = self.span_from(start);
            return Ok(self.arena.alloc_stmt(Stmt::new(StmtKind::Decl(decl), span)));
        }
        self.parse_statement()
    }

    /// `'if' '(' expression ')' statement ('else' statement)?`
    fn parse_if(&mut self) -> ParseResult<StmtKind> {
        self.cursor.advance();
        let cond = self.parse_condition()?;
        let then_branch = self.parse_statement()?;
        let else_branch = if self.cursor.eat(TokenKind::Else) {
            Some(self.parse_statement()?)
        } else {
            None
        };
        Ok(StmtKind::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    /// `'while' '(' expression ')' statement`
    fn parse_while(&mut self) -> ParseResult<StmtKind> {
        self.cursor.advance();
        let cond = self.parse_condition()?;
        let body = self.parse_statement()?;
        Ok(StmtKind::While { cond, body })
    }

    /// `'do' statement 'while' '(' expression ')' ';'`
    fn parse_do_while(&mut self) -> ParseResult<StmtKind> {
        self.cursor.advance();
        let body = self.parse_statement()?;
        self.expect(TokenKind::While)?;
        let cond = self.parse_condition()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(StmtKind::DoWhile { body, cond })
    }

    /// `'for' '(' (declaration | expression? ';') expression? ';' expression? ')' statement`
    fn parse_for(&mut self) -> ParseResult<StmtKind> {
        self.cursor.advance();
        self.expect(TokenKind::LParen)?;

        let init = if self.cursor.current_kind().is_type_keyword() {
            ForInit::Decl(self.parse_declaration()?)
        } else if self.cursor.eat(TokenKind::Semicolon) {
            ForInit::None
        } else {
            let expr = self.parse_expression()?;
            self.expect(TokenKind::Semicolon)?;
            ForInit::Expr(expr)
        };

        let cond = if self.cursor.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::Semicolon)?;

        let update = if self.cursor.check(TokenKind::RParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::RParen)?;

        let body = self.parse_statement()?;
        Ok(StmtKind::For {
            init,
            cond,
            update,
            body,
        })
    }

    /// `'(' expression ')'`
    fn parse_condition(&mut self) -> ParseResult<minic_ir::ExprId> {
        self.expect(TokenKind::LParen)?;
        let cond = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        Ok(cond)
    }
}
