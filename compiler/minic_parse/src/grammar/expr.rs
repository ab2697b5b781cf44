//! Expressions, by precedence level from loosest to tightest.
//!
//! Binary levels are left-associative; assignment is right-associative and
//! only accepts a plain identifier as its target.

use minic_ir::{BinaryOp, Expr, ExprId, ExprKind, UnaryOp};
use minic_lexer::TokenKind;
use minic_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// `expression := assignment`
    pub(crate) fn parse_expression(&mut self) -> ParseResult<ExprId> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// `assignment := IDENT '=' assignment | logicalOr`
    fn parse_assignment(&mut self) -> ParseResult<ExprId> {
        if let (Some(target), TokenKind::Eq) =
            (self.cursor.current_ident(), self.cursor.peek_kind(1))
        {
            let start = self.cursor.advance().span;
            self.cursor.advance();
            let value = self.parse_expression()?;
            let span = self.span_from(start);
            return Ok(self.alloc(ExprKind::Assign { target, value }, span));
        }
        let expr = self.parse_logical_or()?;
        if self.cursor.check(TokenKind::Eq) {
            return Err(self.error_at(
                self.cursor.current_span(),
                "left-hand side of assignment must be a variable",
            ));
        }
        Ok(expr)
    }

    fn parse_logical_or(&mut self) -> ParseResult<ExprId> {
        self.parse_binary_level(Self::parse_logical_and, |kind| match kind {
            TokenKind::OrOr => Some(BinaryOp::Or),
            _ => None,
        })
    }

    fn parse_logical_and(&mut self) -> ParseResult<ExprId> {
        self.parse_binary_level(Self::parse_equality, |kind| match kind {
            TokenKind::AndAnd => Some(BinaryOp::And),
            _ => None,
        })
    }

    fn parse_equality(&mut self) -> ParseResult<ExprId> {
        self.parse_binary_level(Self::parse_relational, |kind| match kind {
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            _ => None,
        })
    }

    fn parse_relational(&mut self) -> ParseResult<ExprId> {
        self.parse_binary_level(Self::parse_additive, |kind| match kind {
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            _ => None,
        })
    }

    fn parse_additive(&mut self) -> ParseResult<ExprId> {
        self.parse_binary_level(Self::parse_multiplicative, |kind| match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        })
    }

    fn parse_multiplicative(&mut self) -> ParseResult<ExprId> {
        self.parse_binary_level(Self::parse_unary, |kind| match kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        })
    }

    /// One left-associative precedence level: `operand (op operand)*`.
    fn parse_binary_level(
        &mut self,
        operand: fn(&mut Self) -> ParseResult<ExprId>,
        op_for: fn(TokenKind) -> Option<BinaryOp>,
    ) -> ParseResult<ExprId> {
        let mut left = operand(self)?;
        while let Some(op) = op_for(self.cursor.current_kind()) {
            self.cursor.advance();
            let right = operand(self)?;
            let span = self
                .arena
                .get_expr(left)
                .span
                .merge(self.arena.get_expr(right).span);
            trace!(op = op.as_symbol(), "binary");
            left = self.alloc(ExprKind::Binary { op, left, right }, span);
        }
        Ok(left)
    }

    /// `unary := ('-' | '!') unary | postfix`
    fn parse_unary(&mut self) -> ParseResult<ExprId> {
        let op = match self.cursor.current_kind() {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Bang => UnaryOp::Not,
            _ => return self.parse_postfix(),
        };
        let start = self.cursor.advance().span;
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = self.span_from(start);
        Ok(self.alloc(ExprKind::Unary { op, operand }, span))
    }

    /// `postfix := IDENT '(' args? ')' | primary`
    fn parse_postfix(&mut self) -> ParseResult<ExprId> {
        let Some(callee) = self.cursor.current_ident() else {
            return self.parse_primary();
        };
        if self.cursor.peek_kind(1) != TokenKind::LParen {
            return self.parse_primary();
        }
        let start = self.cursor.advance().span;
        self.cursor.advance();

        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                args.push(self.parse_expression()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;
        let args = self.arena.alloc_expr_list(args);
        let span = self.span_from(start);
        Ok(self.alloc(ExprKind::Call { callee, args }, span))
    }

    /// `primary := INT | REAL | CHAR | IDENT | '(' expression ')'`
    fn parse_primary(&mut self) -> ParseResult<ExprId> {
        let token = self.cursor.current();
        let kind = match token.kind {
            TokenKind::Int(n) => ExprKind::Int(n),
            TokenKind::Real(r) => ExprKind::Real(r),
            TokenKind::Char(c) => ExprKind::Char(c),
            TokenKind::Ident(name) => ExprKind::Ident(name),
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                return Ok(inner);
            }
            _ => return Err(self.unexpected("expression")),
        };
        self.cursor.advance();
        Ok(self.alloc(kind, token.span))
    }

    #[inline]
    fn alloc(&mut self, kind: ExprKind, span: minic_ir::Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }
}
