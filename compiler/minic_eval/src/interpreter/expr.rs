//! Expression evaluation.

use minic_ir::{ExprId, ExprKind, Name, Span};
use minic_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{undefined_variable, void_value_used, EvalResult};
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::value::Value;

impl Interpreter<'_> {
    /// Evaluate an expression that must produce a value.
    pub fn eval_expr(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(id))
    }

    fn eval_expr_inner(&mut self, id: ExprId) -> EvalResult {
        let expr = *self.arena.get_expr(id);
        match expr.kind {
            ExprKind::Int(n) => Ok(Value::Integer(n)),
            ExprKind::Real(r) => Ok(Value::Real(r)),
            ExprKind::Char(c) => Ok(Value::Character(c)),
            ExprKind::Ident(name) => self.eval_ident(name, expr.span),
            ExprKind::Unary { op, operand } => {
                let value = self.eval_expr(operand)?;
                Ok(evaluate_unary(value, op))
            }
            ExprKind::Binary { op, left, right } => {
                // Both sides are always evaluated, logical operators included.
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(left, right, op).map_err(|e| e.with_span(expr.span))
            }
            ExprKind::Assign { target, value } => self.eval_assign(target, value, expr.span),
            ExprKind::Call { callee, args } => self
                .eval_call(callee, args, expr.span)?
                .ok_or_else(|| void_value_used(self.interner.lookup(callee)).with_span(expr.span)),
        }
    }

    /// Evaluate an expression statement. Only a call can yield no value.
    pub(crate) fn eval_expr_stmt(&mut self, id: ExprId) -> EvalResult<Option<Value>> {
        let expr = *self.arena.get_expr(id);
        match expr.kind {
            ExprKind::Call { callee, args } => self.eval_call(callee, args, expr.span),
            _ => self.eval_expr(id).map(Some),
        }
    }

    fn eval_ident(&self, name: Name, span: Span) -> EvalResult {
        self.env
            .get(name)
            .map(|variable| variable.value)
            .ok_or_else(|| undefined_variable(self.interner.lookup(name)).with_span(span))
    }

    /// `target = value`: evaluate, convert to the target's declared type,
    /// store, and yield the stored value.
    fn eval_assign(&mut self, target: Name, value: ExprId, span: Span) -> EvalResult {
        let value = self.eval_expr(value)?;
        let Some(variable) = self.env.get(target) else {
            return Err(undefined_variable(self.interner.lookup(target)).with_span(span));
        };
        let stored = variable.ty.coerce(value);
        self.env
            .assign(target, variable.ty, stored)
            .map_err(|_| undefined_variable(self.interner.lookup(target)).with_span(span))?;
        Ok(stored)
    }
}
