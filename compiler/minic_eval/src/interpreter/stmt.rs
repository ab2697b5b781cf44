//! Statement execution.

use minic_ir::{ExprId, ForInit, StmtId, StmtKind, StmtRange, VarDecl};
use minic_stack::ensure_sufficient_stack;
use tracing::trace;

use super::{ExecResult, Flow, Interpreter};
use crate::errors::EvalResult;
use crate::types::VarType;
use crate::value::Value;

impl Interpreter<'_> {
    pub fn exec_stmt(&mut self, id: StmtId) -> ExecResult {
        ensure_sufficient_stack(|| self.exec_stmt_inner(id))
    }

    fn exec_stmt_inner(&mut self, id: StmtId) -> ExecResult {
        let stmt = *self.arena.get_stmt(id);
        match stmt.kind {
            StmtKind::Expr(expr) => self.eval_expr_stmt(expr).map(Flow::Normal),
            StmtKind::Decl(decl) => self
                .exec_decl(&decl)
                .map(|value| Flow::Normal(Some(value)))
                .map_err(|e| e.with_span(stmt.span)),
            StmtKind::Block(body) => self.with_env_scope(|scoped| scoped.exec_sequence(body)),
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_expr(cond)?.is_truthy() {
                    self.exec_stmt(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_stmt(else_branch)
                } else {
                    Ok(Flow::Normal(None))
                }
            }
            StmtKind::While { cond, body } => {
                while self.eval_expr(cond)?.is_truthy() {
                    if let ret @ Flow::Return(_) = self.exec_stmt(body)? {
                        return Ok(ret);
                    }
                }
                Ok(Flow::Normal(None))
            }
            StmtKind::DoWhile { body, cond } => {
                loop {
                    if let ret @ Flow::Return(_) = self.exec_stmt(body)? {
                        return Ok(ret);
                    }
                    if !self.eval_expr(cond)?.is_truthy() {
                        break;
                    }
                }
                Ok(Flow::Normal(None))
            }
            StmtKind::For {
                init,
                cond,
                update,
                body,
            } => self.with_env_scope(|scoped| scoped.exec_for(init, cond, update, body)),
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Integer(0),
                };
                Ok(Flow::Return(value))
            }
            StmtKind::Empty => Ok(Flow::Normal(None)),
        }
    }

    /// Execute statements in order, folding their values.
    ///
    /// The result is the value of the most recent statement that produced
    /// one; statements without a value leave it unchanged. A `return` stops
    /// the sequence and propagates.
    pub(crate) fn exec_sequence(&mut self, body: StmtRange) -> ExecResult {
        let arena = self.arena;
        let mut last = None;
        for &stmt in arena.get_stmt_list(body) {
            match self.exec_stmt(stmt)? {
                Flow::Normal(Some(value)) => last = Some(value),
                Flow::Normal(None) => {}
                ret @ Flow::Return(_) => return Ok(ret),
            }
        }
        Ok(Flow::Normal(last))
    }

    /// Declare a variable in the current scope and return its stored value.
    pub(crate) fn exec_decl(&mut self, decl: &VarDecl) -> EvalResult {
        let ty = VarType::resolve(decl.ty, self.interner)?;
        let value = match decl.init {
            Some(init) => ty.coerce(self.eval_expr(init)?),
            None => ty.zero_value(),
        };
        self.env.define(decl.name, ty, value);
        Ok(value)
    }

    /// Body of a `for` loop; runs inside the loop's own scope.
    fn exec_for(
        &mut self,
        init: ForInit,
        cond: Option<ExprId>,
        update: Option<ExprId>,
        body: StmtId,
    ) -> ExecResult {
        match init {
            ForInit::None => {}
            ForInit::Decl(decl) => {
                self.exec_decl(&decl)?;
            }
            ForInit::Expr(expr) => {
                self.eval_expr(expr)?;
            }
        }

        let mut iteration = 0usize;
        loop {
            if let Some(cond) = cond {
                if !self.eval_expr(cond)?.is_truthy() {
                    break;
                }
            }
            trace!(iteration, "for loop body");
            if let ret @ Flow::Return(_) = self.exec_stmt(body)? {
                return Ok(ret);
            }
            if let Some(update) = update {
                self.eval_expr(update)?;
            }
            iteration += 1;
        }
        trace!(iterations = iteration, "for loop done");
        Ok(Flow::Normal(None))
    }
}
