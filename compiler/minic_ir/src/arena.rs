//! Arena storage for the flat AST.

use std::fmt;
use std::sync::Arc;

use crate::ast::{Expr, Param, Stmt};
use crate::{ExprId, ExprRange, ParamRange, StmtId, StmtRange};

/// Contiguous storage for every node produced by one parse.
///
/// Child references are [`ExprId`]/[`StmtId`] indices; variable-length lists
/// (call arguments, block bodies, parameters) are ranges into side tables.
#[derive(Clone, Default, PartialEq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    expr_lists: Vec<ExprId>,
    stmt_lists: Vec<StmtId>,
    params: Vec<Param>,
}

/// Converts a table length into a `u32` index.
///
/// Sources are capped at `u32::MAX` bytes and every node consumes at least
/// one byte, so no table can outgrow `u32`.
#[inline]
fn next_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with capacity estimated from the source length.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 4;
        ExprArena {
            exprs: Vec::with_capacity(estimated),
            stmts: Vec::with_capacity(estimated / 2),
            expr_lists: Vec::with_capacity(estimated / 8),
            stmt_lists: Vec::with_capacity(estimated / 2),
            params: Vec::with_capacity(estimated / 16),
        }
    }

    // ===== Expressions =====

    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(next_index(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// # Panics
    /// Panics if `id` did not come from this arena.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = next_index(self.expr_lists.len());
        self.expr_lists.extend(exprs);
        ExprRange::new(start, next_index(self.expr_lists.len()) - start)
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.to_range()]
    }

    // ===== Statements =====

    #[inline]
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(next_index(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    /// # Panics
    /// Panics if `id` did not come from this arena.
    #[inline]
    #[track_caller]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    #[inline]
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    pub fn alloc_stmt_list(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = next_index(self.stmt_lists.len());
        self.stmt_lists.extend(stmts);
        StmtRange::new(start, next_index(self.stmt_lists.len()) - start)
    }

    #[inline]
    pub fn get_stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.to_range()]
    }

    // ===== Parameters =====

    pub fn alloc_params(&mut self, params: impl IntoIterator<Item = Param>) -> ParamRange {
        let start = next_index(self.params.len());
        self.params.extend(params);
        ParamRange::new(start, next_index(self.params.len()) - start)
    }

    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Param] {
        &self.params[range.to_range()]
    }
}

impl fmt::Debug for ExprArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExprArena")
            .field("exprs", &self.exprs.len())
            .field("stmts", &self.stmts.len())
            .finish_non_exhaustive()
    }
}

/// An arena shared by every function defined in it.
///
/// Function values keep a clone so their bodies stay evaluable after the
/// parse output that produced them is dropped.
#[derive(Clone)]
pub struct SharedArena(Arc<ExprArena>);

impl SharedArena {
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Arc::new(arena))
    }
}

impl std::ops::Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for SharedArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedArena({:?})", &*self.0)
    }
}
