//! Flat AST for the MiniC language.
//!
//! Every node is `Copy`; children are arena indices. Parentheses leave no
//! trace in the tree.

use std::fmt;

use crate::{ExprId, ExprRange, Name, ParamRange, Span, StmtId, StmtRange};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// Integer literal (no decimal point in the source).
    Int(i32),
    /// Literal with a decimal point.
    Real(f64),
    /// Character literal, escapes already resolved.
    Char(u8),
    Ident(Name),
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// `target = value`; evaluates to the stored value.
    Assign {
        target: Name,
        value: ExprId,
    },
    Call {
        callee: Name,
        args: ExprRange,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Eq,
    NotEq,
    And,
    Or,
}

impl BinaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div
        )
    }

    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Lt
                | BinaryOp::Gt
                | BinaryOp::LtEq
                | BinaryOp::GtEq
                | BinaryOp::Eq
                | BinaryOp::NotEq
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl UnaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// A type specifier as written in the source.
///
/// Only the first five are meaningful to the evaluator; the rest parse so that
/// they can be reported as unknown types at evaluation time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeSpec {
    Int,
    Float,
    Double,
    Char,
    Void,
    /// `long`, `short`, `signed`, `unsigned`.
    Other(Name),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub const fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// `type name = init;`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VarDecl {
    pub ty: TypeSpec,
    pub name: Name,
    pub init: Option<ExprId>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ForInit {
    None,
    Decl(VarDecl),
    Expr(ExprId),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StmtKind {
    Expr(ExprId),
    Decl(VarDecl),
    Block(StmtRange),
    If {
        cond: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },
    While {
        cond: ExprId,
        body: StmtId,
    },
    DoWhile {
        body: StmtId,
        cond: ExprId,
    },
    For {
        init: ForInit,
        cond: Option<ExprId>,
        update: Option<ExprId>,
        body: StmtId,
    },
    Return(Option<ExprId>),
    /// A lone `;`.
    Empty,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub ty: TypeSpec,
    pub name: Name,
    pub span: Span,
}

/// `type name(params) { body }`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FunctionDef {
    pub name: Name,
    pub return_type: TypeSpec,
    pub params: ParamRange,
    pub body: StmtRange,
    pub span: Span,
}

/// A top-level item of a REPL unit or translation unit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Item {
    Function(FunctionDef),
    /// A declaration or (REPL only) any other statement.
    Stmt(StmtId),
}
