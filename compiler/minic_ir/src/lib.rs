//! Intermediate representation for the MiniC interpreter.
//!
//! This crate holds everything the front end produces and the evaluator
//! consumes:
//!
//! - [`Span`] and [`LineOffsetTable`] for source locations
//! - [`Name`] and [`StringInterner`] for identifiers
//! - [`ExprArena`] with the flat AST ([`ast`])
//! - [`SyntaxError`], the front end's only failure value
//!
//! # Arena Threading
//!
//! Function bodies are stored as ranges into the arena of the parse that
//! produced them. Functions carry a [`SharedArena`] so a body defined in one
//! REPL line can still be evaluated after that line's parse output is gone.

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod span;
mod syntax_error;

pub use arena::{ExprArena, SharedArena};
pub use ast::{
    BinaryOp, Expr, ExprKind, ForInit, FunctionDef, Item, Param, Stmt, StmtKind, TypeSpec,
    UnaryOp, VarDecl,
};
pub use expr_id::{ExprId, ExprRange, ParamRange, StmtId, StmtRange};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use span::{LineOffsetTable, Span, SpanError};
pub use syntax_error::SyntaxError;
